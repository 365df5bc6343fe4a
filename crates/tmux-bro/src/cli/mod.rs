//! Command-line flow: pick a directory, then reuse or create its session.

pub mod commands;
pub mod setup;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tmux_bro_core::config::{global_config_path, load_global_config};
use tmux_bro_core::{
    build_session_config, session_name_for, SessionHandle, TmuxCommand, TmuxDriver, TmuxRunner,
};
use tracing::info;

use crate::selector::{self, expand_path, PROJECTS_DIR_ENV};

/// What the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub directory: Option<String>,
    pub dry_run: bool,
}

impl Invocation {
    pub fn from_matches(matches: &clap::ArgMatches) -> Self {
        Self {
            directory: matches.get_one::<String>("directory").cloned(),
            dry_run: matches.get_flag("dry-run"),
        }
    }
}

/// The user closed the picker without choosing anything.
#[derive(Debug, Clone, Copy)]
pub struct NoSelection;

impl std::fmt::Display for NoSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("No directory was selected")
    }
}

impl std::error::Error for NoSelection {}

pub fn run_cli() -> Result<()> {
    let matches = commands::build_cli().get_matches();
    run(&Invocation::from_matches(&matches))
}

pub fn run(invocation: &Invocation) -> Result<()> {
    let directory = match &invocation.directory {
        Some(raw) => expand_path(raw),
        None => selector::select_directory(projects_dir().as_deref())?.ok_or(NoSelection)?,
    };
    let directory = project_directory(&directory)?;

    if invocation.dry_run {
        let descriptor = build_session_config(&directory);
        let json = serde_json::to_string_pretty(&descriptor)
            .context("Failed to serialize session")?;
        println!("{json}");
        return Ok(());
    }

    let driver = TmuxDriver::new(TmuxCommand);
    let handle = open_session(&driver, &directory)?;
    handle.attach(driver.runner(), std::env::var_os("TMUX").is_some())?;
    Ok(())
}

/// Reuse the session named after `directory`, or build and create it.
pub fn open_session<R: TmuxRunner>(driver: &TmuxDriver<R>, directory: &Path) -> Result<SessionHandle> {
    let name = session_name_for(directory);
    if let Some(existing) = driver.find_session(&name)? {
        info!(session = %existing.name, "reusing existing session");
        return Ok(existing);
    }

    let descriptor = build_session_config(directory);
    driver
        .create_session(&descriptor)
        .with_context(|| format!("Failed to create tmux session '{name}'"))
}

/// `projects_dir` from the global config, else the environment fallback.
fn projects_dir() -> Option<String> {
    load_global_config(global_config_path().as_deref())
        .projects_dir
        .or_else(|| std::env::var(PROJECTS_DIR_ENV).ok())
        .filter(|dir| !dir.trim().is_empty())
}

/// Absolute form of the chosen directory. Symlinks are kept so the session is
/// named after the link the user picked, not its target.
fn project_directory(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Invalid directory: {}", path.display()))?;
    anyhow::ensure!(
        absolute.is_dir(),
        "Directory not found: {}",
        absolute.display()
    );
    Ok(absolute)
}
