//! Configuration loading from files
//!
//! This module handles locating and reading:
//! 1. Global config: ~/.config/tmux-bro.yaml
//! 2. Project config: .tmux-bro.yaml at the VCS root, else the target directory
//!
//! The strict loader ([`load_yaml_file`]) reports every failure. The lenient
//! path ([`load_config_file`] → [`LoadOutcome::into_config`]) turns a missing
//! or broken file into an empty [`RawConfig`] so synthesis always succeeds.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::types::RawConfig;
use crate::vcs::VcsRootLocator;
use crate::{Error, Result};

pub const GLOBAL_CONFIG_FILE: &str = "tmux-bro.yaml";
pub const PROJECT_CONFIG_FILE: &str = ".tmux-bro.yaml";

// ═══════════════════════════════════════════════════════════════════════════
// PATH HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Get path to global config file (`~/.config/tmux-bro.yaml` on every platform)
pub fn global_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join(GLOBAL_CONFIG_FILE)
    })
}

/// Candidate project config paths for `dir`, in lookup order.
///
/// The VCS root comes first; `dir` itself is added when it is not that root.
pub fn project_config_candidates(dir: &Path, vcs_root: Option<&Path>) -> Vec<PathBuf> {
    let at_dir = dir.join(PROJECT_CONFIG_FILE);
    match vcs_root {
        Some(root) if same_directory(root, dir) => vec![root.join(PROJECT_CONFIG_FILE)],
        Some(root) => vec![root.join(PROJECT_CONFIG_FILE), at_dir],
        None => vec![at_dir],
    }
}

/// First existing project config file for `dir`.
pub fn find_project_config(dir: &Path, locator: &dyn VcsRootLocator) -> Option<PathBuf> {
    let root = locator.root_of(dir);
    project_config_candidates(dir, root.as_deref())
        .into_iter()
        .find(|candidate| candidate.is_file())
}

fn same_directory(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LOADING
// ═══════════════════════════════════════════════════════════════════════════

/// Result of trying to read one config file.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Loaded(RawConfig),
    Missing,
    Invalid(Error),
}

impl LoadOutcome {
    /// Collapse to a config; missing and invalid files both mean "no settings".
    pub fn into_config(self) -> RawConfig {
        match self {
            Self::Loaded(config) => config,
            Self::Missing => RawConfig::default(),
            Self::Invalid(err) => {
                warn!("Ignoring config file: {err}");
                RawConfig::default()
            }
        }
    }

    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Load a YAML config file into a [`RawConfig`]
///
/// An empty file (or one holding only `null`) is an empty config.
///
/// # Errors
///
/// Returns error if:
/// - Path is a directory instead of a file
/// - File cannot be read
/// - YAML is malformed or a key has the wrong type
pub fn load_yaml_file(path: &Path) -> Result<RawConfig> {
    if path.is_dir() {
        return Err(Error::io_error(format!(
            "Config path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::io_error(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    if content.trim().is_empty() {
        return Ok(RawConfig::default());
    }

    serde_yaml::from_str::<Option<RawConfig>>(&content)
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            Error::parse_error(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
}

/// Load a config file, classifying the result instead of failing.
pub fn load_config_file(path: &Path) -> LoadOutcome {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found");
        return LoadOutcome::Missing;
    }
    match load_yaml_file(path) {
        Ok(config) => {
            debug!(path = %path.display(), "loaded config file");
            LoadOutcome::Loaded(config)
        }
        Err(err) => LoadOutcome::Invalid(err),
    }
}

/// Global config, or an empty one when there is no home directory or no file.
pub fn load_global_config(path: Option<&Path>) -> RawConfig {
    path.map_or_else(RawConfig::default, |path| {
        load_config_file(path).into_config()
    })
}

/// Project config for `dir`, or an empty one when none is found.
pub fn load_project_config(dir: &Path, locator: &dyn VcsRootLocator) -> RawConfig {
    find_project_config(dir, locator).map_or_else(RawConfig::default, |path| {
        load_config_file(&path).into_config()
    })
}
