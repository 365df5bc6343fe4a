//! tmux driver - Imperative Shell
//!
//! Materializes a [`SessionDescriptor`] by issuing tmux commands. All process
//! execution goes through [`TmuxRunner`] so the command sequence is testable
//! without a tmux server.

use std::process::Command;

use tracing::{debug, info};

use super::descriptor::{SessionDescriptor, Window};
use crate::error::SystemError;
use crate::{Error, Result};

/// Runs one tmux invocation.
pub trait TmuxRunner {
    /// Run tmux with `args`, returning captured stdout.
    ///
    /// # Errors
    ///
    /// Returns error if tmux cannot be started or exits unsuccessfully
    fn run(&self, args: &[String]) -> Result<String>;

    /// Run tmux attached to the current terminal.
    ///
    /// # Errors
    ///
    /// Returns error if tmux cannot be started or exits unsuccessfully
    fn run_interactive(&self, args: &[String]) -> Result<()>;
}

/// Spawns the `tmux` binary found on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TmuxCommand;

impl TmuxCommand {
    fn spawn_error(err: &std::io::Error) -> Error {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::tool_not_found("tmux", "Install tmux and make sure it is on PATH")
        } else {
            Error::command_error(format!("Failed to execute tmux: {err}"))
        }
    }
}

impl TmuxRunner for TmuxCommand {
    fn run(&self, args: &[String]) -> Result<String> {
        let output = Command::new("tmux")
            .args(args)
            .output()
            .map_err(|e| Self::spawn_error(&e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::command_error(format!(
                "tmux {} failed: {}",
                args.first().map_or("", String::as_str),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn run_interactive(&self, args: &[String]) -> Result<()> {
        let status = Command::new("tmux")
            .args(args)
            .status()
            .map_err(|e| Self::spawn_error(&e))?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::command_error(format!(
                "tmux {} exited with {status}",
                args.first().map_or("", String::as_str)
            )))
        }
    }
}

/// A live tmux session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandle {
    pub name: String,
}

impl SessionHandle {
    /// Exact-match target for this session.
    fn target(&self) -> String {
        format!("={}", self.name)
    }

    /// Move the terminal into this session.
    ///
    /// Inside tmux the current client is switched; outside, tmux attaches.
    ///
    /// # Errors
    ///
    /// Returns error if the tmux client command fails
    pub fn attach<R: TmuxRunner + ?Sized>(&self, runner: &R, inside_tmux: bool) -> Result<()> {
        let verb = if inside_tmux {
            "switch-client"
        } else {
            "attach-session"
        };
        info!(session = %self.name, verb, "entering session");
        runner.run_interactive(&args([verb, "-t", &self.target()]))
    }
}

/// tmux rewrites `.` and `:` in session names; do it up front so lookups match.
pub fn tmux_session_name(name: &str) -> String {
    name.replace(['.', ':'], "_")
}

pub struct TmuxDriver<R> {
    runner: R,
}

impl<R: TmuxRunner> TmuxDriver<R> {
    pub const fn new(runner: R) -> Self {
        Self { runner }
    }

    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Look up a running session by exact name.
    ///
    /// # Errors
    ///
    /// Returns error only if tmux itself cannot be run
    pub fn find_session(&self, name: &str) -> Result<Option<SessionHandle>> {
        let handle = SessionHandle {
            name: tmux_session_name(name),
        };
        match self.runner.run(&args(["has-session", "-t", &handle.target()])) {
            Ok(_) => Ok(Some(handle)),
            Err(Error::System(SystemError::Command(reason))) => {
                debug!(session = %handle.name, %reason, "no such session");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Create a detached session laid out as `descriptor` describes.
    ///
    /// # Errors
    ///
    /// Returns error if the descriptor has no windows or any tmux command fails
    pub fn create_session(&self, descriptor: &SessionDescriptor) -> Result<SessionHandle> {
        let handle = SessionHandle {
            name: tmux_session_name(&descriptor.session_name),
        };
        if descriptor.windows.is_empty() {
            return Err(Error::invalid_config(format!(
                "session '{}' has no windows",
                handle.name
            )));
        }

        let window_ids = descriptor
            .windows
            .iter()
            .enumerate()
            .map(|(index, window)| self.create_window(&handle.name, index == 0, window))
            .collect::<Result<Vec<_>>>()?;
        if let Some(window_id) = window_ids.first() {
            self.tmux(["select-window", "-t", window_id])?;
        }

        info!(
            session = %handle.name,
            windows = descriptor.windows.len(),
            "session created"
        );
        Ok(handle)
    }

    fn create_window(&self, session: &str, first: bool, window: &Window) -> Result<String> {
        let dir = window.start_directory.display().to_string();
        let mut open = if first {
            args(["new-session", "-d", "-s", session, "-c", &dir])
        } else {
            args(["new-window", "-t", &format!("{session}:"), "-c", &dir])
        };
        if let Some(name) = &window.name {
            open.extend(args(["-n", name]));
        }
        open.extend(args(["-P", "-F", "#{window_id} #{pane_id}"]));

        let (window_id, first_pane) = parse_window_ids(&self.runner.run(&open)?)?;
        debug!(%window_id, %first_pane, name = ?window.name, "window opened");

        let mut pane_ids = vec![first_pane];
        for _ in 1..window.panes.len() {
            let out = self.tmux([
                "split-window", "-t", &window_id, "-c", &dir, "-P", "-F", "#{pane_id}",
            ])?;
            pane_ids.push(parse_single_id(&out)?);
        }

        for (pane_id, pane) in pane_ids.iter().zip(&window.panes) {
            for command in pane.commands() {
                self.tmux(["send-keys", "-t", pane_id, "-l", command])?;
                self.tmux(["send-keys", "-t", pane_id, "Enter"])?;
            }
        }

        for (key, value) in &window.options {
            self.tmux(["set-window-option", "-t", &window_id, key, value])?;
        }
        self.tmux(["select-layout", "-t", &window_id, window.layout_name()])?;
        if let Some(first_pane) = pane_ids.first() {
            self.tmux(["select-pane", "-t", first_pane])?;
        }

        Ok(window_id)
    }

    fn tmux<const N: usize>(&self, parts: [&str; N]) -> Result<String> {
        self.runner.run(&args(parts))
    }
}

fn args<const N: usize>(parts: [&str; N]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}

fn parse_window_ids(output: &str) -> Result<(String, String)> {
    let mut ids = output.split_whitespace();
    match (ids.next(), ids.next()) {
        (Some(window), Some(pane)) => Ok((window.to_string(), pane.to_string())),
        _ => Err(Error::parse_error(format!(
            "unexpected tmux output '{}', expected window and pane ids",
            output.trim()
        ))),
    }
}

fn parse_single_id(output: &str) -> Result<String> {
    output
        .split_whitespace()
        .next()
        .map(ToString::to_string)
        .ok_or_else(|| Error::parse_error("tmux printed no pane id"))
}
