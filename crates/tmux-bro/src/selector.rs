//! Fuzzy project picker
//!
//! Feeds candidate directories into `fzf` and returns the chosen one.
//! Candidates come from `zoxide query -l` when zoxide is installed, otherwise
//! from the configured projects directory and its immediate subdirectories.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tmux_bro_core::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Environment fallback for `projects_dir`.
pub const PROJECTS_DIR_ENV: &str = "TMUX_BRO_PROJECTS_DIR";

/// Let the user pick a directory. `None` means nothing was chosen.
pub fn select_directory(projects_dir: Option<&str>) -> Result<Option<PathBuf>> {
    let fzf = which::which("fzf").map_err(|_| {
        Error::tool_not_found("fzf", "Install fzf: https://github.com/junegunn/fzf")
    })?;

    let candidates = match which::which("zoxide") {
        Ok(zoxide) => zoxide_candidates(&zoxide)?,
        Err(_) => {
            let dir = projects_dir.ok_or_else(|| {
                Error::tool_not_found(
                    "zoxide",
                    format!(
                        "Install zoxide, or set projects_dir in ~/.config/tmux-bro.yaml or {PROJECTS_DIR_ENV}"
                    ),
                )
            })?;
            let dir = expand_path(dir);
            debug!(dir = %dir.display(), "listing projects directory");
            join_lines(&list_projects(&dir)?)
        }
    };

    let output = run_fzf(&fzf, &candidates)?;
    Ok(parse_selection(&output).map(PathBuf::from))
}

/// Expand `~` and `$VAR`, keeping the input as-is when a variable is unset.
pub fn expand_path(raw: &str) -> PathBuf {
    let expanded = shellexpand::full(raw).unwrap_or_else(|_| shellexpand::tilde(raw));
    PathBuf::from(expanded.as_ref())
}

/// The directory itself followed by its immediate subdirectories, sorted.
pub fn list_projects(dir: &Path) -> Result<Vec<PathBuf>> {
    WalkDir::new(dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) if e.depth() == 0 => Some(Err(e)),
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to list projects in {}", dir.display()))
}

/// Pick the chosen path out of fzf's output.
///
/// The output is trimmed as a whole and split on newlines. A single line is the
/// selection. With more lines the first is fzf's expect-key line and the second
/// is the selection, even when that key line is empty. An empty line in the
/// selection slot means nothing was chosen.
pub fn parse_selection(output: &str) -> Option<&str> {
    let lines: Vec<&str> = output.trim().split('\n').collect();
    let selected = match *lines.as_slice() {
        [only] => only,
        [_, second, ..] => second,
        [] => return None,
    };
    Some(selected.trim_end_matches('\r')).filter(|line| !line.is_empty())
}

fn zoxide_candidates(zoxide: &Path) -> Result<String> {
    let output = Command::new(zoxide)
        .args(["query", "-l"])
        .output()
        .context("Failed to execute zoxide")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::command_error(format!("zoxide query failed: {}", stderr.trim())).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn run_fzf(fzf: &Path, candidates: &str) -> Result<String> {
    let mut child = Command::new(fzf)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .context("Failed to execute fzf")?;

    if let Some(mut stdin) = child.stdin.take() {
        // fzf may exit before reading everything; a broken pipe is not an error.
        if let Err(e) = stdin.write_all(candidates.as_bytes()) {
            debug!(error = %e, "fzf closed its input early");
        }
    }

    // Non-zero exit means no match or the user aborted; stdout is empty then.
    let output = child.wait_with_output().context("Failed to wait for fzf")?;
    debug!(status = %output.status, "fzf finished");
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn join_lines(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("{}\n", p.display()))
        .collect()
}
