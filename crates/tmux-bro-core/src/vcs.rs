//! Version-control root lookup
//!
//! The project config file is looked up at the repository root first, so the
//! resolver needs to ask "which repository is this directory in". The trait
//! keeps the `git` process out of unit tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

/// Finds the version-control root containing a directory.
pub trait VcsRootLocator {
    fn root_of(&self, dir: &Path) -> Option<PathBuf>;
}

/// Asks `git rev-parse --show-toplevel` in the target directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRoot;

impl VcsRootLocator for GitRoot {
    fn root_of(&self, dir: &Path) -> Option<PathBuf> {
        let output = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .map_err(|e| debug!(error = %e, "failed to run git"))
            .ok()?;

        if !output.status.success() {
            debug!(dir = %dir.display(), "not inside a git repository");
            return None;
        }

        parse_toplevel(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Never finds a repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVcs;

impl VcsRootLocator for NoVcs {
    fn root_of(&self, _dir: &Path) -> Option<PathBuf> {
        None
    }
}

/// Always answers with the same root.
#[derive(Debug, Clone, Default)]
pub struct FixedRoot(pub PathBuf);

impl VcsRootLocator for FixedRoot {
    fn root_of(&self, _dir: &Path) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

fn parse_toplevel(stdout: &str) -> Option<PathBuf> {
    let root = stdout.trim();
    if root.is_empty() {
        None
    } else {
        Some(PathBuf::from(root))
    }
}
