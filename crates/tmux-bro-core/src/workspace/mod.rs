//! Project structure detection
//!
//! Decides whether a directory is a multi-package workspace, which package
//! manager governs a directory, and whether a package declares a dev script.
//!
//! # Workspace probes
//!
//! Probes run in a fixed order and the first one that yields members wins:
//!
//! 1. pnpm: `pnpm-workspace.yaml` → `packages`
//! 2. npm: `package.json` → `workspaces` (list, or object with `packages`)
//! 3. cargo: `Cargo.toml` → `[workspace] members`
//!
//! A probe that fails for any reason (missing file, malformed manifest,
//! missing key, no existing members) is a miss, never an error for the caller.

mod package_manager;
mod patterns;
mod probes;
mod scripts;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use package_manager::{detect_package_manager, PackageManagerKind};
pub use patterns::{has_wildcard, resolve_patterns};
pub use probes::{CargoProbe, NpmProbe, PnpmProbe, CARGO_TOML, PACKAGE_JSON, PNPM_WORKSPACE_FILE};
pub use scripts::{has_dev_script, read_package_json};

/// Why a probe did not recognise a workspace.
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    #[error("{} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to read {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("{} has no `{key}`", path.display())]
    MissingKey { path: PathBuf, key: &'static str },

    #[error("{} declares no existing member directories", .0.display())]
    NoMembers(PathBuf),
}

impl ProbeError {
    fn parse(path: &Path, err: &impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    fn missing_key(path: &Path, key: &'static str) -> Self {
        Self::MissingKey {
            path: path.to_path_buf(),
            key,
        }
    }
}

/// One ecosystem's way of recognising a workspace root.
pub trait WorkspaceProbe {
    /// Short ecosystem name used in logs.
    fn name(&self) -> &'static str;

    /// Return the member directories declared under `root`, never empty on success.
    fn probe(&self, root: &Path) -> Result<Vec<PathBuf>, ProbeError>;
}

/// The probes in priority order.
pub fn default_probes() -> [&'static dyn WorkspaceProbe; 3] {
    [&PnpmProbe, &NpmProbe, &CargoProbe]
}

/// Detect whether `root` is a workspace and list its member package directories.
///
/// Returns `None` when no probe matches.
pub fn detect_workspace(root: &Path) -> Option<Vec<PathBuf>> {
    detect_workspace_with(root, &default_probes())
}

/// [`detect_workspace`] over an explicit probe list.
pub fn detect_workspace_with(root: &Path, probes: &[&dyn WorkspaceProbe]) -> Option<Vec<PathBuf>> {
    probes.iter().find_map(|probe| match probe.probe(root) {
        Ok(members) if !members.is_empty() => {
            debug!(
                probe = probe.name(),
                root = %root.display(),
                members = members.len(),
                "workspace detected"
            );
            Some(members)
        }
        Ok(_) => None,
        Err(reason) => {
            debug!(probe = probe.name(), %reason, "workspace probe did not match");
            None
        }
    })
}
