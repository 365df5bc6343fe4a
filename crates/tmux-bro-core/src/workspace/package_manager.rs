//! Package manager classification from lock-file evidence.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The tool inferred to govern dependency and script execution for a directory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerKind {
    Pnpm,
    Yarn,
    Npm,
    Cargo,
    Unknown,
}

impl PackageManagerKind {
    /// Command that starts the conventional dev script under this manager.
    ///
    /// npm needs `run` for non-lifecycle scripts; the others accept `<manager> dev`.
    pub fn dev_command(self) -> String {
        match self {
            Self::Npm => "npm run dev".to_string(),
            other => format!("{other} dev"),
        }
    }
}

/// Detect which package manager governs `dir`.
///
/// Precedence: `pnpm-lock.yaml`, `yarn.lock`, `package-lock.json`, then
/// `Cargo.lock` or `Cargo.toml`, then npm for an unlocked `package.json`.
/// Only `dir` itself is inspected, so workspace members are classified on
/// their own files.
pub fn detect_package_manager(dir: &Path) -> PackageManagerKind {
    if dir.join("pnpm-lock.yaml").exists() {
        PackageManagerKind::Pnpm
    } else if dir.join("yarn.lock").exists() {
        PackageManagerKind::Yarn
    } else if dir.join("package-lock.json").exists() {
        PackageManagerKind::Npm
    } else if dir.join("Cargo.lock").exists() || dir.join("Cargo.toml").exists() {
        PackageManagerKind::Cargo
    } else if dir.join("package.json").exists() {
        PackageManagerKind::Npm
    } else {
        PackageManagerKind::Unknown
    }
}
