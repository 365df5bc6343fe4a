//! Ecosystem-specific workspace probes.
//!
//! Each probe reads one manifest and returns the member directories it
//! declares, or a [`ProbeError`] saying why the directory is not that kind of
//! workspace.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::patterns::resolve_patterns;
use super::{ProbeError, WorkspaceProbe};

pub const PNPM_WORKSPACE_FILE: &str = "pnpm-workspace.yaml";
pub const PACKAGE_JSON: &str = "package.json";
pub const CARGO_TOML: &str = "Cargo.toml";

/// `pnpm-workspace.yaml` with a `packages` list.
#[derive(Debug, Clone, Copy, Default)]
pub struct PnpmProbe;

/// `package.json` with a `workspaces` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct NpmProbe;

/// `Cargo.toml` with `[workspace] members`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoProbe;

#[derive(Debug, Deserialize)]
struct PnpmWorkspaceFile {
    packages: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct NpmManifest {
    workspaces: Option<NpmWorkspaces>,
}

/// npm and yarn accept either a bare list or `{ "packages": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NpmWorkspaces {
    Patterns(Vec<String>),
    Object { packages: Option<Vec<String>> },
}

#[derive(Debug, Deserialize)]
struct CargoManifest {
    workspace: Option<CargoWorkspace>,
}

#[derive(Debug, Deserialize)]
struct CargoWorkspace {
    members: Option<Vec<String>>,
}

impl WorkspaceProbe for PnpmProbe {
    fn name(&self) -> &'static str {
        "pnpm"
    }

    fn probe(&self, root: &Path) -> Result<Vec<PathBuf>, ProbeError> {
        let path = root.join(PNPM_WORKSPACE_FILE);
        let content = read_manifest(&path)?;
        let file: PnpmWorkspaceFile =
            serde_yaml::from_str(&content).map_err(|e| ProbeError::parse(&path, &e))?;
        let patterns = file
            .packages
            .ok_or_else(|| ProbeError::missing_key(&path, "packages"))?;

        non_empty(&path, resolve_patterns(root, &patterns))
    }
}

impl WorkspaceProbe for NpmProbe {
    fn name(&self) -> &'static str {
        "npm"
    }

    fn probe(&self, root: &Path) -> Result<Vec<PathBuf>, ProbeError> {
        let path = root.join(PACKAGE_JSON);
        let content = read_manifest(&path)?;
        let manifest: NpmManifest =
            serde_json::from_str(&content).map_err(|e| ProbeError::parse(&path, &e))?;
        let patterns = match manifest.workspaces {
            Some(NpmWorkspaces::Patterns(patterns))
            | Some(NpmWorkspaces::Object {
                packages: Some(patterns),
            }) => patterns,
            Some(NpmWorkspaces::Object { packages: None }) => {
                return Err(ProbeError::missing_key(&path, "workspaces.packages"))
            }
            None => return Err(ProbeError::missing_key(&path, "workspaces")),
        };

        non_empty(&path, resolve_patterns(root, &patterns))
    }
}

impl WorkspaceProbe for CargoProbe {
    fn name(&self) -> &'static str {
        "cargo"
    }

    fn probe(&self, root: &Path) -> Result<Vec<PathBuf>, ProbeError> {
        let path = root.join(CARGO_TOML);
        let content = read_manifest(&path)?;
        let manifest: CargoManifest =
            toml::from_str(&content).map_err(|e| ProbeError::parse(&path, &e))?;
        let members = manifest
            .workspace
            .ok_or_else(|| ProbeError::missing_key(&path, "workspace"))?
            .members
            .ok_or_else(|| ProbeError::missing_key(&path, "workspace.members"))?;

        // Cargo members are literal paths here; no glob expansion.
        let dirs = members
            .iter()
            .map(|member| root.join(member))
            .filter(|dir| dir.is_dir())
            .collect();

        non_empty(&path, dirs)
    }
}

fn read_manifest(path: &Path) -> Result<String, ProbeError> {
    if !path.is_file() {
        return Err(ProbeError::MissingFile(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|e| ProbeError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn non_empty(manifest: &Path, members: Vec<PathBuf>) -> Result<Vec<PathBuf>, ProbeError> {
    if members.is_empty() {
        Err(ProbeError::NoMembers(manifest.to_path_buf()))
    } else {
        Ok(members)
    }
}
