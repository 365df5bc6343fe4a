//! Configuration layering (immutable functional pattern)
//!
//! Priority, highest first:
//! 1. `packages.<name>.dev_command` (project config only)
//! 2. Project config keys
//! 3. Global config keys
//! 4. Built-in defaults
//!
//! All merge operations return new values rather than mutating in place.

use std::path::Path;

use super::load::{load_global_config, load_project_config};
use super::types::{EffectiveConfig, RawConfig};
use crate::vcs::VcsRootLocator;

impl RawConfig {
    /// Merge another config over this one (other takes precedence).
    ///
    /// `packages` is never inherited from the lower layer: package overrides
    /// only make sense in the project file that names the packages.
    pub fn merge(self, other: Self) -> Self {
        Self {
            layout: other.layout.or(self.layout),
            main_pane_width: other.main_pane_width.or(self.main_pane_width),
            main_pane_height: other.main_pane_height.or(self.main_pane_height),
            projects_dir: other.projects_dir.or(self.projects_dir),
            dev_command: other.dev_command.or(self.dev_command),
            packages: other.packages,
        }
    }

    /// Dev command override declared for one package.
    pub fn package_dev_command(&self, package: &str) -> Option<&str> {
        self.packages
            .get(package)
            .and_then(|pkg| pkg.dev_command.as_deref())
    }

    /// Fill remaining gaps from built-in defaults.
    pub fn into_effective(self) -> EffectiveConfig {
        let defaults = EffectiveConfig::default();
        EffectiveConfig {
            layout: self.layout.unwrap_or(defaults.layout),
            main_pane_width: self.main_pane_width.unwrap_or(defaults.main_pane_width),
            main_pane_height: self.main_pane_height.unwrap_or(defaults.main_pane_height),
            dev_command: self.dev_command,
        }
    }
}

/// The two config files that apply to one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayers {
    pub global: RawConfig,
    pub project: RawConfig,
}

impl ConfigLayers {
    pub const fn new(global: RawConfig, project: RawConfig) -> Self {
        Self { global, project }
    }

    /// Resolve the dev command, honoring a package override when `package` is given.
    pub fn dev_command_for(&self, package: Option<&str>) -> Option<String> {
        package
            .and_then(|name| self.project.package_dev_command(name))
            .or(self.project.dev_command.as_deref())
            .or(self.global.dev_command.as_deref())
            .map(ToString::to_string)
    }

    /// Effective settings for the directory these layers were loaded for.
    pub fn effective(&self) -> EffectiveConfig {
        self.effective_for(None)
    }

    /// Effective settings with a package-scoped dev command override applied.
    pub fn effective_for(&self, package: Option<&str>) -> EffectiveConfig {
        let merged = self.global.clone().merge(self.project.clone());
        EffectiveConfig {
            dev_command: self.dev_command_for(package),
            ..merged.into_effective()
        }
    }
}

/// Loads the global file once and the project file per directory.
pub struct ConfigResolver<'a> {
    global: RawConfig,
    locator: &'a dyn VcsRootLocator,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(global: RawConfig, locator: &'a dyn VcsRootLocator) -> Self {
        Self { global, locator }
    }

    /// Build a resolver reading the global config from `global_path`, if any.
    pub fn load(global_path: Option<&Path>, locator: &'a dyn VcsRootLocator) -> Self {
        Self::new(load_global_config(global_path), locator)
    }

    pub const fn global(&self) -> &RawConfig {
        &self.global
    }

    /// Config layers applying to `dir`.
    pub fn layers_for(&self, dir: &Path) -> ConfigLayers {
        ConfigLayers::new(self.global.clone(), load_project_config(dir, self.locator))
    }

    /// Effective settings for `dir`, optionally scoped to a named package.
    pub fn resolve(&self, dir: &Path, package: Option<&str>) -> EffectiveConfig {
        self.layers_for(dir).effective_for(package)
    }
}
