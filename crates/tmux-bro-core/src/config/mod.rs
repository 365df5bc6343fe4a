//! Configuration loading and layering
//!
//! # Hierarchy
//!
//! Settings are resolved in this order (later overrides earlier):
//! 1. Built-in defaults (`main-vertical`, `50%` / `50%`)
//! 2. Global config: ~/.config/tmux-bro.yaml
//! 3. Project config: .tmux-bro.yaml (VCS root first, then the directory)
//! 4. Package override: `packages.<name>.dev_command` in the project config
//!
//! # Example Config
//!
//! ```yaml
//! layout: main-horizontal
//! main_pane_height: 70%
//! dev_command: make watch
//!
//! packages:
//!   web:
//!     dev_command: pnpm --filter web dev
//! ```
//!
//! # Module Structure
//!
//! - `types`: Configuration structure definitions
//! - `defaults`: Default value implementations
//! - `load`: Locating and reading config files
//! - `merge`: Layering and resolution

mod defaults;
mod load;
mod merge;
mod types;

#[cfg(test)]
mod tests_loading;
#[cfg(test)]
mod tests_resolve;

pub use defaults::{DEFAULT_MAIN_PANE_HEIGHT, DEFAULT_MAIN_PANE_WIDTH};
pub use load::{
    find_project_config, global_config_path, load_config_file, load_global_config,
    load_project_config, load_yaml_file, project_config_candidates, LoadOutcome,
    GLOBAL_CONFIG_FILE, PROJECT_CONFIG_FILE,
};
pub use merge::{ConfigLayers, ConfigResolver};
pub use types::{EffectiveConfig, Layout, PackageConfig, PaneSizing, RawConfig};
