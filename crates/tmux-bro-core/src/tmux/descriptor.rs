//! Session descriptor types
//!
//! The declarative shape handed to the tmux driver. Field names follow the
//! tmuxp workspace format (`session_name`, `window_name`, `shell_command`), so
//! `--dry-run` output can be fed to tmuxp as-is.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{EffectiveConfig, Layout, PaneSizing};

pub const MAIN_PANE_WIDTH: &str = "main-pane-width";
pub const MAIN_PANE_HEIGHT: &str = "main-pane-height";

/// A full tmux session: one window per package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescriptor {
    pub session_name: String,
    pub windows: Vec<Window>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    #[serde(
        rename = "window_name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    pub layout: Layout,
    pub start_directory: PathBuf,
    pub options: BTreeMap<String, String>,
    pub panes: Vec<Pane>,
}

/// Commands typed into a pane when it opens. Empty means a bare shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pane {
    pub shell_command: Vec<String>,
}

impl Pane {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            shell_command: commands.into_iter().map(Into::into).collect(),
        }
    }

    pub fn commands(&self) -> &[String] {
        &self.shell_command
    }
}

/// Main-pane size options for the effective layout.
///
/// Vertical layouts size by width, horizontal ones by height, anything else
/// gets both.
pub fn window_options(config: &EffectiveConfig) -> BTreeMap<String, String> {
    let width = (MAIN_PANE_WIDTH.to_string(), config.main_pane_width.clone());
    let height = (MAIN_PANE_HEIGHT.to_string(), config.main_pane_height.clone());

    match config.layout.sizing() {
        PaneSizing::Width => BTreeMap::from([width]),
        PaneSizing::Height => BTreeMap::from([height]),
        PaneSizing::Both => BTreeMap::from([width, height]),
    }
}

impl Window {
    /// Layout name as tmux expects it.
    pub fn layout_name(&self) -> &str {
        self.layout.as_str()
    }
}
