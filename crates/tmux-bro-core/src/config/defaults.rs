//! Default configuration values

use super::types::{EffectiveConfig, Layout};

pub const DEFAULT_MAIN_PANE_WIDTH: &str = "50%";
pub const DEFAULT_MAIN_PANE_HEIGHT: &str = "50%";

#[allow(clippy::derivable_impls)]
impl Default for Layout {
    fn default() -> Self {
        Self::MainVertical
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            main_pane_width: DEFAULT_MAIN_PANE_WIDTH.to_string(),
            main_pane_height: DEFAULT_MAIN_PANE_HEIGHT.to_string(),
            dev_command: None,
        }
    }
}
