//! tmux session synthesis and creation
//!
//! This module follows the Functional Core / Imperative Shell pattern:
//! - `descriptor`: Session, window and pane types (pure data)
//! - `panes`, `build`: Descriptor synthesis from the filesystem (no tmux)
//! - `context`: Explicit inputs to synthesis (editor, config path, VCS)
//! - `driver`: tmux process execution (Imperative Shell)

mod build;
mod context;
mod descriptor;
mod driver;
mod panes;

pub use build::{build_session_config, build_session_config_with, session_name_for};
pub use context::{SynthesisContext, DEFAULT_EDITOR};
pub use descriptor::{
    window_options, Pane, SessionDescriptor, Window, MAIN_PANE_HEIGHT, MAIN_PANE_WIDTH,
};
pub use driver::{tmux_session_name, SessionHandle, TmuxCommand, TmuxDriver, TmuxRunner};
pub use panes::{build_panes, venv_activate_path};
