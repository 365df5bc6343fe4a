//! # tmux-bro Core
//!
//! Project detection and tmux session synthesis for tmux-bro.
//!
//! Given a project directory, [`build_session_config`] decides whether it is a
//! pnpm, npm or cargo workspace, classifies each package's package manager,
//! probes for a `dev` script, layers the global and project configuration, and
//! returns a [`SessionDescriptor`]: one window per package, each with an
//! editor pane, an optional dev pane and a shell pane.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` / `expect()` / `panic!()` outside tests
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! Missing or malformed project files never fail synthesis; they resolve to
//! defaults. Fallible operations at the edges (strict config loading, tmux)
//! return `Result<T, Error>`.

pub mod config;
mod error;
pub mod tmux;
pub mod vcs;
pub mod workspace;

pub use error::{Error, Result, SystemError, ValidationError};
pub use tmux::{
    build_session_config, build_session_config_with, session_name_for, Pane, SessionDescriptor,
    SessionHandle, SynthesisContext, TmuxCommand, TmuxDriver, TmuxRunner, Window,
};
pub use workspace::{detect_package_manager, detect_workspace, has_dev_script, PackageManagerKind};
