//! Error types for tmux-bro with categorization:
//!
//! - **Validation errors**: malformed configuration or manifests (exit code 1)
//! - **System errors**: IO and external tools such as tmux, git, fzf (exit code 2 or 3)
//!
//! Synthesis itself never surfaces these for absent or malformed project
//! files; they only cross the crate boundary from the loaders' strict APIs and
//! from the external-process shims.

pub mod system;
pub mod validation;

use std::fmt;

pub use system::SystemError;
pub use validation::ValidationError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type that can represent any error in the system.
#[derive(Debug, Clone)]
pub enum Error {
    /// Validation error from a config file or manifest
    Validation(ValidationError),
    /// System error from IO or external operations
    System(SystemError),
    /// Unknown error (fallback)
    Unknown(String),
}

impl Error {
    /// Create a validation error from an invalid config.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::InvalidConfig(msg.into()))
    }

    /// Create a validation error from a parse error.
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::ParseError(msg.into()))
    }

    /// Create a system error from an IO error.
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::System(SystemError::IoError(msg.into()))
    }

    /// Create a system error from a command failure.
    pub fn command_error(msg: impl Into<String>) -> Self {
        Self::System(SystemError::Command(msg.into()))
    }

    /// Create a system error for a missing external tool.
    pub fn tool_not_found(tool: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::System(SystemError::ToolNotFound {
            tool: tool.into(),
            hint: hint.into(),
        })
    }

    /// Create an unknown error.
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }

    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit code scheme:
    /// - 1: User error (bad configuration, unparseable files)
    /// - 2: System error (IO, external commands)
    /// - 3: Required tool not installed
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(err) => err.exit_code(),
            Self::System(err) => err.exit_code(),
            Self::Unknown(_) => 2,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::System(err) => write!(f, "{err}"),
            Self::Unknown(msg) => write!(f, "Unknown error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::parse_error(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse_error(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::parse_error(err.to_string())
    }
}
