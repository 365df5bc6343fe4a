//! Validation error types for configuration and project files.
//!
//! These errors describe files the user can fix: bad YAML in a config file,
//! a `package.json` that is not JSON, and so on.

use std::fmt;

/// Validation errors represent incorrect user input or configuration.
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Invalid configuration provided
    InvalidConfig(String),
    /// Parse error when reading configuration or a manifest
    ParseError(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl ValidationError {
    /// Get exit code for validation errors (always 1).
    pub const fn exit_code(&self) -> i32 {
        1
    }
}
