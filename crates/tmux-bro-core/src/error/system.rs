//! System error types for IO and external commands (tmux, git, fzf).

use std::fmt;

/// System errors represent failures in IO or external tools.
#[derive(Debug, Clone)]
pub enum SystemError {
    /// IO operation failed
    IoError(String),
    /// External command ran but failed
    Command(String),
    /// External tool is not installed or not in PATH
    ToolNotFound { tool: String, hint: String },
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(msg) => write!(f, "IO error: {msg}"),
            Self::Command(msg) => write!(f, "Command error: {msg}"),
            Self::ToolNotFound { tool, hint } => {
                write!(f, "{tool} is not installed or not in PATH")?;
                if hint.is_empty() {
                    Ok(())
                } else {
                    write!(f, "\n\n{hint}")
                }
            }
        }
    }
}

impl SystemError {
    /// Get exit code for system errors.
    /// - Missing tool: 3
    /// - Other system errors: 2
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ToolNotFound { .. } => 3,
            _ => 2,
        }
    }
}
