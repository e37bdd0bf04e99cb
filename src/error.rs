//! Error types for diary

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the diary application
#[derive(Debug, Error)]
pub enum DiaryError {
    /// Malformed or missing input. The message is shown to the user verbatim.
    #[error("{0}")]
    InvalidArgument(String),

    /// Operation on an object that is already in a terminal state
    #[error("{0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl DiaryError {
    /// Shorthand for an `InvalidArgument` error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        DiaryError::InvalidArgument(msg.into())
    }

    /// True for errors caused by what the user typed; the menu reports these and carries on
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DiaryError::InvalidArgument(_) | DiaryError::InvalidState(_)
        )
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::InvalidArgument(_) => 2,
            DiaryError::InvalidState(_) => 3,
            DiaryError::Config(_) | DiaryError::ConfigNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::InvalidArgument(msg) if msg.contains("email") => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Use the form name@domain.tld\n\
                    • The top-level domain must be 2-4 letters",
                    msg
                )
            }
            DiaryError::InvalidArgument(msg) if msg.contains("date") => {
                format!(
                    "{}\n\n\
                    Expected format: yyyy-mm-dd\n\
                    Example: 2025-01-17",
                    msg
                )
            }
            DiaryError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the --config path\n\
                    • Unset DIARY_CONFIG to run with default settings",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;
