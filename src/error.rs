//! Error handling module for bulkinvite
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Batch execution failures are NOT errors here: they are reported as
//! `BatchOutcome::Failed` values so one batch never aborts the run.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for bulkinvite
#[derive(Error, Debug)]
pub enum BulkInviteError {
    /// The address file is missing or unreadable. Fatal for the whole run.
    #[error("Failed to read address file {path:?}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors (config values, CLI overrides)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The external command could not be started or waited on
    #[error("Failed to launch command: {0}")]
    Launch(String),

    /// The external command ran but exited non-zero or was killed
    #[error("{0}")]
    Exit(String),

    /// IO errors (console output, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bulkinvite operations
pub type Result<T> = std::result::Result<T, BulkInviteError>;

// Convenient error constructors
impl BulkInviteError {
    /// Create an input error for the given path
    pub fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Input {
            path: path.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a launch error
    pub fn launch(msg: impl Into<String>) -> Self {
        Self::Launch(msg.into())
    }

    /// Create an exit-status error
    pub fn exit(msg: impl Into<String>) -> Self {
        Self::Exit(msg.into())
    }

    /// True for errors that mean there is nothing to process.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Input { .. })
    }
}
