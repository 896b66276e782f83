//! Error types for readiness checks.
//!
//! This module defines [`McpJiraError`], the error type used throughout
//! the checker, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failing check is never an error: checks report and return `false`
//! - `McpJiraError` is reserved for things that abort the whole run
//!   (interruption, a broken terminal, unexpected I/O)
//! - Use `anyhow::Error` (via `McpJiraError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for the checker.
#[derive(Debug, Error)]
pub enum McpJiraError {
    /// An external command could not be started at all.
    #[error("Command unavailable: {command} ({message})")]
    CommandUnavailable { command: String, message: String },

    /// The operator interrupted the run.
    #[error("Interrupted by user")]
    Interrupted,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl McpJiraError {
    /// Whether this error means the operator cancelled the run.
    pub fn is_interrupt(&self) -> bool {
        match self {
            Self::Interrupted => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::Interrupted,
            _ => false,
        }
    }
}

/// Result type alias for checker operations.
pub type Result<T> = std::result::Result<T, McpJiraError>;
