//! Core error types for wellnest-core.
//!
//! Store operations are infallible; errors only arise from configuration,
//! snapshot I/O, input validation and journal summarization.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for wellnest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Journal summary errors
    #[error("Summary error: {0}")]
    Summary(#[from] SummaryError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty
    #[error("'{field}' must not be empty")]
    EmptyField { field: String },

    /// Value outside of its allowed range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i64,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors surfaced by a journal summary job.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    /// Entry has no text to summarize
    #[error("Journal entry {0} has no content to summarize")]
    EmptyEntry(u64),

    /// Job was cancelled before the summarizer finished
    #[error("Summary request was cancelled")]
    Cancelled,

    /// Summarizer did not answer in time
    #[error("Summary request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Summarizer backend failure
    #[error("Summarizer '{backend}' failed: {message}")]
    Backend { backend: String, message: String },

    /// The worker task panicked or was aborted
    #[error("Summary worker stopped unexpectedly: {0}")]
    Worker(String),
}

impl From<tokio::task::JoinError> for SummaryError {
    fn from(err: tokio::task::JoinError) -> Self {
        SummaryError::Worker(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
