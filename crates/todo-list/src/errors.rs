//! Error types for the todo-list crate.

use thiserror::Error;

/// Fatal errors raised by the store, storage, and shell.
///
/// Recoverable conditions (an out-of-range index, a missing save file, an
/// unknown menu choice) are not errors; they are reported as values.
#[derive(Error, Debug, Clone)]
pub enum TodoError {
    // Record errors
    #[error("Task record is missing required field '{field}'")]
    MissingField { field: String },

    #[error("Invalid task record: {reason}")]
    InvalidRecord { reason: String },

    #[error("Invalid status: '{status}'")]
    InvalidStatus { status: String },

    // Storage errors
    #[error("Failed to read file '{path}': {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    FileWriteError { path: String, reason: String },

    #[error("Failed to parse JSON: {reason}")]
    JsonParseError { reason: String },

    // Input errors
    #[error("Invalid task index: '{input}' is not a number")]
    InvalidIndexInput { input: String },

    #[error("Terminal I/O error: {reason}")]
    Io { reason: String },
}

impl From<std::io::Error> for TodoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for todo-list operations
pub type TodoResult<T> = Result<T, TodoError>;
