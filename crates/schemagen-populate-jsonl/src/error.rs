//! Error types for the JSONL sink.

use thiserror::Error;

/// Errors that can occur while writing JSONL files.
#[derive(Error, Debug)]
pub enum JsonlSinkError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two table names sanitize to the same file name.
    #[error("Tables '{table}' and '{other}' would both be written to {path:?}")]
    FileNameCollision {
        table: String,
        other: String,
        path: std::path::PathBuf,
    },

    /// A previous writer panicked while holding the file table.
    #[error("JSONL writer state is poisoned")]
    Poisoned,
}
