//! Error types for the reader node.

use thiserror::Error;

/// Result type for reader operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in reader operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
