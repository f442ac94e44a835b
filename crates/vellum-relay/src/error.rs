//! Error types for vellum-relay.

use thiserror::Error;

/// Result type for vellum-relay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in relay operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Relay connection error
    #[error("relay connection error: {0}")]
    Connection(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tokio_tungstenite::tungstenite::Error> for Error {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Self {
        Error::Connection(e.to_string())
    }
}
