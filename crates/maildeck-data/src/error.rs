//! Error types for record parsing.

/// Result type alias for record operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Record parsing error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A record collection failed to deserialize.
    #[error("Malformed record collection: {0}")]
    Json(#[from] serde_json::Error),
}
