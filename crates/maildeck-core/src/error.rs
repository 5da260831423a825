//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A mock record collection failed to parse.
    #[error("Record error: {0}")]
    Records(#[from] maildeck_data::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
