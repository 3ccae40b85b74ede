//! Error types for the Matrix Store subsystem

use thiserror::Error;

/// Errors that can occur while loading matrices
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error(
        "Attempting to load {attempted} matrices, max_load is {max_load}. \
         Consider paginating the results or increasing max_load"
    )]
    LoadLimitExceeded { attempted: usize, max_load: usize },

    #[error("Corrupt matrix {digest}: {reason}")]
    Corrupt { digest: String, reason: String },

    #[error("Invalid loader configuration: {0}")]
    InvalidConfig(String),

    #[error("Matrix store error: {0}")]
    Store(#[from] MatrixStoreError),
}

/// Errors from the keyed matrix store
#[derive(Debug, Clone, Error)]
pub enum MatrixStoreError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Store read timed out after {millis} ms")]
    Timeout { millis: u64 },

    #[error("Store is closed")]
    Closed,
}

impl From<std::io::Error> for MatrixStoreError {
    fn from(err: std::io::Error) -> Self {
        MatrixStoreError::Io(err.to_string())
    }
}
