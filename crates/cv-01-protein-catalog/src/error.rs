//! Error types for the Protein Catalog subsystem

use thiserror::Error;

/// Errors that can occur in the Protein Catalog subsystem
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One or more constraint names are not registered. Every offending
    /// name is listed, in the order the caller supplied them.
    #[error("Unknown parameter(s): {}", names.join(", "))]
    UnknownParameter { names: Vec<String> },

    #[error("Invalid value for {parameter}: {reason} (expected {expected})")]
    Validation {
        parameter: String,
        reason: String,
        expected: String,
    },

    #[error("Page must be >= 1, got {page}")]
    PageOutOfRange { page: i64 },

    #[error("Page size must be a positive integer, got {per_page}")]
    InvalidPageSize { per_page: usize },

    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl CatalogError {
    /// Whether the caller can fix this error by changing its input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CatalogError::Storage(_) | CatalogError::InvalidConfig(_))
    }
}

/// Errors from the relational store
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Query timed out after {millis} ms")]
    Timeout { millis: u64 },

    #[error("Corrupt row: {0}")]
    Corrupt(String),
}
