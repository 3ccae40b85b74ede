//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// A matrix whose declared shape does not match its value buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Matrix shape mismatch: {rows}x{cols} needs {expected} values, got {actual}")]
pub struct MatrixShapeError {
    pub rows: usize,
    pub cols: usize,
    pub expected: usize,
    pub actual: usize,
}
