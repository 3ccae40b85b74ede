//! Stored matrix encoding
//!
//! Each store value is the `bincode` encoding of [`StoredMatrix`].

use serde::{Deserialize, Serialize};
use shared_types::Matrix;

use super::digest::SequenceDigest;
use crate::error::MatrixError;

/// On-disk layout of one matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredMatrix {
    pub rows: u32,
    pub cols: u32,
    pub values: Vec<f32>,
}

/// Decode a store value. Shape mismatches are reported as corruption.
///
/// A header with exactly one zero dimension is corrupt.
pub fn decode(digest: &SequenceDigest, bytes: &[u8]) -> Result<Matrix, MatrixError> {
    let stored: StoredMatrix = bincode::deserialize(bytes).map_err(|e| MatrixError::Corrupt {
        digest: digest.to_string(),
        reason: e.to_string(),
    })?;

    if (stored.rows == 0) != (stored.cols == 0) {
        return Err(MatrixError::Corrupt {
            digest: digest.to_string(),
            reason: format!("degenerate shape {}x{}", stored.rows, stored.cols),
        });
    }

    Matrix::new(stored.rows as usize, stored.cols as usize, stored.values).map_err(|e| {
        MatrixError::Corrupt {
            digest: digest.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Encode a matrix for ingestion and fixtures.
pub fn encode(matrix: &Matrix) -> Result<Vec<u8>, MatrixError> {
    let too_large = |what: &str| MatrixError::InvalidConfig(format!("{} does not fit in u32", what));
    let stored = StoredMatrix {
        rows: u32::try_from(matrix.rows()).map_err(|_| too_large("rows"))?,
        cols: u32::try_from(matrix.cols()).map_err(|_| too_large("cols"))?,
        values: matrix.values().to_vec(),
    };
    bincode::serialize(&stored).map_err(|e| MatrixError::InvalidConfig(e.to_string()))
}
