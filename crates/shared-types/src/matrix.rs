//! # Coevolution Matrices
//!
//! The in-memory matrix and the output representations a caller can ask
//! for. The representations are plain data; choosing and producing one is
//! the matrix store's job.

use serde::{Deserialize, Serialize};

use crate::errors::MatrixShapeError;

/// A dense, row-major coevolution matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixParts")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f32>,
}

#[derive(Deserialize)]
struct MatrixParts {
    rows: usize,
    cols: usize,
    values: Vec<f32>,
}

impl TryFrom<MatrixParts> for Matrix {
    type Error = MatrixShapeError;

    fn try_from(parts: MatrixParts) -> Result<Self, Self::Error> {
        Matrix::new(parts.rows, parts.cols, parts.values)
    }
}

impl Matrix {
    /// Create a matrix, checking that `values` holds exactly `rows * cols` cells.
    pub fn new(rows: usize, cols: usize, values: Vec<f32>) -> Result<Self, MatrixShapeError> {
        let expected = rows.saturating_mul(cols);
        if values.len() != expected {
            return Err(MatrixShapeError {
                rows,
                cols,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { rows, cols, values })
    }

    /// Build a matrix from nested rows. Ragged input is rejected.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, MatrixShapeError> {
        let row_count = rows.len();
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let values: Vec<f32> = rows.into_iter().flatten().collect();
        Self::new(row_count, cols, values)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major cell buffer.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.values.get(row * self.cols + col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f32]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.values.get(start..start + self.cols)
    }

    /// Copy into a plain list of rows.
    pub fn to_nested(&self) -> Vec<Vec<f32>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.values.chunks(self.cols).map(<[f32]>::to_vec).collect()
    }
}

/// Labelled tabular view of a matrix. Labels are positional indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixTable {
    pub columns: Vec<usize>,
    pub index: Vec<usize>,
    pub data: Vec<Vec<f32>>,
}

/// A matrix in the representation the caller selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatrixOutput {
    /// Dense matrix with shape.
    Array(Matrix),
    /// Labelled table.
    Table(MatrixTable),
    /// Plain nested list, ready for JSON.
    Nested(Vec<Vec<f32>>),
}

impl MatrixOutput {
    /// Number of rows regardless of representation.
    pub fn row_count(&self) -> usize {
        match self {
            MatrixOutput::Array(m) => m.rows(),
            MatrixOutput::Table(t) => t.data.len(),
            MatrixOutput::Nested(rows) => rows.len(),
        }
    }
}
