//! Matrix output formats
//!
//! [`MatrixFormat`] is a plain selector; [`render`] is the transform it
//! maps to.

use serde::{Deserialize, Serialize};
use shared_types::{Matrix, MatrixOutput, MatrixTable};
use std::fmt;
use std::str::FromStr;

/// Representation a caller wants matrices in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixFormat {
    /// Dense matrix with its shape.
    #[default]
    RawArray,
    /// Labelled table with positional row and column labels.
    Tabular,
    /// Nested list of rows.
    FlatList,
    /// Same as `FlatList`; kept as a distinct selector for serialising callers.
    Json,
}

impl MatrixFormat {
    pub const ALL: [MatrixFormat; 4] = [
        MatrixFormat::RawArray,
        MatrixFormat::Tabular,
        MatrixFormat::FlatList,
        MatrixFormat::Json,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MatrixFormat::RawArray => "raw_array",
            MatrixFormat::Tabular => "tabular",
            MatrixFormat::FlatList => "flat_list",
            MatrixFormat::Json => "json",
        }
    }
}

impl fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatrixFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw_array" | "array" | "numpy" => Ok(MatrixFormat::RawArray),
            "tabular" | "table" | "pandas" => Ok(MatrixFormat::Tabular),
            "flat_list" | "list" => Ok(MatrixFormat::FlatList),
            "json" => Ok(MatrixFormat::Json),
            other => Err(format!("unknown matrix format '{}'", other)),
        }
    }
}

/// Convert a matrix into the selected representation.
pub fn render(matrix: Matrix, format: MatrixFormat) -> MatrixOutput {
    match format {
        MatrixFormat::RawArray => MatrixOutput::Array(matrix),
        MatrixFormat::Tabular => MatrixOutput::Table(MatrixTable {
            columns: (0..matrix.cols()).collect(),
            index: (0..matrix.rows()).collect(),
            data: matrix.to_nested(),
        }),
        MatrixFormat::FlatList | MatrixFormat::Json => MatrixOutput::Nested(matrix.to_nested()),
    }
}
