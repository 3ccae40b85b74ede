//! Inbound Ports (Driving Ports)

use async_trait::async_trait;
use shared_types::{Matrix, ProteinRecord};

use crate::domain::MatrixFormat;
use crate::error::MatrixError;

/// Content-addressed matrix loading (Driving Port)
#[async_trait]
pub trait MatrixLoaderApi: Send + Sync {
    /// Matrix for `sequence`, or `None` when the store has no entry for its
    /// digest.
    async fn load(&self, sequence: &str) -> Result<Option<Matrix>, MatrixError>;

    /// Attach a matrix to every record, leaving `None` on a miss. Returns
    /// the number of matrices attached.
    ///
    /// Fails with [`MatrixError::LoadLimitExceeded`] before touching the
    /// store when `records` exceeds the ceiling (`max_load`, or the
    /// configured default).
    async fn load_matrices(
        &self,
        records: &mut [ProteinRecord],
        format: MatrixFormat,
        max_load: Option<usize>,
    ) -> Result<usize, MatrixError>;
}
