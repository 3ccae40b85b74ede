//! Outbound Ports (Driven Ports)

use async_trait::async_trait;

use crate::domain::SequenceDigest;
use crate::error::MatrixStoreError;

/// Keyed matrix store (Driven Port)
///
/// Read-only from this system's perspective. A missing key is `Ok(None)`.
#[async_trait]
pub trait MatrixStore: Send + Sync {
    async fn get(&self, digest: &SequenceDigest) -> Result<Option<Vec<u8>>, MatrixStoreError>;
}
