//! In-memory matrix store for tests and fixtures

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::Matrix;
use std::collections::HashMap;

use crate::domain::{encode, SequenceDigest};
use crate::error::{MatrixError, MatrixStoreError};
use crate::ports::MatrixStore;

/// HashMap-backed matrix store
#[derive(Default)]
pub struct InMemoryMatrixStore {
    entries: RwLock<HashMap<SequenceDigest, Vec<u8>>>,
}

impl InMemoryMatrixStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw bytes under a digest.
    pub fn insert_raw(&self, digest: SequenceDigest, bytes: Vec<u8>) {
        self.entries.write().insert(digest, bytes);
    }

    /// Encode and store a matrix under the digest of `sequence`.
    pub fn insert(&self, sequence: &str, matrix: &Matrix) -> Result<SequenceDigest, MatrixError> {
        let digest = SequenceDigest::of(sequence);
        self.insert_raw(digest.clone(), encode(matrix)?);
        Ok(digest)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MatrixStore for InMemoryMatrixStore {
    async fn get(&self, digest: &SequenceDigest) -> Result<Option<Vec<u8>>, MatrixStoreError> {
        Ok(self.entries.read().get(digest).cloned())
    }
}
