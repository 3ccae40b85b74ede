//! # RocksDB Matrix Store
//!
//! Opens an existing RocksDB database read-only. Keys are the digest's hex
//! string; values are encoded [`StoredMatrix`](crate::domain::StoredMatrix)
//! bytes.

use async_trait::async_trait;
use rocksdb::{Options, DB};
use std::path::Path;
use std::sync::Arc;

use crate::domain::SequenceDigest;
use crate::error::MatrixStoreError;
use crate::ports::MatrixStore;

/// Read-only RocksDB-backed matrix store
pub struct RocksDbMatrixStore {
    db: Arc<DB>,
}

impl RocksDbMatrixStore {
    /// Open an existing database without write access
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Self, MatrixStoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(false);
        opts.set_compression_type(rocksdb::DBCompressionType::Snappy);

        let db = DB::open_for_read_only(&opts, path.as_ref(), false).map_err(|e| {
            MatrixStoreError::Io(format!("Failed to open RocksDB: {}", e))
        })?;

        Ok(Self { db: Arc::new(db) })
    }
}

#[async_trait]
impl MatrixStore for RocksDbMatrixStore {
    async fn get(&self, digest: &SequenceDigest) -> Result<Option<Vec<u8>>, MatrixStoreError> {
        let db = Arc::clone(&self.db);
        let key = digest.as_str().to_owned();
        tokio::task::spawn_blocking(move || {
            db.get(key.as_bytes())
                .map_err(|e| MatrixStoreError::Io(format!("RocksDB get failed: {}", e)))
        })
        .await
        .map_err(|_| MatrixStoreError::Closed)?
    }
}
