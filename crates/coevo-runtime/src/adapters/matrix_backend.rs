//! Matrix store selected at startup.

use async_trait::async_trait;
use cv_02_matrix_store::{
    DirectoryMatrixStore, InMemoryMatrixStore, MatrixStore, MatrixStoreError, SequenceDigest,
};
use std::path::Path;

#[cfg(feature = "rocksdb")]
use cv_02_matrix_store::RocksDbMatrixStore;

use crate::container::config::{ConfigError, MatrixBackendKind};

/// One of the available [`MatrixStore`] adapters.
pub enum MatrixBackend {
    Memory(InMemoryMatrixStore),
    Directory(DirectoryMatrixStore),
    #[cfg(feature = "rocksdb")]
    RocksDb(RocksDbMatrixStore),
}

impl MatrixBackend {
    /// Open the store at `path` with the configured adapter.
    pub fn open(kind: MatrixBackendKind, path: &Path) -> Result<Self, ConfigError> {
        match kind {
            MatrixBackendKind::Directory => Ok(Self::Directory(DirectoryMatrixStore::open(path)?)),
            #[cfg(feature = "rocksdb")]
            MatrixBackendKind::RocksDb => {
                Ok(Self::RocksDb(RocksDbMatrixStore::open_read_only(path)?))
            }
            #[cfg(not(feature = "rocksdb"))]
            MatrixBackendKind::RocksDb => Err(ConfigError::UnsupportedBackend("rocksdb".into())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Directory(_) => "directory",
            #[cfg(feature = "rocksdb")]
            Self::RocksDb(_) => "rocksdb",
        }
    }
}

#[async_trait]
impl MatrixStore for MatrixBackend {
    async fn get(&self, digest: &SequenceDigest) -> Result<Option<Vec<u8>>, MatrixStoreError> {
        match self {
            Self::Memory(store) => store.get(digest).await,
            Self::Directory(store) => store.get(digest).await,
            #[cfg(feature = "rocksdb")]
            Self::RocksDb(store) => store.get(digest).await,
        }
    }
}
