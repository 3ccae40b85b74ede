//! Directory-backed matrix store
//!
//! Layout: `<root>/<first two hex chars>/<digest>.bin`.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::SequenceDigest;
use crate::error::MatrixStoreError;
use crate::ports::MatrixStore;

/// File extension of stored matrices
pub const MATRIX_EXTENSION: &str = "bin";

/// Read-only store over a sharded directory tree
#[derive(Clone, Debug)]
pub struct DirectoryMatrixStore {
    root: PathBuf,
}

impl DirectoryMatrixStore {
    /// Open a store rooted at `root`, which must be an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, MatrixStoreError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(MatrixStoreError::Io(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file that holds `digest`.
    pub fn path_for(&self, digest: &SequenceDigest) -> PathBuf {
        self.root
            .join(digest.shard())
            .join(format!("{}.{}", digest, MATRIX_EXTENSION))
    }
}

#[async_trait]
impl MatrixStore for DirectoryMatrixStore {
    async fn get(&self, digest: &SequenceDigest) -> Result<Option<Vec<u8>>, MatrixStoreError> {
        let path = self.path_for(digest);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(digest = %digest, "No matrix file");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_sharded_file() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryMatrixStore::open(dir.path()).unwrap();
        let digest = SequenceDigest::of("MKV");
        let path = store.path_for(&digest);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"payload").unwrap();

        assert_eq!(store.get(&digest).await.unwrap(), Some(b"payload".to_vec()));
        assert!(path.starts_with(dir.path().join(digest.shard())));
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryMatrixStore::open(dir.path()).unwrap();
        assert_eq!(store.get(&SequenceDigest::of("MKV")).await.unwrap(), None);
    }

    #[test]
    fn test_open_requires_directory() {
        let dir = TempDir::new().unwrap();
        assert!(DirectoryMatrixStore::open(dir.path().join("absent")).is_err());
    }
}
