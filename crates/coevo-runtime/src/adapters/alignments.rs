//! Alignment file locator
//!
//! Alignments live as `<root>/<uniprot_id>.aln`. The id must be a plain file
//! stem so a request can never name a file outside `root`.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Alignment file extension.
pub const ALIGNMENT_EXTENSION: &str = "aln";

#[derive(Debug, Error)]
pub enum AlignmentError {
    #[error("Invalid uniprot_id '{id}'")]
    InvalidId { id: String },

    #[error("No alignments found for {id}")]
    NotFound { id: String },

    #[error("Failed to read alignment: {0}")]
    Io(String),
}

/// Resolves and reads alignment files under one root directory.
#[derive(Debug, Clone)]
pub struct AlignmentLocator {
    root: PathBuf,
}

impl AlignmentLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the alignment for `id`, without checking that it exists.
    pub fn path_for(&self, id: &str) -> Result<PathBuf, AlignmentError> {
        if !is_plain_stem(id) {
            return Err(AlignmentError::InvalidId { id: id.to_string() });
        }
        Ok(self.root.join(format!("{}.{}", id, ALIGNMENT_EXTENSION)))
    }

    /// Read the alignment text for `id`.
    pub async fn read(&self, id: &str) -> Result<String, AlignmentError> {
        let path = self.path_for(id)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AlignmentError::NotFound { id: id.to_string() })
            }
            Err(e) => Err(AlignmentError::Io(e.to_string())),
        }
    }
}

fn is_plain_stem(id: &str) -> bool {
    if id.is_empty() || id.contains(['/', '\\', '\0']) || id.contains("..") {
        return false;
    }
    let mut components = Path::new(id).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
