//! Sequence digests
//!
//! Matrices are addressed by the lowercase hex MD5 of the exact sequence
//! string. No case normalisation happens here: callers must pass the
//! sequence with the casing used at ingestion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercase hex MD5 of a sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SequenceDigest(String);

impl SequenceDigest {
    pub fn of(sequence: &str) -> Self {
        Self(format!("{:x}", md5::compute(sequence.as_bytes())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-character shard prefix used by directory layouts.
    pub fn shard(&self) -> &str {
        &self.0[..2]
    }
}

impl fmt::Display for SequenceDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<[u8]> for SequenceDigest {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
