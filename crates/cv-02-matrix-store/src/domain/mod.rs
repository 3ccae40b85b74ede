//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Sequence digests
//! - Stored matrix codec
//! - Output formats
//! - Loader configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod codec;
pub mod config;
pub mod digest;
pub mod format;

pub use codec::{decode, encode, StoredMatrix};
pub use config::{LoaderConfig, DEFAULT_MAX_LOAD};
pub use digest::SequenceDigest;
pub use format::{render, MatrixFormat};
