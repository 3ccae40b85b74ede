//! # CV-02 Matrix Store
//!
//! Content-addressed lookup of coevolution matrices.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): digests, codec, formats, configuration
//! - **Ports Layer** (`ports/`)
//!   - `MatrixLoaderApi`: Driving port
//!   - `MatrixStore`: Driven port (read-only keyed store)
//! - **Service Layer** (`service`)
//!   - `CoevolutionMatrixLoader`: Implements `MatrixLoaderApi`
//! - **Adapters Layer** (`adapters/`)
//!   - `InMemoryMatrixStore`, `DirectoryMatrixStore`, `RocksDbMatrixStore`
//!
//! ## Invariants
//!
//! - The key is the MD5 of the exact sequence string; no case folding.
//! - A digest miss is `Ok(None)`, never an error.
//! - The load ceiling is checked before any store read.
//! - Nothing in this crate writes to a matrix store it did not create.
//!
//! ## Usage Example
//!
//! ```ignore
//! use cv_02_matrix_store::{CoevolutionMatrixLoader, DirectoryMatrixStore, MatrixFormat};
//!
//! let store = Arc::new(DirectoryMatrixStore::open("/data/matrices")?);
//! let loader = CoevolutionMatrixLoader::new(store);
//! loader.load_matrices(&mut page.records, MatrixFormat::Json, None).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{DirectoryMatrixStore, InMemoryMatrixStore};
#[cfg(feature = "rocksdb")]
pub use adapters::RocksDbMatrixStore;
pub use domain::{render, LoaderConfig, MatrixFormat, SequenceDigest, DEFAULT_MAX_LOAD};
pub use error::{MatrixError, MatrixStoreError};
pub use metrics::{Metrics, MetricsRecorder, NoOpMetrics};
pub use ports::{MatrixLoaderApi, MatrixStore};
pub use service::CoevolutionMatrixLoader;
