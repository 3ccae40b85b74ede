//! Adapters Layer (Driven Adapters)
//!
//! ## Adapters
//!
//! - `InMemoryMatrixStore` - HashMap store for tests and fixtures
//! - `DirectoryMatrixStore` - Sharded directory of matrix files
//! - `RocksDbMatrixStore` - Read-only RocksDB (`rocksdb` feature)

pub mod directory;
pub mod memory;

#[cfg(feature = "rocksdb")]
pub mod rocksdb_adapter;

pub use directory::{DirectoryMatrixStore, MATRIX_EXTENSION};
pub use memory::InMemoryMatrixStore;

#[cfg(feature = "rocksdb")]
pub use rocksdb_adapter::RocksDbMatrixStore;
