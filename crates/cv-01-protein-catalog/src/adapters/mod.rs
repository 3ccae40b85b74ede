//! Adapters Layer (Driven Adapters)
//!
//! ## Adapters
//!
//! - `SqliteProteinStore` - Read-only SQLite query executor
//! - `CachedProteinStore` - TTL-bounded LRU decorator over any store

pub mod cache;
pub mod sqlite;

pub use cache::CachedProteinStore;
pub use sqlite::{SqliteProteinStore, DEFAULT_QUERY_TIMEOUT, FIXTURE_SCHEMA};
