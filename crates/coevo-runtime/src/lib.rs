//! # Coevo Runtime Library
//!
//! Exposes the runtime's modules for the binary and for tests.
//!
//! - `container/` - configuration and subsystem wiring
//! - `adapters/` - metrics, matrix backend selection, alignment files
//! - `handlers/` - API query dispatch

pub mod adapters;
pub mod container;
pub mod handlers;

pub use container::{CoevoContainer, ConfigError, RuntimeConfig};
pub use handlers::{handle_api_query, ApiQueryError, ApiQueryHandler};
