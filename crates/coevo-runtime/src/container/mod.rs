//! # Subsystem Container
//!
//! Configuration loading and dependency injection for the runtime.

pub mod config;
pub mod subsystems;

pub use config::{ConfigError, MatrixBackendKind, RuntimeConfig, StorageConfig};
pub use subsystems::{CoevoContainer, ConcreteCatalogService, ConcreteMatrixLoader};
