//! # CV-01 Protein Catalog
//!
//! Constraint compilation and result assembly over the relational protein
//! catalog.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure business logic, no I/O
//!   - `ProteinParam`: Closed parameter registry with tagged descriptors
//!   - `coerce`: Value coercers
//!   - `HierarchicalCode`: CATH / Enzyme code parser
//!   - `ConstraintSetBuilder`, `ConstraintSet`: Validated constraints
//!   - `compile`, `CompiledQuery`: Parameterised predicate + bound values
//!   - `paginate`, `ResultPage`: 1-indexed windows
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `ProteinCatalogApi`: Driving port (inbound API)
//!   - `ProteinStore`: Driven port (relational store)
//!
//! - **Service Layer** (`service`): Orchestration
//!   - `ProteinCatalogService`: Implements `ProteinCatalogApi`
//!
//! - **Adapters Layer** (`adapters/`): External connections
//!   - `SqliteProteinStore`: Read-only SQLite executor
//!   - `CachedProteinStore`: Response cache
//!
//! ## Invariants
//!
//! - **Bound values only**: caller input never appears in SQL text.
//! - **Placeholder parity**: placeholder count equals bound-value count.
//! - **Closed registry**: unknown names reject the whole batch, all named.
//!
//! ## Usage Example
//!
//! ```ignore
//! use cv_01_protein_catalog::{ConstraintSetBuilder, ProteinCatalogService, SqliteProteinStore};
//!
//! let store = Arc::new(SqliteProteinStore::new("/data/coevo.db"));
//! let service = ProteinCatalogService::new(store);
//!
//! let constraints = ConstraintSetBuilder::new()
//!     .with("min_length", 5)
//!     .with("enzyme", "3.*")
//!     .build()?;
//! let page = service.find_page(&constraints, 1, Some(10)).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{CachedProteinStore, SqliteProteinStore};
pub use domain::{
    compile, paginate, total_pages, CatalogConfig, CompiledQuery, ConstraintSet,
    ConstraintSetBuilder, HierarchicalCode, ParamKind, ProteinParam, RawValue, ResultPage,
};
pub use error::{CatalogError, StoreError};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{ProteinCatalogApi, ProteinStore};
pub use service::ProteinCatalogService;
