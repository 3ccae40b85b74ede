//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Parameter registry
//! - Value coercers
//! - Hierarchical code parsing
//! - Constraint builder and compiler
//! - Result pagination
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod class_code;
pub mod coercion;
pub mod compiler;
pub mod config;
pub mod constraint;
pub mod pagination;
pub mod params;

pub use class_code::{CodeError, HierarchicalCode, CODE_FORMAT_ERROR};
pub use coercion::{coerce, parse_bool, RawValue, TypedValue};
pub use compiler::{compile, CompiledQuery, ALWAYS_TRUE, RECORD_COLUMNS};
pub use config::CatalogConfig;
pub use constraint::{Constraint, ConstraintSet, ConstraintSetBuilder};
pub use pagination::{paginate, total_pages, ResultPage, DEFAULT_PER_PAGE};
pub use params::{
    ClassTable, Coercion, Comparison, ParamDescriptor, ParamKind, Pattern, PredicateStrategy,
    ProteinParam,
};
