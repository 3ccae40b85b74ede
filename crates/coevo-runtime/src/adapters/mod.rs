//! # Runtime Adapters
//!
//! Concrete pieces the container wires into the subsystems:
//!
//! - `PrometheusMetrics` - metric hooks for both subsystems
//! - `MatrixBackend` - matrix store chosen by configuration
//! - `AlignmentLocator` - alignment files on disk

pub mod alignments;
pub mod matrix_backend;
pub mod metrics;

pub use alignments::{AlignmentError, AlignmentLocator, ALIGNMENT_EXTENSION};
pub use matrix_backend::MatrixBackend;
pub use metrics::PrometheusMetrics;
