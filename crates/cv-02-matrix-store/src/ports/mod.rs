//! Ports Layer
//!
//! - Driving Port (inbound) - matrix loading API
//! - Driven Port (outbound) - keyed, read-only matrix store

pub mod inbound;
pub mod outbound;

pub use inbound::MatrixLoaderApi;
pub use outbound::MatrixStore;
