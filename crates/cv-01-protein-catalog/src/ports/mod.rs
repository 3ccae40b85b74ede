//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for external callers
//! - Driven Ports (outbound) - The relational store

pub mod inbound;
pub mod outbound;

pub use inbound::ProteinCatalogApi;
pub use outbound::ProteinStore;
