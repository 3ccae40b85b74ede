//! # Shared Types Crate
//!
//! This crate contains the catalogue entities that cross subsystem
//! boundaries.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `ProteinRecord` is defined once and produced
//!   by the catalogue, then enriched by the matrix store.
//! - **Lazy Payloads**: `ProteinRecord::matrix` starts out `None` and is only
//!   populated by an explicit matrix load.
//! - **Bound Values Only**: every caller-controlled value reaching the
//!   relational store travels as a [`SqlValue`], never as SQL text.

pub mod entities;
pub mod errors;
pub mod matrix;
pub mod values;

pub use entities::*;
pub use errors::*;
pub use matrix::*;
pub use values::*;
