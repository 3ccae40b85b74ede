//! Integration flows across crate boundaries.

pub mod api_flow;
pub mod catalog_flow;
pub mod matrix_flow;
