//! # Coevo Test Suite
//!
//! Cross-crate tests that exercise the catalogue, the matrix loader and the
//! runtime handler together against seeded on-disk fixtures.
//!
//! ## Layout
//!
//! - `fixtures`: seeded SQLite catalogue, matrix directory and alignments
//! - `integration::catalog_flow`: constraint compilation against real rows
//! - `integration::matrix_flow`: catalogue results feeding the loader
//! - `integration::api_flow`: the full container behind `handle_api_query`

pub mod fixtures;
pub mod integration;
