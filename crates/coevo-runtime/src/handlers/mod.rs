//! # Request Handlers

pub mod api_query;

pub use api_query::{handle_api_query, ApiQueryError, ApiQueryHandler};
