//! Catalog configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use cv_01_protein_catalog::domain::CatalogConfig;
//!
//! let config = CatalogConfig::default()
//!     .with_query_timeout(Duration::from_secs(5))
//!     .with_cache_capacity(64);
//! config.validate()?;
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::pagination::DEFAULT_PER_PAGE;
use crate::error::CatalogError;

/// Protein catalog configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Window size when the caller does not give one
    pub default_per_page: usize,
    /// Largest window a caller may request
    pub max_per_page: usize,
    /// Upper bound on a single store call
    pub query_timeout: Duration,
    /// Number of cached responses
    pub cache_capacity: usize,
    /// Lifetime of a cached response
    pub cache_ttl: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: DEFAULT_PER_PAGE,
            query_timeout: Duration::from_secs(30),
            cache_capacity: 256,
            cache_ttl: Duration::from_secs(360),
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.default_per_page == 0 || self.max_per_page == 0 {
            return Err(CatalogError::InvalidConfig(
                "page sizes cannot be 0".to_string(),
            ));
        }

        if self.default_per_page > self.max_per_page {
            return Err(CatalogError::InvalidConfig(format!(
                "default_per_page {} exceeds max_per_page {}",
                self.default_per_page, self.max_per_page
            )));
        }

        if self.query_timeout.is_zero() {
            return Err(CatalogError::InvalidConfig(
                "query_timeout cannot be 0".to_string(),
            ));
        }

        if self.cache_capacity == 0 {
            return Err(CatalogError::InvalidConfig(
                "cache_capacity cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Builder-style method to set the query timeout
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    /// Builder-style method to set the cache capacity
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Builder-style method to set the cache TTL
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Builder-style method to set the page size bounds
    pub fn with_page_sizes(mut self, default_per_page: usize, max_per_page: usize) -> Self {
        self.default_per_page = default_per_page;
        self.max_per_page = max_per_page;
        self
    }
}
