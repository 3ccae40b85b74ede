//! Matrix loader configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::format::MatrixFormat;
use crate::error::MatrixError;

/// Default ceiling on matrices loaded in one call
pub const DEFAULT_MAX_LOAD: usize = 1000;

/// Matrix loader configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Most matrices a single `load_matrices` call may read
    pub max_load: usize,
    /// Upper bound on a single store read
    pub read_timeout: Duration,
    /// Representation used when the caller does not pick one
    pub default_format: MatrixFormat,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_load: DEFAULT_MAX_LOAD,
            read_timeout: Duration::from_secs(30),
            default_format: MatrixFormat::RawArray,
        }
    }
}

impl LoaderConfig {
    pub fn validate(&self) -> Result<(), MatrixError> {
        if self.max_load == 0 {
            return Err(MatrixError::InvalidConfig("max_load cannot be 0".to_string()));
        }
        if self.read_timeout.is_zero() {
            return Err(MatrixError::InvalidConfig(
                "read_timeout cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder-style method to set the load ceiling
    pub fn with_max_load(mut self, max_load: usize) -> Self {
        self.max_load = max_load;
        self
    }

    /// Builder-style method to set the read timeout
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Builder-style method to set the default format
    pub fn with_default_format(mut self, format: MatrixFormat) -> Self {
        self.default_format = format;
        self
    }
}
