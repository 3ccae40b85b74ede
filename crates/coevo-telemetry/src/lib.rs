//! # Coevo Telemetry
//!
//! Structured logging and Prometheus metrics for the Coevo services.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use coevo_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // Logs and metrics are now being collected
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `COEVO_SERVICE_NAME` | `coevo` | Service name in startup logs |
//! | `COEVO_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `COEVO_JSON_LOGS` | `false` | JSON output (default on in containers) |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};
pub use metrics::{
    gather_metrics, register_metrics, API_ERRORS, MATRICES_LOADED, MATRIX_DIGEST_MISSES,
    QUERIES_EXECUTED, QUERY_CACHE_HITS, QUERY_DURATION, ROWS_RETURNED,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Register metrics and install the global log subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)
}
