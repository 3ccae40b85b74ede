//! # Coevo Runtime
//!
//! Runs a single API query against the configured stores and prints the
//! JSON response.
//!
//! ```text
//! coevo-runtime <method> [json-params]
//!
//! coevo-runtime find '{"min_length": 100, "enzyme": "3.*", "page_size": 5}'
//! coevo-runtime get_alignment '{"uniprot_id": "P12345"}'
//! coevo-runtime get_disease_list
//! ```
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging and metrics
//! 2. Load configuration from the environment
//! 3. Wire the container
//! 4. Dispatch the query

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::info;

use coevo_runtime::{handle_api_query, ApiQueryHandler, CoevoContainer, RuntimeConfig};
use coevo_telemetry::{init_telemetry, TelemetryConfig};

const USAGE: &str = "usage: coevo-runtime <method> [json-params]";

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env())?;

    let mut args = std::env::args().skip(1);
    let method = args.next().context(USAGE)?;
    let params: Value = match args.next() {
        Some(raw) => serde_json::from_str(&raw).context("params must be valid JSON")?,
        None => Value::Null,
    };

    let config = RuntimeConfig::from_env().context("invalid configuration")?;
    info!(method = %method, "Starting Coevo runtime");

    let container = Arc::new(CoevoContainer::new(&config)?);
    let handler = ApiQueryHandler::new(container);

    match handle_api_query(&handler, &method, &params).await {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(e) => {
            println!("{}", serde_json::to_string_pretty(&json!({ "error": e }))?);
            Err(e.into())
        }
    }
}
