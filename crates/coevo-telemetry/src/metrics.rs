//! Prometheus metrics for the Coevo subsystems.
//!
//! All metrics follow the naming convention: `coevo_<subsystem>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};
use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // CATALOG METRICS (Subsystem 1)
    // =========================================================================

    /// Queries executed against the relational store
    pub static ref QUERIES_EXECUTED: Counter = Counter::new(
        "coevo_catalog_queries_total",
        "Total number of catalog queries executed"
    ).expect("metric creation failed");

    /// Rows returned by catalog queries
    pub static ref ROWS_RETURNED: Counter = Counter::new(
        "coevo_catalog_rows_returned_total",
        "Total number of protein records returned"
    ).expect("metric creation failed");

    /// Queries answered from the response cache
    pub static ref QUERY_CACHE_HITS: Counter = Counter::new(
        "coevo_catalog_cache_hits_total",
        "Total number of catalog queries served from cache"
    ).expect("metric creation failed");

    /// Query duration histogram
    pub static ref QUERY_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "coevo_catalog_query_duration_seconds",
            "Time spent executing catalog queries"
        ).buckets(exponential_buckets(0.0005, 2.0, 15).expect("bucket layout"))
    ).expect("metric creation failed");

    // =========================================================================
    // MATRIX METRICS (Subsystem 2)
    // =========================================================================

    /// Matrices found and decoded
    pub static ref MATRICES_LOADED: Counter = Counter::new(
        "coevo_matrix_loaded_total",
        "Total number of coevolution matrices loaded"
    ).expect("metric creation failed");

    /// Sequences with no stored matrix
    pub static ref MATRIX_DIGEST_MISSES: Counter = Counter::new(
        "coevo_matrix_digest_misses_total",
        "Total number of sequence digests with no stored matrix"
    ).expect("metric creation failed");

    // =========================================================================
    // API METRICS
    // =========================================================================

    /// API errors by method and code
    pub static ref API_ERRORS: CounterVec = CounterVec::new(
        Opts::new("coevo_api_errors_total", "API errors by method and code"),
        &["method", "code"]
    ).expect("metric creation failed");
}

lazy_static! {
    /// Outcome of the single registration pass.
    static ref REGISTRATION: Result<(), String> = register_into(&REGISTRY);
}

/// Register all metrics with the global registry. Safe to call repeatedly.
pub fn register_metrics() -> Result<(), TelemetryError> {
    REGISTRATION.clone().map_err(TelemetryError::MetricsInit)
}

fn register_into(registry: &Registry) -> Result<(), String> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Catalog
        Box::new(QUERIES_EXECUTED.clone()),
        Box::new(ROWS_RETURNED.clone()),
        Box::new(QUERY_CACHE_HITS.clone()),
        Box::new(QUERY_DURATION.clone()),
        // Matrices
        Box::new(MATRICES_LOADED.clone()),
        Box::new(MATRIX_DIGEST_MISSES.clone()),
        // API
        Box::new(API_ERRORS.clone()),
    ];

    for metric in metrics {
        registry.register(metric).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
