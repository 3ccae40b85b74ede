//! Prometheus-backed metrics recorders for both subsystems.

use std::time::Duration;

use coevo_telemetry::{
    MATRICES_LOADED, MATRIX_DIGEST_MISSES, QUERIES_EXECUTED, QUERY_CACHE_HITS, QUERY_DURATION,
    ROWS_RETURNED,
};

/// Forwards subsystem metric hooks to the global Prometheus registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrometheusMetrics;

impl cv_01_protein_catalog::MetricsRecorder for PrometheusMetrics {
    fn record_query(&self, duration: Duration, rows: usize) {
        QUERIES_EXECUTED.inc();
        ROWS_RETURNED.inc_by(rows as f64);
        QUERY_DURATION.observe(duration.as_secs_f64());
    }

    fn record_cache_hit(&self) {
        QUERY_CACHE_HITS.inc();
    }
}

impl cv_02_matrix_store::MetricsRecorder for PrometheusMetrics {
    fn record_matrix_loaded(&self) {
        MATRICES_LOADED.inc();
    }

    fn record_digest_miss(&self) {
        MATRIX_DIGEST_MISSES.inc();
    }
}
