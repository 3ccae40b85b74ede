//! Metrics hooks for catalog operations
//!
//! The catalog does not depend on a metrics backend. The runtime plugs one
//! in by implementing [`MetricsRecorder`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Trait for metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    /// A `find` completed with `rows` records.
    fn record_query(&self, duration: Duration, rows: usize);

    /// A response was served from the cache.
    fn record_cache_hit(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_query(&self, _duration: Duration, _rows: usize) {}

    fn record_cache_hit(&self) {}
}

/// In-process counters, mostly useful in tests.
#[derive(Default)]
pub struct Metrics {
    pub queries: AtomicU64,
    pub rows: AtomicU64,
    pub cache_hits: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queries: self.queries.load(Ordering::Relaxed),
            rows: self.rows.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
        }
    }
}

impl MetricsRecorder for Metrics {
    fn record_query(&self, _duration: Duration, rows: usize) {
        self.queries.fetch_add(1, Ordering::Relaxed);
        self.rows.fetch_add(rows as u64, Ordering::Relaxed);
    }

    fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub queries: u64,
    pub rows: u64,
    pub cache_hits: u64,
}
