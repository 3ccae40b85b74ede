//! Metrics hooks for matrix loading

use std::sync::atomic::{AtomicU64, Ordering};

/// Trait for metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    /// A matrix was found and decoded.
    fn record_matrix_loaded(&self);

    /// A digest had no entry in the store.
    fn record_digest_miss(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_matrix_loaded(&self) {}

    fn record_digest_miss(&self) {}
}

/// In-process counters
#[derive(Default)]
pub struct Metrics {
    pub loaded: AtomicU64,
    pub misses: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded(&self) -> u64 {
        self.loaded.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl MetricsRecorder for Metrics {
    fn record_matrix_loaded(&self) {
        self.loaded.fetch_add(1, Ordering::Relaxed);
    }

    fn record_digest_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }
}
