//! Response cache
//!
//! Decorates any [`ProteinStore`] with a TTL-bounded LRU. Record queries are
//! keyed by [`CompiledQuery::cache_key`], so semantically different
//! constraint sets never share an entry. Lookup lists are cached under fixed
//! keys. Errors are passed through and never cached.

use async_trait::async_trait;
use lru::LruCache;
use parking_lot::Mutex;
use shared_types::{CofactorEntry, DiseaseEntry, OrganismEntry, ProteinRecord};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::domain::CompiledQuery;
use crate::error::StoreError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::ProteinStore;

const DISEASES_KEY: &str = "list:disease";
const COFACTORS_KEY: &str = "list:cofactor";
const ORGANISMS_KEY: &str = "list:organism";

#[derive(Clone)]
enum CachedValue {
    Records(Arc<Vec<ProteinRecord>>),
    Diseases(Arc<Vec<DiseaseEntry>>),
    Cofactors(Arc<Vec<CofactorEntry>>),
    Organisms(Arc<Vec<OrganismEntry>>),
}

struct CacheEntry {
    inserted_at: Instant,
    value: CachedValue,
}

/// Caching decorator over a [`ProteinStore`]
pub struct CachedProteinStore<S: ProteinStore> {
    inner: S,
    entries: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
    metrics: Arc<dyn MetricsRecorder>,
}

impl<S: ProteinStore> CachedProteinStore<S> {
    pub fn new(inner: S, capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
            metrics: Arc::new(NoOpMetrics),
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of live entries (expired entries are counted until touched).
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn get(&self, key: &str) -> Option<CachedValue> {
        let mut entries = self.entries.lock();
        let expired = match entries.get(key) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                self.metrics.record_cache_hit();
                debug!(key_len = key.len(), "Cache hit");
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.pop(key);
        }
        None
    }

    fn put(&self, key: String, value: CachedValue) {
        self.entries.lock().put(
            key,
            CacheEntry {
                inserted_at: Instant::now(),
                value,
            },
        );
    }
}

#[async_trait]
impl<S: ProteinStore> ProteinStore for CachedProteinStore<S> {
    async fn fetch_records(&self, query: &CompiledQuery) -> Result<Vec<ProteinRecord>, StoreError> {
        let key = query.cache_key();
        if let Some(CachedValue::Records(records)) = self.get(&key) {
            return Ok(records.as_ref().clone());
        }
        let records = Arc::new(self.inner.fetch_records(query).await?);
        self.put(key, CachedValue::Records(records.clone()));
        Ok(records.as_ref().clone())
    }

    async fn fetch_diseases(&self) -> Result<Vec<DiseaseEntry>, StoreError> {
        if let Some(CachedValue::Diseases(rows)) = self.get(DISEASES_KEY) {
            return Ok(rows.as_ref().clone());
        }
        let rows = Arc::new(self.inner.fetch_diseases().await?);
        self.put(DISEASES_KEY.to_string(), CachedValue::Diseases(rows.clone()));
        Ok(rows.as_ref().clone())
    }

    async fn fetch_cofactors(&self) -> Result<Vec<CofactorEntry>, StoreError> {
        if let Some(CachedValue::Cofactors(rows)) = self.get(COFACTORS_KEY) {
            return Ok(rows.as_ref().clone());
        }
        let rows = Arc::new(self.inner.fetch_cofactors().await?);
        self.put(COFACTORS_KEY.to_string(), CachedValue::Cofactors(rows.clone()));
        Ok(rows.as_ref().clone())
    }

    async fn fetch_organisms(&self) -> Result<Vec<OrganismEntry>, StoreError> {
        if let Some(CachedValue::Organisms(rows)) = self.get(ORGANISMS_KEY) {
            return Ok(rows.as_ref().clone());
        }
        let rows = Arc::new(self.inner.fetch_organisms().await?);
        self.put(ORGANISMS_KEY.to_string(), CachedValue::Organisms(rows.clone()));
        Ok(rows.as_ref().clone())
    }
}
