//! Protein Catalog Service
//!
//! Orchestrates compilation, execution and pagination over an injected
//! [`ProteinStore`].

use async_trait::async_trait;
use shared_types::{CofactorEntry, DiseaseEntry, OrganismEntry, ProteinRecord};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::domain::{CatalogConfig, ConstraintSet, ResultPage};
use crate::error::CatalogError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{ProteinCatalogApi, ProteinStore};

/// Protein Catalog Service implementation
///
/// Implements the `ProteinCatalogApi` port using injected dependencies.
pub struct ProteinCatalogService<S: ProteinStore> {
    store: Arc<S>,
    config: CatalogConfig,
    metrics: Arc<dyn MetricsRecorder>,
}

impl<S: ProteinStore> ProteinCatalogService<S> {
    /// Create a new service with the default configuration
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            config: CatalogConfig::default(),
            metrics: Arc::new(NoOpMetrics),
        }
    }

    /// Create with a custom configuration
    pub fn with_config(store: Arc<S>, config: CatalogConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            metrics: Arc::new(NoOpMetrics),
        })
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

#[async_trait]
impl<S: ProteinStore + 'static> ProteinCatalogApi for ProteinCatalogService<S> {
    async fn find(&self, constraints: &ConstraintSet) -> Result<Vec<ProteinRecord>, CatalogError> {
        let query = constraints.compile();

        let started = Instant::now();
        let records = self.store.fetch_records(&query).await?;
        self.metrics.record_query(started.elapsed(), records.len());

        debug!(
            constraints = constraints.len(),
            rows = records.len(),
            "find completed"
        );
        Ok(records)
    }

    async fn find_page(
        &self,
        constraints: &ConstraintSet,
        page: i64,
        per_page: Option<usize>,
    ) -> Result<ResultPage<ProteinRecord>, CatalogError> {
        let per_page = per_page.unwrap_or(self.config.default_per_page);
        if per_page == 0 || per_page > self.config.max_per_page {
            return Err(CatalogError::InvalidPageSize { per_page });
        }
        if page < 1 {
            return Err(CatalogError::PageOutOfRange { page });
        }

        let records = self.find(constraints).await?;
        ResultPage::from_all(&records, page, per_page)
    }

    async fn list_diseases(&self) -> Result<Vec<DiseaseEntry>, CatalogError> {
        Ok(self.store.fetch_diseases().await?)
    }

    async fn list_cofactors(&self) -> Result<Vec<CofactorEntry>, CatalogError> {
        Ok(self.store.fetch_cofactors().await?)
    }

    async fn list_organisms(&self) -> Result<Vec<OrganismEntry>, CatalogError> {
        Ok(self.store.fetch_organisms().await?)
    }
}
