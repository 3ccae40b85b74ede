//! # Subsystem Container
//!
//! Holds the catalogue service, the optional matrix loader and the optional
//! alignment locator, built from one [`RuntimeConfig`].
//!
//! ```text
//! CoevoContainer
//!   ├── catalog     ProteinCatalogService<CachedProteinStore<SqliteProteinStore>>
//!   ├── matrices    CoevolutionMatrixLoader<MatrixBackend>      (COEVO_MAT_PATH)
//!   └── alignments  AlignmentLocator                            (COEVO_ALN_PATH)
//! ```

use std::sync::Arc;

use cv_01_protein_catalog::{
    CachedProteinStore, ProteinCatalogApi, ProteinCatalogService, SqliteProteinStore,
};
use cv_02_matrix_store::{CoevolutionMatrixLoader, MatrixLoaderApi};
use tracing::{info, warn};

use crate::adapters::{AlignmentLocator, MatrixBackend, PrometheusMetrics};
use crate::container::config::{ConfigError, RuntimeConfig};

/// Concrete catalogue service used in production.
pub type ConcreteCatalogService = ProteinCatalogService<CachedProteinStore<SqliteProteinStore>>;

/// Concrete matrix loader used in production.
pub type ConcreteMatrixLoader = CoevolutionMatrixLoader<MatrixBackend>;

/// Central container holding all subsystem instances.
pub struct CoevoContainer {
    /// Protein Catalog (Subsystem 1)
    pub catalog: Arc<dyn ProteinCatalogApi>,

    /// Matrix Store (Subsystem 2); `None` when no matrix store is configured
    pub matrices: Option<Arc<dyn MatrixLoaderApi>>,

    /// Alignment files; `None` when no alignment directory is configured
    pub alignments: Option<AlignmentLocator>,
}

impl CoevoContainer {
    /// Build every subsystem from configuration.
    pub fn new(config: &RuntimeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let metrics = Arc::new(PrometheusMetrics);

        let storage = &config.storage;
        if !storage.db_path.exists() {
            warn!(path = %storage.db_path.display(), "Catalogue database does not exist");
        }
        let store = CachedProteinStore::new(
            SqliteProteinStore::new(&storage.db_path).with_timeout(config.catalog.query_timeout),
            config.catalog.cache_capacity,
            config.catalog.cache_ttl,
        )
        .with_metrics(metrics.clone());
        let catalog: ConcreteCatalogService =
            ProteinCatalogService::with_config(Arc::new(store), config.catalog.clone())?
                .with_metrics(metrics.clone());

        let matrices = match &storage.matrix_path {
            Some(path) => {
                let backend = MatrixBackend::open(storage.matrix_backend, path)?;
                info!(
                    path = %path.display(),
                    backend = backend.name(),
                    "Matrix store opened"
                );
                let loader: ConcreteMatrixLoader =
                    CoevolutionMatrixLoader::with_config(Arc::new(backend), config.loader.clone())?
                        .with_metrics(metrics);
                Some(Arc::new(loader) as Arc<dyn MatrixLoaderApi>)
            }
            None => {
                info!("No matrix store configured; matrix loading disabled");
                None
            }
        };

        let alignments = storage.alignment_path.as_ref().map(AlignmentLocator::new);

        info!(
            db = %storage.db_path.display(),
            matrices = matrices.is_some(),
            alignments = alignments.is_some(),
            "Container initialized"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            matrices,
            alignments,
        })
    }

    /// Assemble a container from already-built parts.
    pub fn from_parts(
        catalog: Arc<dyn ProteinCatalogApi>,
        matrices: Option<Arc<dyn MatrixLoaderApi>>,
        alignments: Option<AlignmentLocator>,
    ) -> Self {
        Self {
            catalog,
            matrices,
            alignments,
        }
    }
}
