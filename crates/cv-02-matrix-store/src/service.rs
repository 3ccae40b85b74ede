//! Coevolution Matrix Loader
//!
//! Digest a sequence, read its entry from the injected [`MatrixStore`],
//! decode it and render it in the requested format.

use async_trait::async_trait;
use shared_types::{Matrix, ProteinRecord};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::domain::{decode, render, LoaderConfig, MatrixFormat, SequenceDigest};
use crate::error::{MatrixError, MatrixStoreError};
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{MatrixLoaderApi, MatrixStore};

/// Content-addressed matrix loader
pub struct CoevolutionMatrixLoader<S: MatrixStore> {
    store: Arc<S>,
    config: LoaderConfig,
    metrics: Arc<dyn MetricsRecorder>,
}

impl<S: MatrixStore> CoevolutionMatrixLoader<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            config: LoaderConfig::default(),
            metrics: Arc::new(NoOpMetrics),
        }
    }

    pub fn with_config(store: Arc<S>, config: LoaderConfig) -> Result<Self, MatrixError> {
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

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    async fn read(&self, digest: &SequenceDigest) -> Result<Option<Vec<u8>>, MatrixError> {
        match timeout(self.config.read_timeout, self.store.get(digest)).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(MatrixStoreError::Timeout {
                millis: self.config.read_timeout.as_millis() as u64,
            }
            .into()),
        }
    }
}

#[async_trait]
impl<S: MatrixStore + 'static> MatrixLoaderApi for CoevolutionMatrixLoader<S> {
    async fn load(&self, sequence: &str) -> Result<Option<Matrix>, MatrixError> {
        let digest = SequenceDigest::of(sequence);
        match self.read(&digest).await? {
            Some(bytes) => {
                let matrix = decode(&digest, &bytes)?;
                self.metrics.record_matrix_loaded();
                debug!(digest = %digest, rows = matrix.rows(), "Matrix loaded");
                Ok(Some(matrix))
            }
            None => {
                self.metrics.record_digest_miss();
                debug!(digest = %digest, "No matrix for sequence");
                Ok(None)
            }
        }
    }

    async fn load_matrices(
        &self,
        records: &mut [ProteinRecord],
        format: MatrixFormat,
        max_load: Option<usize>,
    ) -> Result<usize, MatrixError> {
        let max_load = max_load.unwrap_or(self.config.max_load);
        if records.len() > max_load {
            warn!(attempted = records.len(), max_load, "Matrix load ceiling exceeded");
            return Err(MatrixError::LoadLimitExceeded {
                attempted: records.len(),
                max_load,
            });
        }

        let mut attached = 0;
        for record in records.iter_mut() {
            record.matrix = self
                .load(&record.sequence)
                .await?
                .map(|matrix| render(matrix, format));
            if record.matrix.is_some() {
                attached += 1;
            }
        }

        debug!(requested = records.len(), attached, %format, "Matrices attached");
        Ok(attached)
    }
}
