//! # Matrix Flow
//!
//! Catalogue results feeding the content-addressed matrix loader over an
//! on-disk directory store.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cv_01_protein_catalog::{
        ConstraintSet, ConstraintSetBuilder, ProteinCatalogApi, ProteinCatalogService,
        SqliteProteinStore,
    };
    use cv_02_matrix_store::{
        CoevolutionMatrixLoader, DirectoryMatrixStore, LoaderConfig, MatrixError, MatrixFormat,
        MatrixLoaderApi, Metrics,
    };
    use shared_types::{MatrixOutput, ProteinRecord};
    use tempfile::TempDir;

    use crate::fixtures::{matrix_for, seed_catalog, seed_matrices, WITH_MATRIX};

    struct Fixture {
        _dir: TempDir,
        catalog: ProteinCatalogService<SqliteProteinStore>,
        loader: CoevolutionMatrixLoader<DirectoryMatrixStore>,
        metrics: Arc<Metrics>,
    }

    fn fixture(config: LoaderConfig) -> Fixture {
        let dir = TempDir::new().unwrap();
        let db = seed_catalog(dir.path());
        let root = seed_matrices(dir.path());
        let metrics = Arc::new(Metrics::new());

        Fixture {
            catalog: ProteinCatalogService::new(Arc::new(SqliteProteinStore::new(db))),
            loader: CoevolutionMatrixLoader::with_config(
                Arc::new(DirectoryMatrixStore::open(root).unwrap()),
                config,
            )
            .unwrap()
            .with_metrics(metrics.clone()),
            metrics,
            _dir: dir,
        }
    }

    async fn all_records(f: &Fixture) -> Vec<ProteinRecord> {
        f.catalog.find(&ConstraintSet::empty()).await.unwrap()
    }

    #[tokio::test]
    async fn test_hits_are_attached_and_misses_stay_empty() {
        let f = fixture(LoaderConfig::default());
        let mut records = all_records(&f).await;

        let attached = f
            .loader
            .load_matrices(&mut records, MatrixFormat::RawArray, None)
            .await
            .unwrap();

        assert_eq!(attached, WITH_MATRIX.len());
        for record in &records {
            let expected = WITH_MATRIX.contains(&record.entry_id.as_str());
            assert_eq!(record.has_matrix(), expected, "{}", record.entry_id);
        }
        assert_eq!(f.metrics.loaded(), 3);
        assert_eq!(f.metrics.misses(), 2);
    }

    #[tokio::test]
    async fn test_matrix_shape_follows_sequence_length() {
        let f = fixture(LoaderConfig::default());
        let constraints = ConstraintSetBuilder::new()
            .with("uniprot_id", "P00002")
            .build()
            .unwrap();
        let mut records = f.catalog.find(&constraints).await.unwrap();

        f.loader
            .load_matrices(&mut records, MatrixFormat::RawArray, None)
            .await
            .unwrap();

        match &records[0].matrix {
            Some(MatrixOutput::Array(matrix)) => {
                assert_eq!(matrix.rows(), 8);
                assert_eq!(matrix.cols(), 8);
                assert_eq!(matrix, &matrix_for("MKVLAGHT"));
            }
            other => panic!("unexpected matrix: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_every_format_renders_hits() {
        let f = fixture(LoaderConfig::default());
        for format in MatrixFormat::ALL {
            let mut records = all_records(&f).await;
            f.loader
                .load_matrices(&mut records, format, None)
                .await
                .unwrap();
            let first = records[0].matrix.as_ref().unwrap();
            assert_eq!(first.row_count(), records[0].sequence_length as usize);
        }
    }

    #[tokio::test]
    async fn test_ceiling_blocks_oversized_requests() {
        let f = fixture(LoaderConfig::default().with_max_load(4));
        let mut records = all_records(&f).await;

        let err = f
            .loader
            .load_matrices(&mut records, MatrixFormat::Json, None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            MatrixError::LoadLimitExceeded {
                attempted: 5,
                max_load: 4
            }
        ));
        assert!(records.iter().all(|r| !r.has_matrix()));
        assert_eq!(f.metrics.loaded() + f.metrics.misses(), 0);

        // A page within the ceiling goes through
        let page = f
            .catalog
            .find_page(&ConstraintSet::empty(), 1, Some(4))
            .await
            .unwrap();
        let mut window = page.records;
        assert!(f
            .loader
            .load_matrices(&mut window, MatrixFormat::Json, None)
            .await
            .is_ok());
    }
}
