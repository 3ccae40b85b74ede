//! # Catalogue Flow
//!
//! Constraint building, compilation and execution against a seeded SQLite
//! catalogue, through the public `ProteinCatalogApi`.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use cv_01_protein_catalog::{
        CachedProteinStore, CatalogError, ConstraintSet, ConstraintSetBuilder, ProteinCatalogApi,
        ProteinCatalogService, SqliteProteinStore,
    };
    use tempfile::TempDir;

    use crate::fixtures::seed_catalog;

    struct Fixture {
        _dir: TempDir,
        service: ProteinCatalogService<CachedProteinStore<SqliteProteinStore>>,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let db = seed_catalog(dir.path());
        let store = CachedProteinStore::new(SqliteProteinStore::new(db), 16, Duration::from_secs(60));
        Fixture {
            _dir: dir,
            service: ProteinCatalogService::new(Arc::new(store)),
        }
    }

    async fn ids(fixture: &Fixture, pairs: &[(&str, &str)]) -> Vec<String> {
        let mut builder = ConstraintSetBuilder::new();
        for (name, value) in pairs {
            builder.add(*name, *value);
        }
        let constraints = builder.build().unwrap();
        fixture
            .service
            .find(&constraints)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.entry_id)
            .collect()
    }

    #[tokio::test]
    async fn test_empty_constraints_select_everything_in_order() {
        let f = fixture();
        assert_eq!(
            ids(&f, &[]).await,
            ["P00001", "P00002", "P00003", "P00004", "P00005"]
        );
    }

    #[tokio::test]
    async fn test_direct_comparisons() {
        let f = fixture();
        assert_eq!(ids(&f, &[("min_length", "8")]).await, ["P00002", "P00003", "P00004"]);
        assert_eq!(ids(&f, &[("max_length", "5")]).await, ["P00001", "P00005"]);
        assert_eq!(ids(&f, &[("min_helix", "0.3")]).await, ["P00001", "P00003"]);
        assert_eq!(ids(&f, &[("uniprot_id", "P00003")]).await, ["P00003"]);
    }

    #[tokio::test]
    async fn test_sequence_is_uppercased() {
        let f = fixture();
        assert_eq!(ids(&f, &[("sequence", "mkv")]).await, ["P00005"]);
    }

    #[tokio::test]
    async fn test_organism_matches_lineage_element() {
        let f = fixture();
        assert_eq!(ids(&f, &[("organism", "Homo")]).await, ["P00001", "P00003", "P00004"]);
        assert_eq!(ids(&f, &[("organism", "Bacteria")]).await, ["P00002", "P00005"]);
        // Partial lineage names do not match
        assert!(ids(&f, &[("organism", "Hom")]).await.is_empty());
        assert_eq!(ids(&f, &[("organism_id", "562")]).await, ["P00002", "P00005"]);
    }

    #[tokio::test]
    async fn test_hierarchical_codes() {
        let f = fixture();
        assert_eq!(ids(&f, &[("cath", "3.*")]).await, ["P00001", "P00002"]);
        assert_eq!(ids(&f, &[("cath", "3.40.*")]).await, ["P00001"]);
        assert_eq!(ids(&f, &[("cath", "*")]).await, ["P00001", "P00002", "P00004"]);
        assert_eq!(ids(&f, &[("enzyme", "3.4.21.5")]).await, ["P00004"]);
        assert!(ids(&f, &[("enzyme", "3.4.21.6")]).await.is_empty());
    }

    #[tokio::test]
    async fn test_flags_accept_every_spelling() {
        let f = fixture();
        for spelling in ["true", "T", "yes", "Y", "1"] {
            assert_eq!(ids(&f, &[("has_disease", spelling)]).await, ["P00001", "P00004"]);
        }
        for spelling in ["false", "F", "no", "N", "0"] {
            assert_eq!(
                ids(&f, &[("has_disease", spelling)]).await,
                ["P00002", "P00003", "P00005"]
            );
        }
    }

    #[tokio::test]
    async fn test_junction_parameters() {
        let f = fixture();
        assert_eq!(ids(&f, &[("disease", "pancreatitis")]).await, ["P00004"]);
        assert_eq!(ids(&f, &[("disease_id", "DI-00001")]).await, ["P00001"]);
        assert_eq!(ids(&f, &[("cofactor", "Mg")]).await, ["P00002", "P00004"]);
        assert!(ids(&f, &[("cofactor_id", "CHEBI:29105")]).await.is_empty());
    }

    #[tokio::test]
    async fn test_constraints_are_conjunctive() {
        let f = fixture();
        assert_eq!(
            ids(&f, &[("min_length", "5"), ("has_pdb", "yes")]).await,
            ["P00001", "P00004"]
        );
        assert_eq!(
            ids(&f, &[("organism", "Homo"), ("cofactor", "Mg"), ("enzyme", "3.*")]).await,
            ["P00004"]
        );
    }

    #[tokio::test]
    async fn test_record_columns_are_populated() {
        let f = fixture();
        let constraints = ConstraintSetBuilder::new()
            .with("uniprot_id", "P00004")
            .build()
            .unwrap();
        let records = f.service.find(&constraints).await.unwrap();
        let record = &records[0];

        assert_eq!(record.sequence, "GGSMKVLAGHTW");
        assert_eq!(record.sequence_length, 12);
        assert_eq!(record.organism_id.as_deref(), Some("9606"));
        assert_eq!(record.cath_classes, ["1.10.8.10"]);
        assert_eq!(record.enzyme_classes, ["3.4.21.5"]);
        assert_eq!(record.disease_ids, ["DI-00002"]);
        assert_eq!(record.cofactor_ids, ["CHEBI:18420"]);
        assert!(record.has_ptm && record.has_pdb && record.has_substrate);
        assert!(record.matrix.is_none());
    }

    #[tokio::test]
    async fn test_paging_over_real_rows() {
        let f = fixture();
        let page = f
            .service
            .find_page(&ConstraintSet::empty(), 2, Some(2))
            .await
            .unwrap();

        assert_eq!(page.result_count, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.showing(), "3-4");
        let ids: Vec<_> = page.records.iter().map(|r| r.entry_id.as_str()).collect();
        assert_eq!(ids, ["P00003", "P00004"]);
    }

    #[tokio::test]
    async fn test_invalid_values_never_reach_the_store() {
        let err = ConstraintSetBuilder::new()
            .with("min_length", "five")
            .with("cath", "3.40")
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation { .. }));

        let err = ConstraintSetBuilder::new()
            .with("uniprot", "P00001")
            .with("min_len", 4)
            .build()
            .unwrap_err();
        match err {
            CatalogError::UnknownParameter { names } => assert_eq!(names, ["uniprot", "min_len"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_hostile_text_is_bound_not_interpolated() {
        let f = fixture();
        assert!(ids(&f, &[("uniprot_id", "P00001' OR '1'='1")]).await.is_empty());
        assert!(ids(&f, &[("disease", "%' --")]).await.is_empty());
        // Catalogue still intact
        assert_eq!(ids(&f, &[]).await.len(), 5);
    }

    #[tokio::test]
    async fn test_lookup_lists() {
        let f = fixture();
        let diseases = f.service.list_diseases().await.unwrap();
        assert_eq!(diseases.len(), 2);

        let cofactors = f.service.list_cofactors().await.unwrap();
        assert!(cofactors.iter().any(|c| c.cofactor_name == "Zn(2+)"));

        let organisms = f.service.list_organisms().await.unwrap();
        assert_eq!(organisms.len(), 2);
        assert!(organisms
            .iter()
            .any(|o| o.name_scientific.as_deref() == Some("Escherichia coli")));
    }

    #[tokio::test]
    async fn test_missing_database_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let service = ProteinCatalogService::new(Arc::new(SqliteProteinStore::new(
            dir.path().join("absent.db"),
        )));
        let err = service.find(&ConstraintSet::empty()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Storage(_)));
    }
}
