//! # API Flow
//!
//! The runtime container built from configuration, driven through
//! `handle_api_query` exactly as the binary does.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use coevo_runtime::{handle_api_query, ApiQueryHandler, CoevoContainer, RuntimeConfig};
    use serde_json::{json, Value};
    use tempfile::TempDir;

    use crate::fixtures::{seed_alignments, seed_catalog, seed_matrices};

    fn handler(dir: &TempDir) -> ApiQueryHandler {
        let mut config = RuntimeConfig::default();
        config.storage.db_path = seed_catalog(dir.path());
        config.storage.matrix_path = Some(seed_matrices(dir.path()));
        config.storage.alignment_path = Some(seed_alignments(dir.path()));

        ApiQueryHandler::new(Arc::new(CoevoContainer::new(&config).unwrap()))
    }

    fn result_ids(response: &Value) -> Vec<String> {
        response["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["entryId"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_find_without_matrices() {
        let dir = TempDir::new().unwrap();
        let h = handler(&dir);

        let response = handle_api_query(&h, "find", &json!({ "organism": "Homo" }))
            .await
            .unwrap();

        assert_eq!(result_ids(&response), ["P00001", "P00003", "P00004"]);
        assert_eq!(response["result_count"], 3);
        assert_eq!(response["total_pages"], 1);
        assert_eq!(response["showing"], "1-3");
        assert!(response["results"][0].get("matrix").is_none());
    }

    #[tokio::test]
    async fn test_find_with_matrices_as_nested_lists() {
        let dir = TempDir::new().unwrap();
        let h = handler(&dir);

        let response = handle_api_query(
            &h,
            "find",
            &json!({ "max_length": "5", "matrix": "true", "page_size": "10" }),
        )
        .await
        .unwrap();

        assert_eq!(result_ids(&response), ["P00001", "P00005"]);
        let matrix = response["results"][0]["matrix"].as_array().unwrap();
        assert_eq!(matrix.len(), 5);
        assert_eq!(matrix[0][0], json!(1.0));
        assert!(response["results"][1]["matrix"].is_null());
    }

    #[tokio::test]
    async fn test_second_page() {
        let dir = TempDir::new().unwrap();
        let h = handler(&dir);

        let response = handle_api_query(&h, "find", &json!({ "page": 2, "page_size": 2 }))
            .await
            .unwrap();

        assert_eq!(result_ids(&response), ["P00003", "P00004"]);
        assert_eq!(response["page"], 2);
        assert_eq!(response["showing"], "3-4");
        assert_eq!(response["total_pages"], 3);
    }

    #[tokio::test]
    async fn test_client_errors() {
        let dir = TempDir::new().unwrap();
        let h = handler(&dir);

        let err = handle_api_query(&h, "find", &json!({ "cath": "3.40" }))
            .await
            .unwrap_err();
        assert_eq!(err.code, -32602);
        assert!(err.message.contains("cath"));

        let err = handle_api_query(&h, "find", &json!({ "matrix": true, "page_size": 50 }))
            .await
            .unwrap_err();
        assert_eq!(err.code, -32602);
    }

    #[tokio::test]
    async fn test_lookup_lists() {
        let dir = TempDir::new().unwrap();
        let h = handler(&dir);

        let organisms = handle_api_query(&h, "get_organism_list", &Value::Null)
            .await
            .unwrap();
        assert_eq!(organisms.as_array().unwrap().len(), 2);

        let cofactors = handle_api_query(&h, "get_cofactor_list", &Value::Null)
            .await
            .unwrap();
        assert!(cofactors
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c["cofactorId"] == "CHEBI:29105"));
    }

    #[tokio::test]
    async fn test_alignments() {
        let dir = TempDir::new().unwrap();
        let h = handler(&dir);

        let response = handle_api_query(&h, "get_alignment", &json!({ "uniprot_id": "P00001" }))
            .await
            .unwrap();
        assert!(response["alignment"].as_str().unwrap().starts_with(">P00001"));

        let err = handle_api_query(&h, "get_alignment", &json!({ "uniprot_id": "P00002" }))
            .await
            .unwrap_err();
        assert_eq!(err.message, "No alignments found for P00002");

        let err = handle_api_query(&h, "get_alignment", &json!("../coevo"))
            .await
            .unwrap_err();
        assert_eq!(err.code, -32602);
    }

    #[tokio::test]
    async fn test_metrics_reflect_queries() {
        let dir = TempDir::new().unwrap();
        let h = handler(&dir);
        coevo_telemetry_registered();

        handle_api_query(&h, "find", &json!({})).await.unwrap();
        let text = handle_api_query(&h, "get_metrics", &Value::Null)
            .await
            .unwrap();
        assert!(text.as_str().unwrap().contains("coevo_catalog_queries_total"));
    }

    fn coevo_telemetry_registered() {
        coevo_telemetry::register_metrics().unwrap();
    }
}
