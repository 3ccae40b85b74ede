//! # API Query Handler
//!
//! Transport-agnostic dispatch of named API methods onto the container's
//! subsystems. Every method takes a JSON `params` value and returns a JSON
//! result or an [`ApiQueryError`].
//!
//! ## Methods
//!
//! | Method | Params |
//! |--------|--------|
//! | `find` | constraint names plus `page`, `page_size`, `matrix` |
//! | `get_disease_list` | none |
//! | `get_cofactor_list` | none |
//! | `get_organism_list` | none |
//! | `get_alignment` | `{"uniprot_id": "P12345"}` or `"P12345"` |
//! | `ping` | none |
//! | `get_metrics` | none |

use std::sync::Arc;

use coevo_telemetry::{gather_metrics, API_ERRORS};
use cv_01_protein_catalog::domain::parse_bool;
use cv_01_protein_catalog::{CatalogError, ConstraintSetBuilder, RawValue};
use cv_02_matrix_store::{MatrixError, MatrixFormat};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::adapters::AlignmentError;
use crate::container::CoevoContainer;

/// Page requested when the caller gives none.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the caller gives none.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;
/// Largest page size when matrices are requested.
pub const MAX_MATRIX_PAGE_SIZE: i64 = 10;

/// Error from API query handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiQueryError {
    pub code: i32,
    pub message: String,
}

impl ApiQueryError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: format!("Method not found: {}", method),
        }
    }

    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self {
            code: -32602,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            code: -32000,
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ApiQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiQueryError {}

impl From<CatalogError> for ApiQueryError {
    fn from(e: CatalogError) -> Self {
        if e.is_client_error() {
            Self::invalid_params(e.to_string())
        } else {
            Self::internal(e.to_string())
        }
    }
}

impl From<MatrixError> for ApiQueryError {
    fn from(e: MatrixError) -> Self {
        match e {
            MatrixError::LoadLimitExceeded { .. } => Self::invalid_params(e.to_string()),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<AlignmentError> for ApiQueryError {
    fn from(e: AlignmentError) -> Self {
        match e {
            AlignmentError::Io(_) => Self::internal(e.to_string()),
            AlignmentError::InvalidId { id } | AlignmentError::NotFound { id } => {
                Self::invalid_params(format!("No alignments found for {}", id))
            }
        }
    }
}

/// Routes API queries to the subsystems held by a [`CoevoContainer`].
pub struct ApiQueryHandler {
    container: Arc<CoevoContainer>,
}

impl ApiQueryHandler {
    pub fn new(container: Arc<CoevoContainer>) -> Self {
        Self { container }
    }

    pub fn container(&self) -> &Arc<CoevoContainer> {
        &self.container
    }

    /// Process one query.
    #[instrument(skip(self, params), fields(request_id = %Uuid::new_v4()))]
    pub async fn handle(&self, method: &str, params: &Value) -> Result<Value, ApiQueryError> {
        debug!("Received API query");

        let (label, result) = match method {
            "find" => ("find", self.find(params).await),
            "get_disease_list" => ("get_disease_list", self.list_diseases().await),
            "get_cofactor_list" => ("get_cofactor_list", self.list_cofactors().await),
            "get_organism_list" => ("get_organism_list", self.list_organisms().await),
            "get_alignment" => ("get_alignment", self.get_alignment(params).await),
            "ping" => ("ping", Ok(json!("pong"))),
            "get_metrics" => (
                "get_metrics",
                gather_metrics()
                    .map(Value::String)
                    .map_err(|e| ApiQueryError::internal(e.to_string())),
            ),
            _ => ("unknown", Err(ApiQueryError::method_not_found(method))),
        };

        if let Err(e) = &result {
            API_ERRORS
                .with_label_values(&[label, &e.code.to_string()])
                .inc();
            warn!(code = e.code, message = %e.message, "API query failed");
        }
        result
    }

    async fn find(&self, params: &Value) -> Result<Value, ApiQueryError> {
        let mut fields = match params {
            Value::Null => Map::new(),
            Value::Object(map) => map.clone(),
            _ => {
                return Err(ApiQueryError::invalid_params(
                    "find expects an object of named parameters",
                ))
            }
        };

        let load_matrices = match fields.remove("matrix") {
            Some(value) => flag_param(&value, "matrix")?,
            None => false,
        };
        let page = match fields.remove("page") {
            Some(value) => int_param(&value, "page")?,
            None => DEFAULT_PAGE,
        };
        let page_size = match fields.remove("page_size") {
            Some(value) => int_param(&value, "page_size")?,
            None => DEFAULT_PAGE_SIZE,
        };
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(ApiQueryError::invalid_params(format!(
                "page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        let mut builder = ConstraintSetBuilder::new();
        for (name, value) in fields {
            let raw: RawValue = serde_json::from_value(value).map_err(|_| {
                ApiQueryError::invalid_params(format!(
                    "Parameter '{}' must be a string, number or boolean",
                    name
                ))
            })?;
            builder.add(name, raw);
        }
        let constraints = builder.build()?;

        if load_matrices && page_size > MAX_MATRIX_PAGE_SIZE {
            return Err(ApiQueryError::invalid_params(format!(
                "page_size cannot be larger than {} when loading matrices",
                MAX_MATRIX_PAGE_SIZE
            )));
        }

        let mut page = self
            .container
            .catalog
            .find_page(&constraints, page, Some(page_size as usize))
            .await?;

        if load_matrices {
            let loader = self
                .container
                .matrices
                .as_ref()
                .ok_or_else(|| ApiQueryError::internal("No matrix store is configured"))?;
            loader
                .load_matrices(&mut page.records, MatrixFormat::Json, None)
                .await?;
        }

        let mut results = serde_json::to_value(&page.records)
            .map_err(|e| ApiQueryError::internal(e.to_string()))?;
        if !load_matrices {
            if let Value::Array(rows) = &mut results {
                for row in rows.iter_mut().filter_map(Value::as_object_mut) {
                    row.remove("matrix");
                }
            }
        }

        Ok(json!({
            "results": results,
            "page": page.page,
            "total_pages": page.total_pages,
            "result_count": page.result_count,
            "showing": page.showing(),
        }))
    }

    async fn list_diseases(&self) -> Result<Value, ApiQueryError> {
        to_json(self.container.catalog.list_diseases().await?)
    }

    async fn list_cofactors(&self) -> Result<Value, ApiQueryError> {
        to_json(self.container.catalog.list_cofactors().await?)
    }

    async fn list_organisms(&self) -> Result<Value, ApiQueryError> {
        to_json(self.container.catalog.list_organisms().await?)
    }

    async fn get_alignment(&self, params: &Value) -> Result<Value, ApiQueryError> {
        let id = match params {
            Value::String(id) => id.as_str(),
            Value::Object(map) => map
                .get("uniprot_id")
                .and_then(Value::as_str)
                .ok_or_else(missing_uniprot_id)?,
            _ => return Err(missing_uniprot_id()),
        };

        let locator = self
            .container
            .alignments
            .as_ref()
            .ok_or_else(|| ApiQueryError::internal("No alignment directory is configured"))?;
        let alignment = locator.read(id).await?;

        Ok(json!({ "uniprot_id": id, "alignment": alignment }))
    }
}

/// Dispatch `method` with `params` through `handler`.
pub async fn handle_api_query(
    handler: &ApiQueryHandler,
    method: &str,
    params: &Value,
) -> Result<Value, ApiQueryError> {
    handler.handle(method, params).await
}

fn missing_uniprot_id() -> ApiQueryError {
    ApiQueryError::invalid_params(r#"Specify the uniprot_id: {"uniprot_id": "P12345"}"#)
}

fn to_json<T: Serialize>(value: T) -> Result<Value, ApiQueryError> {
    serde_json::to_value(value).map_err(|e| ApiQueryError::internal(e.to_string()))
}

fn int_param(value: &Value, name: &str) -> Result<i64, ApiQueryError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        ApiQueryError::invalid_params(format!("{} parameter must be an integer", name))
    })
}

fn flag_param(value: &Value, name: &str) -> Result<bool, ApiQueryError> {
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => parse_bool(s.trim()),
        _ => None,
    };
    parsed.ok_or_else(|| {
        ApiQueryError::invalid_params(format!("{} parameter must be a boolean", name))
    })
}
