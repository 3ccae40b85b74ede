//! Inbound Ports (Driving Ports)
//!
//! The API that the runtime and other callers use to search the catalog.

use async_trait::async_trait;
use shared_types::{CofactorEntry, DiseaseEntry, OrganismEntry, ProteinRecord};

use crate::domain::{ConstraintSet, ResultPage};
use crate::error::CatalogError;

/// Primary protein catalog API (Driving Port)
#[async_trait]
pub trait ProteinCatalogApi: Send + Sync {
    /// Every record matching all constraints, ordered by entry id.
    ///
    /// Records carry `matrix: None`; attaching matrices is a separate step.
    async fn find(&self, constraints: &ConstraintSet) -> Result<Vec<ProteinRecord>, CatalogError>;

    /// One page of [`find`](Self::find). `per_page` falls back to the
    /// configured default.
    async fn find_page(
        &self,
        constraints: &ConstraintSet,
        page: i64,
        per_page: Option<usize>,
    ) -> Result<ResultPage<ProteinRecord>, CatalogError>;

    async fn list_diseases(&self) -> Result<Vec<DiseaseEntry>, CatalogError>;

    async fn list_cofactors(&self) -> Result<Vec<CofactorEntry>, CatalogError>;

    async fn list_organisms(&self) -> Result<Vec<OrganismEntry>, CatalogError>;
}
