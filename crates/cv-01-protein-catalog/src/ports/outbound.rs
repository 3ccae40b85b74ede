//! Outbound Ports (Driven Ports)
//!
//! The read-only relational store the catalog queries.

use async_trait::async_trait;
use shared_types::{CofactorEntry, DiseaseEntry, OrganismEntry, ProteinRecord};

use crate::domain::CompiledQuery;
use crate::error::StoreError;

/// Relational store (Driven Port)
///
/// Implementations never write. Failures are reported as [`StoreError`],
/// never as an empty result.
#[async_trait]
pub trait ProteinStore: Send + Sync {
    /// Run [`CompiledQuery::sql`] with its bound values.
    async fn fetch_records(&self, query: &CompiledQuery) -> Result<Vec<ProteinRecord>, StoreError>;

    async fn fetch_diseases(&self) -> Result<Vec<DiseaseEntry>, StoreError>;

    async fn fetch_cofactors(&self) -> Result<Vec<CofactorEntry>, StoreError>;

    async fn fetch_organisms(&self) -> Result<Vec<OrganismEntry>, StoreError>;
}
