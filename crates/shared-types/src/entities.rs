//! # Core Domain Entities
//!
//! Defines the catalogue entities materialised from the relational store.
//!
//! ## Clusters
//!
//! - **Entries**: `ProteinRecord`
//! - **Lookups**: `OrganismEntry`, `DiseaseEntry`, `CofactorEntry`

use serde::{Deserialize, Serialize};

use crate::matrix::MatrixOutput;

/// A UniProt accession (e.g. `P12345`).
pub type EntryId = String;

// =============================================================================
// CLUSTER A: ENTRIES
// =============================================================================

/// One catalogued protein.
///
/// Created by the query executor from a store row. The `matrix` field is
/// always present but stays `None` until a matrix load fills it, so a large
/// result set never drags its binary payloads into memory by accident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinRecord {
    /// UniProt accession.
    pub entry_id: EntryId,
    /// Amino-acid sequence, one letter per residue.
    pub sequence: String,
    /// Number of residues.
    pub sequence_length: i64,
    /// Number of effective sequences in the alignment.
    pub neff: Option<f64>,
    /// NCBI taxonomy identifier of the source organism.
    pub organism_id: Option<String>,
    /// Fraction of residues in helices (0..=1).
    pub struct_helix: Option<f64>,
    /// Fraction of residues in turns (0..=1).
    pub struct_turn: Option<f64>,
    /// Fraction of residues in beta strands (0..=1).
    pub struct_strand: Option<f64>,
    pub has_substrate: bool,
    #[serde(rename = "hasPTM")]
    pub has_ptm: bool,
    #[serde(rename = "hasPDB")]
    pub has_pdb: bool,
    pub has_disease: bool,
    /// CATH codes in `A.B.C.D` form.
    pub cath_classes: Vec<String>,
    /// Enzyme Commission numbers in `A.B.C.D` form.
    pub enzyme_classes: Vec<String>,
    /// Disease identifiers (`DI-xxxxx`).
    pub disease_ids: Vec<String>,
    /// Cofactor identifiers (`CHEBI:xxxxx`).
    pub cofactor_ids: Vec<String>,
    /// Coevolution matrix, populated on demand.
    pub matrix: Option<MatrixOutput>,
}

impl ProteinRecord {
    /// Create a record with the mandatory columns and everything else empty.
    pub fn new(entry_id: impl Into<EntryId>, sequence: impl Into<String>) -> Self {
        let sequence = sequence.into();
        Self {
            entry_id: entry_id.into(),
            sequence_length: sequence.chars().count() as i64,
            sequence,
            neff: None,
            organism_id: None,
            struct_helix: None,
            struct_turn: None,
            struct_strand: None,
            has_substrate: false,
            has_ptm: false,
            has_pdb: false,
            has_disease: false,
            cath_classes: Vec::new(),
            enzyme_classes: Vec::new(),
            disease_ids: Vec::new(),
            cofactor_ids: Vec::new(),
            matrix: None,
        }
    }

    /// Whether a matrix load has attached a payload to this record.
    pub fn has_matrix(&self) -> bool {
        self.matrix.is_some()
    }
}

// =============================================================================
// CLUSTER B: LOOKUPS
// =============================================================================

/// A row of the `organism` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganismEntry {
    pub organism_id: String,
    pub name_scientific: Option<String>,
    pub name_common: Option<String>,
    /// Colon-delimited lineage, e.g. `:Eukaryota:Metazoa:Chordata:`.
    pub taxonomy: Option<String>,
}

/// A row of the `disease` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseEntry {
    pub disease_id: String,
    pub disease_name: String,
}

/// A row of the `cofactor` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CofactorEntry {
    pub cofactor_id: String,
    pub cofactor_name: String,
}
