//! Parameter Registry
//!
//! The closed set of filter names a caller may use, each described by a
//! tagged [`ParamDescriptor`]: its semantic type, how a raw value is
//! coerced, and which predicate strategy compiles it.
//!
//! The declaration order of [`ProteinParam::ALL`] is the canonical order in
//! which fragments are emitted.

use std::fmt;

/// Semantic type of a parameter value after coercion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKind {
    String,
    Integer,
    Float,
    Boolean,
    HierarchicalCode,
}

impl ParamKind {
    /// Human-readable description used in validation errors.
    pub fn expected(&self) -> &'static str {
        match self {
            ParamKind::String => "a string",
            ParamKind::Integer => "an integer",
            ParamKind::Float => "a float",
            ParamKind::Boolean => "a boolean [true/false, yes/no, 0/1]",
            ParamKind::HierarchicalCode => "format 1.2.3.4 or 1.2.*.*",
        }
    }
}

/// How a raw value is turned into a typed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coercion {
    Text,
    /// Text, normalised to uppercase.
    UpperText,
    Integer,
    Float,
    Boolean,
    HierarchicalCode,
}

impl Coercion {
    pub fn kind(&self) -> ParamKind {
        match self {
            Coercion::Text | Coercion::UpperText => ParamKind::String,
            Coercion::Integer => ParamKind::Integer,
            Coercion::Float => ParamKind::Float,
            Coercion::Boolean => ParamKind::Boolean,
            Coercion::HierarchicalCode => ParamKind::HierarchicalCode,
        }
    }
}

/// Comparison operator of a direct column predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ge,
    Le,
}

impl Comparison {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Ge => ">=",
            Comparison::Le => "<=",
        }
    }
}

/// How a bound text value is wrapped before a `LIKE` comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Bound as-is (equality inside the subquery).
    Exact,
    /// `%value%`
    Substring,
    /// `%:value:%`, one element of a colon-delimited lineage.
    LineageElement,
}

impl Pattern {
    pub fn wrap(&self, value: &str) -> String {
        match self {
            Pattern::Exact => value.to_string(),
            Pattern::Substring => format!("%{}%", value),
            Pattern::LineageElement => format!("%:{}:%", value),
        }
    }
}

/// Classification table addressed by a hierarchical code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassTable {
    Cath,
    Enzyme,
}

impl ClassTable {
    /// Column prefix; the table is `<prefix>_class` and the components are
    /// `<prefix>_1` through `<prefix>_4`.
    pub fn prefix(&self) -> &'static str {
        match self {
            ClassTable::Cath => "cath",
            ClassTable::Enzyme => "enzyme",
        }
    }
}

/// Predicate generation strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredicateStrategy {
    /// `<column> <op> ?`
    Direct {
        column: &'static str,
        op: Comparison,
    },
    /// A fixed existential subquery with a single `?`.
    Indirect {
        template: &'static str,
        pattern: Pattern,
    },
    /// Existential subquery over a classification table with one equality
    /// test per concrete code component.
    Hierarchical { table: ClassTable },
}

/// Immutable description of one registered parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamDescriptor {
    pub param: ProteinParam,
    pub name: &'static str,
    pub coercion: Coercion,
    pub strategy: PredicateStrategy,
}

impl ParamDescriptor {
    pub fn kind(&self) -> ParamKind {
        self.coercion.kind()
    }
}

/// Every recognised filter parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProteinParam {
    UniprotId,
    Sequence,
    MinLength,
    MaxLength,
    MinHelix,
    MaxHelix,
    MinTurn,
    MaxTurn,
    MinStrand,
    MaxStrand,
    Organism,
    OrganismId,
    Cath,
    Enzyme,
    HasSubstrate,
    HasPtm,
    HasPdb,
    HasDisease,
    Disease,
    DiseaseId,
    Cofactor,
    CofactorId,
}

const ORGANISM_BY_TAXONOMY: &str = "entry.organismId IN (SELECT organism.organismId FROM organism WHERE organism.taxonomy LIKE ?)";
const DISEASE_BY_NAME: &str = "entry.entryId IN (SELECT entry_disease.entryId FROM entry_disease WHERE entry_disease.diseaseId IN (SELECT disease.diseaseId FROM disease WHERE disease.diseaseName LIKE ?))";
const DISEASE_BY_ID: &str = "entry.entryId IN (SELECT entry_disease.entryId FROM entry_disease WHERE entry_disease.diseaseId = ?)";
const COFACTOR_BY_NAME: &str = "entry.entryId IN (SELECT entry_cofactor.entryId FROM entry_cofactor WHERE entry_cofactor.cofactorId IN (SELECT cofactor.cofactorId FROM cofactor WHERE cofactor.cofactorName LIKE ?))";
const COFACTOR_BY_ID: &str = "entry.entryId IN (SELECT entry_cofactor.entryId FROM entry_cofactor WHERE entry_cofactor.cofactorId = ?)";

const fn direct(column: &'static str, op: Comparison) -> PredicateStrategy {
    PredicateStrategy::Direct { column, op }
}

const fn indirect(template: &'static str, pattern: Pattern) -> PredicateStrategy {
    PredicateStrategy::Indirect { template, pattern }
}

impl ProteinParam {
    /// All parameters in canonical order.
    pub const ALL: [ProteinParam; 22] = [
        ProteinParam::UniprotId,
        ProteinParam::Sequence,
        ProteinParam::MinLength,
        ProteinParam::MaxLength,
        ProteinParam::MinHelix,
        ProteinParam::MaxHelix,
        ProteinParam::MinTurn,
        ProteinParam::MaxTurn,
        ProteinParam::MinStrand,
        ProteinParam::MaxStrand,
        ProteinParam::Organism,
        ProteinParam::OrganismId,
        ProteinParam::Cath,
        ProteinParam::Enzyme,
        ProteinParam::HasSubstrate,
        ProteinParam::HasPtm,
        ProteinParam::HasPdb,
        ProteinParam::HasDisease,
        ProteinParam::Disease,
        ProteinParam::DiseaseId,
        ProteinParam::Cofactor,
        ProteinParam::CofactorId,
    ];

    /// Wire name of the parameter.
    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Look a parameter up by its wire name.
    pub fn lookup(name: &str) -> Option<ProteinParam> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    pub fn descriptor(&self) -> ParamDescriptor {
        use Comparison::{Eq, Ge, Le};

        let (name, coercion, strategy) = match self {
            ProteinParam::UniprotId => ("uniprot_id", Coercion::Text, direct("entry.entryId", Eq)),
            ProteinParam::Sequence => ("sequence", Coercion::UpperText, direct("entry.sequence", Eq)),
            ProteinParam::MinLength => ("min_length", Coercion::Integer, direct("entry.sequenceLength", Ge)),
            ProteinParam::MaxLength => ("max_length", Coercion::Integer, direct("entry.sequenceLength", Le)),
            ProteinParam::MinHelix => ("min_helix", Coercion::Float, direct("entry.structHelix", Ge)),
            ProteinParam::MaxHelix => ("max_helix", Coercion::Float, direct("entry.structHelix", Le)),
            ProteinParam::MinTurn => ("min_turn", Coercion::Float, direct("entry.structTurn", Ge)),
            ProteinParam::MaxTurn => ("max_turn", Coercion::Float, direct("entry.structTurn", Le)),
            ProteinParam::MinStrand => ("min_strand", Coercion::Float, direct("entry.structStrand", Ge)),
            ProteinParam::MaxStrand => ("max_strand", Coercion::Float, direct("entry.structStrand", Le)),
            ProteinParam::Organism => (
                "organism",
                Coercion::Text,
                indirect(ORGANISM_BY_TAXONOMY, Pattern::LineageElement),
            ),
            ProteinParam::OrganismId => ("organism_id", Coercion::Text, direct("entry.organismId", Eq)),
            ProteinParam::Cath => (
                "cath",
                Coercion::HierarchicalCode,
                PredicateStrategy::Hierarchical { table: ClassTable::Cath },
            ),
            ProteinParam::Enzyme => (
                "enzyme",
                Coercion::HierarchicalCode,
                PredicateStrategy::Hierarchical { table: ClassTable::Enzyme },
            ),
            ProteinParam::HasSubstrate => ("has_substrate", Coercion::Boolean, direct("entry.hasSubstrate", Eq)),
            ProteinParam::HasPtm => ("has_ptm", Coercion::Boolean, direct("entry.hasPTM", Eq)),
            ProteinParam::HasPdb => ("has_pdb", Coercion::Boolean, direct("entry.hasPDB", Eq)),
            ProteinParam::HasDisease => ("has_disease", Coercion::Boolean, direct("entry.hasDisease", Eq)),
            ProteinParam::Disease => ("disease", Coercion::Text, indirect(DISEASE_BY_NAME, Pattern::Substring)),
            ProteinParam::DiseaseId => ("disease_id", Coercion::Text, indirect(DISEASE_BY_ID, Pattern::Exact)),
            ProteinParam::Cofactor => ("cofactor", Coercion::Text, indirect(COFACTOR_BY_NAME, Pattern::Substring)),
            ProteinParam::CofactorId => ("cofactor_id", Coercion::Text, indirect(COFACTOR_BY_ID, Pattern::Exact)),
        };

        ParamDescriptor {
            param: *self,
            name,
            coercion,
            strategy,
        }
    }

    /// Every registered wire name, in canonical order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|p| p.name())
    }
}

impl fmt::Display for ProteinParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = ProteinParam::names().collect();
        assert_eq!(names.len(), ProteinParam::ALL.len());
    }

    #[test]
    fn test_lookup_roundtrips_every_param() {
        for param in ProteinParam::ALL {
            assert_eq!(ProteinParam::lookup(param.name()), Some(param));
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(ProteinParam::lookup("UNIPROT_ID"), None);
        assert_eq!(ProteinParam::lookup("foo"), None);
    }

    #[test]
    fn test_canonical_order_matches_declaration() {
        let mut sorted = ProteinParam::ALL;
        sorted.sort();
        assert_eq!(sorted, ProteinParam::ALL);
    }

    #[test]
    fn test_indirect_templates_have_one_placeholder() {
        for param in ProteinParam::ALL {
            if let PredicateStrategy::Indirect { template, .. } = param.descriptor().strategy {
                assert_eq!(template.matches('?').count(), 1, "{}", param);
            }
        }
    }

    #[test]
    fn test_pattern_wrapping() {
        assert_eq!(Pattern::LineageElement.wrap("Homo"), "%:Homo:%");
        assert_eq!(Pattern::Substring.wrap("cancer"), "%cancer%");
        assert_eq!(Pattern::Exact.wrap("DI-00001"), "DI-00001");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ProteinParam::MinLength.descriptor().kind(), ParamKind::Integer);
        assert_eq!(ProteinParam::Sequence.descriptor().kind(), ParamKind::String);
        assert_eq!(ProteinParam::Cath.descriptor().kind(), ParamKind::HierarchicalCode);
        assert_eq!(ProteinParam::HasPdb.descriptor().kind(), ParamKind::Boolean);
    }
}
