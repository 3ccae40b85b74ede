//! Constraint Compiler
//!
//! Turns a [`ConstraintSet`] into a [`CompiledQuery`]: one predicate with
//! positional `?` placeholders and the bound values in the same order.
//!
//! ## Invariants
//!
//! - Placeholder count equals bound-value count.
//! - Caller values only ever appear in `params`, never in the SQL text.
//! - Compilation is deterministic: equal sets yield byte-identical output.

use shared_types::SqlValue;
use tracing::{debug, warn};

use super::coercion::TypedValue;
use super::constraint::ConstraintSet;
use super::params::{ClassTable, PredicateStrategy};

/// Predicate used when no constraint is given.
pub const ALWAYS_TRUE: &str = "1=1";

/// Columns selected for every record, in the order the executor reads them.
///
/// Missing code components render as `-`, as in partial EC numbers (`3.4.-.-`).
pub const RECORD_COLUMNS: &str = "entry.entryId, \
entry.sequence, \
entry.sequenceLength, \
entry.neff, \
CAST(entry.organismId AS TEXT), \
entry.structHelix, \
entry.structTurn, \
entry.structStrand, \
entry.hasSubstrate, \
entry.hasPTM, \
entry.hasPDB, \
entry.hasDisease, \
(SELECT GROUP_CONCAT(IFNULL(cath_class.cath_1, '-') || '.' || IFNULL(cath_class.cath_2, '-') || '.' || IFNULL(cath_class.cath_3, '-') || '.' || IFNULL(cath_class.cath_4, '-'), ',') FROM cath_class WHERE cath_class.entryId = entry.entryId), \
(SELECT GROUP_CONCAT(IFNULL(enzyme_class.enzyme_1, '-') || '.' || IFNULL(enzyme_class.enzyme_2, '-') || '.' || IFNULL(enzyme_class.enzyme_3, '-') || '.' || IFNULL(enzyme_class.enzyme_4, '-'), ',') FROM enzyme_class WHERE enzyme_class.entryId = entry.entryId), \
(SELECT GROUP_CONCAT(entry_disease.diseaseId, ',') FROM entry_disease WHERE entry_disease.entryId = entry.entryId), \
(SELECT GROUP_CONCAT(entry_cofactor.cofactorId, ',') FROM entry_cofactor WHERE entry_cofactor.entryId = entry.entryId)";

/// A parameterised predicate and its ordered bound values.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledQuery {
    predicate: String,
    params: Vec<SqlValue>,
}

impl CompiledQuery {
    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    pub fn placeholder_count(&self) -> usize {
        self.predicate.matches('?').count()
    }

    /// Whether this query selects every record.
    pub fn is_unconstrained(&self) -> bool {
        self.params.is_empty() && self.predicate == ALWAYS_TRUE
    }

    /// Full select statement over `entry`.
    pub fn sql(&self) -> String {
        format!(
            "SELECT {} FROM entry WHERE ({}) ORDER BY entry.entryId",
            RECORD_COLUMNS, self.predicate
        )
    }

    /// Cache key derived from the exact statement and bound values.
    pub fn cache_key(&self) -> String {
        format!("{}\u{0}{:?}", self.sql(), self.params)
    }
}

/// Compile a constraint set. Fragments are joined with `AND`; an empty set
/// yields an always-true predicate.
pub fn compile(constraints: &ConstraintSet) -> CompiledQuery {
    if constraints.is_empty() {
        warn!("No constraints given, the query will select every record");
        return CompiledQuery {
            predicate: ALWAYS_TRUE.to_string(),
            params: Vec::new(),
        };
    }

    let mut fragments = Vec::with_capacity(constraints.len());
    let mut params = Vec::new();

    for constraint in constraints.iter() {
        let descriptor = constraint.param.descriptor();
        match (descriptor.strategy, &constraint.value) {
            (PredicateStrategy::Hierarchical { table }, TypedValue::Code(code)) => {
                fragments.push(class_fragment(table, code.components().len()));
                params.extend(code.components().iter().map(|c| SqlValue::Integer(*c as i64)));
            }
            (PredicateStrategy::Indirect { template, pattern }, TypedValue::Text(text)) => {
                fragments.push(template.to_string());
                params.push(SqlValue::Text(pattern.wrap(text)));
            }
            (PredicateStrategy::Direct { column, op }, value) => {
                fragments.push(format!("{} {} ?", column, op.as_sql()));
                if let Some(bound) = value.to_sql() {
                    params.push(bound);
                }
            }
            // ConstraintSet values always come from the descriptor's own coercion.
            (strategy, value) => unreachable!("{:?} cannot compile {:?}", strategy, value),
        }
    }

    let query = CompiledQuery {
        predicate: fragments.join(" AND "),
        params,
    };
    debug!(
        constraints = constraints.len(),
        params = query.params.len(),
        "Compiled constraint set"
    );
    query
}

/// Existential subquery over a classification table with `components`
/// equality tests.
fn class_fragment(table: ClassTable, components: usize) -> String {
    let prefix = table.prefix();
    let base = format!(
        "entry.entryId IN (SELECT {p}_class.entryId FROM {p}_class",
        p = prefix
    );
    if components == 0 {
        return format!("{})", base);
    }
    let tests: Vec<String> = (1..=components)
        .map(|i| format!("{p}_class.{p}_{i} = ?", p = prefix, i = i))
        .collect();
    format!("{} WHERE {})", base, tests.join(" AND "))
}
