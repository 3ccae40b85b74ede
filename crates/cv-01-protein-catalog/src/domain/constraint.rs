//! Constraints and the constraint builder
//!
//! A [`ConstraintSetBuilder`] accumulates raw `(name, value)` pairs. Nothing
//! is validated until [`ConstraintSetBuilder::build`], which checks every
//! name against the registry, coerces every value and returns an immutable
//! [`ConstraintSet`] in canonical parameter order.
//!
//! # Example
//!
//! ```ignore
//! let query = ConstraintSetBuilder::new()
//!     .with("min_length", 5)
//!     .with("max_length", "20")
//!     .compile()?;
//! ```

use std::collections::BTreeMap;

use super::coercion::{coerce, RawValue, TypedValue};
use super::compiler::{compile, CompiledQuery};
use super::params::ProteinParam;
use crate::error::CatalogError;

/// A registered parameter with its coerced value.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub param: ProteinParam,
    pub value: TypedValue,
}

/// Validated constraints in canonical order, at most one per parameter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// The set that matches every record.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate a batch of raw pairs in one step.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RawValue>,
    {
        pairs
            .into_iter()
            .fold(ConstraintSetBuilder::new(), |b, (k, v)| b.with(k, v))
            .build()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn get(&self, param: ProteinParam) -> Option<&TypedValue> {
        self.constraints
            .iter()
            .find(|c| c.param == param)
            .map(|c| &c.value)
    }

    pub fn compile(&self) -> CompiledQuery {
        compile(self)
    }
}

/// Accumulates raw constraints. Supplying a name twice keeps the last value.
#[derive(Clone, Debug, Default)]
pub struct ConstraintSetBuilder {
    known: BTreeMap<ProteinParam, RawValue>,
    unknown: Vec<String>,
}

impl ConstraintSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw constraint.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<RawValue>) -> &mut Self {
        let name = name.into();
        match ProteinParam::lookup(&name) {
            Some(param) => {
                self.known.insert(param, value.into());
            }
            None => {
                if !self.unknown.contains(&name) {
                    self.unknown.push(name);
                }
            }
        }
        self
    }

    /// Builder-style variant of [`add`](Self::add).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.add(name, value);
        self
    }

    /// Validate names, then coerce values in canonical order.
    ///
    /// Unknown names are reported all at once, before any value is looked at.
    pub fn build(self) -> Result<ConstraintSet, CatalogError> {
        if !self.unknown.is_empty() {
            return Err(CatalogError::UnknownParameter {
                names: self.unknown,
            });
        }

        let constraints = self
            .known
            .into_iter()
            .map(|(param, raw)| {
                let value = coerce(&param.descriptor(), &raw)?;
                Ok(Constraint { param, value })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(ConstraintSet { constraints })
    }

    /// Shortcut for `build()?.compile()`.
    pub fn compile(self) -> Result<CompiledQuery, CatalogError> {
        Ok(self.build()?.compile())
    }
}
