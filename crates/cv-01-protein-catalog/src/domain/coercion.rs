//! Value Coercers
//!
//! Pure conversions from a raw caller value into the typed value a
//! parameter expects. Failures name the parameter and the expected type.

use serde::{Deserialize, Serialize};
use shared_types::SqlValue;

use super::class_code::HierarchicalCode;
use super::params::{Coercion, ParamDescriptor};
use crate::error::CatalogError;

const BOOL_TRUE_VALUES: [&str; 5] = ["true", "t", "yes", "y", "1"];
const BOOL_FALSE_VALUES: [&str; 5] = ["false", "f", "no", "n", "0"];

/// A value as supplied by a caller, before coercion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Integer(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        RawValue::Integer(v as i64)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Float(v)
    }
}

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        RawValue::Bool(v)
    }
}

/// A coerced value, already of the parameter's semantic type.
#[derive(Clone, Debug, PartialEq)]
pub enum TypedValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Code(HierarchicalCode),
}

impl TypedValue {
    /// The bound value for a scalar. Codes expand to several values and are
    /// handled by the compiler.
    pub fn to_sql(&self) -> Option<SqlValue> {
        match self {
            TypedValue::Text(s) => Some(SqlValue::Text(s.clone())),
            TypedValue::Integer(i) => Some(SqlValue::Integer(*i)),
            TypedValue::Float(f) => Some(SqlValue::Real(*f)),
            TypedValue::Bool(b) => Some(SqlValue::Bool(*b)),
            TypedValue::Code(_) => None,
        }
    }
}

fn invalid(descriptor: &ParamDescriptor, reason: impl Into<String>) -> CatalogError {
    CatalogError::Validation {
        parameter: descriptor.name.to_string(),
        reason: reason.into(),
        expected: descriptor.kind().expected().to_string(),
    }
}

/// Coerce `raw` according to the descriptor's rule.
pub fn coerce(descriptor: &ParamDescriptor, raw: &RawValue) -> Result<TypedValue, CatalogError> {
    match descriptor.coercion {
        Coercion::Text => to_text(descriptor, raw).map(TypedValue::Text),
        Coercion::UpperText => to_text(descriptor, raw).map(|s| TypedValue::Text(s.to_uppercase())),
        Coercion::Integer => to_int(descriptor, raw).map(TypedValue::Integer),
        Coercion::Float => to_float(descriptor, raw).map(TypedValue::Float),
        Coercion::Boolean => to_bool(descriptor, raw).map(TypedValue::Bool),
        Coercion::HierarchicalCode => to_code(descriptor, raw).map(TypedValue::Code),
    }
}

fn to_text(descriptor: &ParamDescriptor, raw: &RawValue) -> Result<String, CatalogError> {
    match raw {
        RawValue::Text(s) => Ok(s.clone()),
        RawValue::Integer(i) => Ok(i.to_string()),
        RawValue::Float(_) | RawValue::Bool(_) => Err(invalid(descriptor, "not a string")),
    }
}

fn to_int(descriptor: &ParamDescriptor, raw: &RawValue) -> Result<i64, CatalogError> {
    match raw {
        RawValue::Integer(i) => Ok(*i),
        RawValue::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid(descriptor, format!("'{}' is not an integer", s))),
        RawValue::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Ok(*f as i64)
        }
        RawValue::Float(f) => Err(invalid(descriptor, format!("{} is not an integer", f))),
        RawValue::Bool(_) => Err(invalid(descriptor, "boolean given")),
    }
}

fn to_float(descriptor: &ParamDescriptor, raw: &RawValue) -> Result<f64, CatalogError> {
    let value = match raw {
        RawValue::Float(f) => *f,
        RawValue::Integer(i) => *i as f64,
        RawValue::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(descriptor, format!("'{}' is not a number", s)))?,
        RawValue::Bool(_) => return Err(invalid(descriptor, "boolean given")),
    };
    if !value.is_finite() {
        return Err(invalid(descriptor, "value is not finite"));
    }
    Ok(value)
}

fn to_bool(descriptor: &ParamDescriptor, raw: &RawValue) -> Result<bool, CatalogError> {
    match raw {
        RawValue::Bool(b) => Ok(*b),
        RawValue::Integer(0) => Ok(false),
        RawValue::Integer(1) => Ok(true),
        RawValue::Text(s) => {
            parse_bool(s).ok_or_else(|| invalid(descriptor, format!("'{}' is not a boolean", s)))
        }
        RawValue::Integer(i) => Err(invalid(descriptor, format!("{} is not a boolean", i))),
        RawValue::Float(f) => Err(invalid(descriptor, format!("{} is not a boolean", f))),
    }
}

fn to_code(descriptor: &ParamDescriptor, raw: &RawValue) -> Result<HierarchicalCode, CatalogError> {
    match raw {
        RawValue::Text(s) => s
            .parse::<HierarchicalCode>()
            .map_err(|e| invalid(descriptor, e.to_string())),
        _ => Err(invalid(descriptor, "code must be given as a string")),
    }
}

/// Case-insensitive boolean parsing over the accepted spellings.
pub fn parse_bool(s: &str) -> Option<bool> {
    let lower = s.to_lowercase();
    if BOOL_TRUE_VALUES.contains(&lower.as_str()) {
        Some(true)
    } else if BOOL_FALSE_VALUES.contains(&lower.as_str()) {
        Some(false)
    } else {
        None
    }
}
