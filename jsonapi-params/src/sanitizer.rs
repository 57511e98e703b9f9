//! Filter value validation and casting.

use std::collections::HashMap;

use jsonapi_sql::Value;

use crate::error::SanitizeError;

/// Validates a raw filter value and converts it to the column's type.
///
/// A failure excludes the value (and its whole filter key) from the query.
pub trait ValueSanitizer {
    /// Convert `raw` into a value suitable for `column`.
    fn sanitize(&self, column: &str, raw: &str) -> Result<Value, SanitizeError>;
}

impl<F> ValueSanitizer for F
where
    F: Fn(&str, &str) -> Result<Value, SanitizeError>,
{
    fn sanitize(&self, column: &str, raw: &str) -> Result<Value, SanitizeError> {
        self(column, raw)
    }
}

/// Accepts every value unchanged as [`Value::String`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl ValueSanitizer for Identity {
    fn sanitize(&self, _column: &str, raw: &str) -> Result<Value, SanitizeError> {
        Ok(Value::String(raw.to_string()))
    }
}

/// Type a column's values are cast to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValueKind {
    /// 64-bit signed integer.
    Int,
    /// Finite 64-bit float.
    Float,
    /// `true`/`false`/`1`/`0`, case-insensitive.
    Bool,
    /// Any string.
    String,
}

impl ValueKind {
    /// Parse a kind name (`int`, `float`, `bool`, `string`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "int" | "integer" => Some(Self::Int),
            "float" | "number" => Some(Self::Float),
            "bool" | "boolean" => Some(Self::Bool),
            "string" | "text" => Some(Self::String),
            _ => None,
        }
    }

    fn cast(self, column: &str, raw: &str) -> Result<Value, SanitizeError> {
        match self {
            Self::Int => raw
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| SanitizeError::new(column, raw, format!("expected integer ({e})"))),
            Self::Float => match raw.parse::<f64>() {
                Ok(x) if x.is_finite() => Ok(Value::Float(x)),
                _ => Err(SanitizeError::new(column, raw, "expected finite number")),
            },
            Self::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(Value::Bool(true)),
                "false" | "0" => Ok(Value::Bool(false)),
                _ => Err(SanitizeError::new(column, raw, "expected boolean")),
            },
            Self::String => Ok(Value::String(raw.to_string())),
        }
    }
}

/// Casts values by a per-column type table. Columns missing from the table are rejected.
///
/// ```
/// use jsonapi_params::{ColumnTypes, ValueKind, ValueSanitizer};
/// use jsonapi_sql::Value;
///
/// let types = ColumnTypes::new([("col_doors", ValueKind::Int)]);
/// assert_eq!(types.sanitize("col_doors", "4").unwrap(), Value::Int(4));
/// assert!(types.sanitize("col_doors", "four").is_err());
/// assert!(types.sanitize("col_secret", "x").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnTypes {
    kinds: HashMap<String, ValueKind>,
}

impl ColumnTypes {
    /// Build from `(column, kind)` pairs.
    pub fn new<I, K>(kinds: I) -> Self
    where
        I: IntoIterator<Item = (K, ValueKind)>,
        K: Into<String>,
    {
        Self {
            kinds: kinds.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl ValueSanitizer for ColumnTypes {
    fn sanitize(&self, column: &str, raw: &str) -> Result<Value, SanitizeError> {
        self.kinds
            .get(column)
            .ok_or_else(|| SanitizeError::new(column, raw, "column is not filterable"))?
            .cast(column, raw)
    }
}
