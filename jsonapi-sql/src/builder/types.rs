//! Core types for the SQL query builder.

use std::fmt;

use crate::validate::assert_valid_sql_identifier;

/// SQL comparison operators supported by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Operator {
    /// Equal: `=` (or `IS NULL` for [`Value::Null`])
    Eq,
    /// In array: `IN` or `= ANY`
    In,
}

/// SQL parameter values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL `NULL`.
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Text.
    String(String),
    /// Array, bound as one parameter or expanded per dialect.
    Array(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            },
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    /// `ASC`
    Asc,
    /// `DESC`
    Desc,
}

impl SortDir {
    /// SQL keyword for this direction.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Sort field with direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortField {
    /// Column name.
    pub field: String,
    /// Direction.
    pub dir: SortDir,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, dir: SortDir) -> Self {
        Self {
            field: field.into(),
            dir,
        }
    }
}

/// Filter condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Column name.
    pub field: String,
    /// Comparison.
    pub op: Operator,
    /// Bound value; an [`Value::Array`] for [`Operator::In`].
    pub value: Value,
}

impl Filter {
    /// Create a filter condition.
    ///
    /// # Panics
    ///
    /// Panics if the field name is not a valid SQL identifier.
    pub fn new(field: impl Into<String>, op: Operator, value: Value) -> Self {
        let field = field.into();
        assert_valid_sql_identifier(&field, "filter field");
        Self { field, op, value }
    }
}

/// Query result with SQL string and parameters.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "QueryResult must be used to execute the query"]
pub struct QueryResult {
    /// SQL text with placeholders.
    pub sql: String,
    /// Parameters in placeholder order.
    pub params: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::from("red").to_string(), "red");
        assert_eq!(
            Value::Array(vec![Value::from("red"), Value::Bool(true)]).to_string(),
            "[red, true]"
        );
    }

    #[test]
    fn test_sort_dir_sql() {
        assert_eq!(SortDir::Asc.as_sql(), "ASC");
        assert_eq!(SortDir::Desc.as_sql(), "DESC");
    }

    #[test]
    #[should_panic(expected = "Invalid SQL filter field name")]
    fn test_filter_rejects_bad_identifier() {
        let _ = Filter::new("color; DROP", Operator::Eq, Value::Null);
    }
}
