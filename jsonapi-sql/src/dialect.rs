//! Placeholder and membership syntax per database.

use crate::Value;

/// Database-specific rendering of bound parameters.
pub trait Dialect: Clone + Copy {
    /// Placeholder for the parameter at 1-based position `idx`.
    fn placeholder(&self, idx: usize) -> String;

    /// `field` is one of `values`. Parameters start at position `first_idx`.
    ///
    /// Returns the SQL fragment and the parameters it binds.
    fn membership(&self, field: &str, values: &[Value], first_idx: usize) -> (String, Vec<Value>);
}

/// Postgres: `$n` placeholders, membership as `= ANY($n)` with one array parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Postgres;

impl Dialect for Postgres {
    #[inline]
    fn placeholder(&self, idx: usize) -> String {
        format!("${idx}")
    }

    fn membership(&self, field: &str, values: &[Value], first_idx: usize) -> (String, Vec<Value>) {
        (
            format!("{field} = ANY({})", self.placeholder(first_idx)),
            vec![Value::Array(values.to_vec())],
        )
    }
}

/// `SQLite`: `?n` placeholders, membership as `IN (?n, ?n+1, ...)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Sqlite;

impl Dialect for Sqlite {
    #[inline]
    fn placeholder(&self, idx: usize) -> String {
        format!("?{idx}")
    }

    fn membership(&self, field: &str, values: &[Value], first_idx: usize) -> (String, Vec<Value>) {
        // `IN ()` does not parse; an empty set matches nothing
        if values.is_empty() {
            return ("1=0".to_string(), Vec::new());
        }
        let list = (first_idx..first_idx + values.len())
            .map(|idx| self.placeholder(idx))
            .collect::<Vec<_>>()
            .join(", ");
        (format!("{field} IN ({list})"), values.to_vec())
    }
}
