// =============================================================================
// CRATE-LEVEL QUALITY LINTS
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // Code items in docs
#![allow(clippy::module_name_repetitions)] // Type names matching module - acceptable
#![allow(clippy::return_self_not_must_use)] // Builder pattern methods return Self by design
#![allow(clippy::must_use_candidate)] // Builder methods - fluent API doesn't need must_use
#![allow(clippy::format_push_string)] // String building style preference

//! # jsonapi-sql - parameterized SELECT builder
//!
//! A small SQL builder that renders `SELECT` statements with `WHERE`,
//! `ORDER BY`, `LIMIT` and `OFFSET` for Postgres and `SQLite`. Values never
//! appear in the SQL text; they are returned as positional parameters.
//!
//! ```
//! use jsonapi_sql::{Operator, SortDir, Value, postgres};
//!
//! let result = postgres("cars")
//!     .fields(&["id", "color"])
//!     .filter("color", Operator::In, Value::Array(vec!["red".into(), "blue".into()]))
//!     .sort("id", SortDir::Desc)
//!     .limit(10)
//!     .offset(19)
//!     .build();
//!
//! assert_eq!(
//!     result.sql,
//!     "SELECT id, color FROM cars WHERE color = ANY($1) ORDER BY id DESC LIMIT 10 OFFSET 19"
//! );
//! assert_eq!(result.params.len(), 1);
//! ```
//!
//! ## `SQLite` Dialect
//!
//! ```
//! use jsonapi_sql::{Operator, Value, sqlite};
//!
//! let result = sqlite("cars")
//!     .filter("color", Operator::In, Value::Array(vec!["red".into(), "blue".into()]))
//!     .build();
//!
//! assert_eq!(result.sql, "SELECT * FROM cars WHERE color IN (?1, ?2)");
//! ```

mod builder;
mod dialect;
mod validate;

pub use builder::{Filter, Operator, QueryBuilder, QueryResult, SortDir, SortField, Value};
pub use dialect::{Dialect, Postgres, Sqlite};
pub use validate::{assert_valid_sql_identifier, is_valid_sql_identifier};

/// Build a query for Postgres.
#[must_use]
pub fn postgres(table: &str) -> QueryBuilder<Postgres> {
    QueryBuilder::new(Postgres, table)
}

/// Build a query for `SQLite`.
#[must_use]
pub fn sqlite(table: &str) -> QueryBuilder<Sqlite> {
    QueryBuilder::new(Sqlite, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all() {
        let result = postgres("cars").build();
        assert_eq!(result.sql, "SELECT * FROM cars");
        assert!(result.params.is_empty());
    }

    #[test]
    fn test_filters_joined_with_and() {
        let result = postgres("cars")
            .filter("color", Operator::Eq, Value::from("red"))
            .filter("doors", Operator::Eq, Value::Int(4))
            .build();

        assert_eq!(
            result.sql,
            "SELECT * FROM cars WHERE color = $1 AND doors = $2"
        );
        assert_eq!(result.params, vec![Value::from("red"), Value::Int(4)]);
    }

    #[test]
    fn test_sqlite_in_then_eq_param_numbering() {
        let result = sqlite("cars")
            .filter(
                "color",
                Operator::In,
                Value::Array(vec![Value::from("red"), Value::from("blue")]),
            )
            .filter("doors", Operator::Eq, Value::Int(4))
            .build();

        assert_eq!(
            result.sql,
            "SELECT * FROM cars WHERE color IN (?1, ?2) AND doors = ?3"
        );
        assert_eq!(result.params.len(), 3);
    }

    #[test]
    fn test_sorts_keep_insertion_order() {
        let result = postgres("cars")
            .sort("make", SortDir::Desc)
            .sort("id", SortDir::Asc)
            .build();
        assert_eq!(result.sql, "SELECT * FROM cars ORDER BY make DESC, id ASC");
    }

    #[test]
    fn test_limit_offset_last_call_wins() {
        let result = postgres("cars").limit(5).offset(3).limit(10).offset(0).build();
        assert_eq!(result.sql, "SELECT * FROM cars LIMIT 10 OFFSET 0");
    }

    #[test]
    fn test_builders_compare_structurally() {
        let a = postgres("cars").sort("id", SortDir::Asc).limit(2);
        let b = postgres("cars").sort("id", SortDir::Asc).limit(2);
        assert_eq!(a, b);
        assert_ne!(a, postgres("cars").sort("id", SortDir::Desc).limit(2));
    }

    #[test]
    #[should_panic(expected = "Invalid SQL table name")]
    fn test_invalid_table_panics() {
        let _ = postgres("cars; DROP TABLE cars");
    }
}
