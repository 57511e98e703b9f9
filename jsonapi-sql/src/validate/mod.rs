//! SQL identifier validation.
//!
//! Column and table names reach the generated SQL verbatim, so every
//! identifier the builder accepts goes through [`is_valid_sql_identifier`].

mod column;

pub use column::{assert_valid_sql_identifier, is_valid_sql_identifier};
