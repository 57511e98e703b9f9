//! `SELECT` statements for list endpoints.

use std::fmt::Write as _;

use crate::dialect::Dialect;
use crate::validate::assert_valid_sql_identifier;

use super::filter::render_condition;
use super::types::{Filter, Operator, QueryResult, SortDir, SortField, Value};

/// Builds one `SELECT ... FROM table` with optional `WHERE`, `ORDER BY`,
/// `LIMIT` and `OFFSET`.
///
/// Every method takes and returns the builder, so calls chain. Builders that
/// received the same calls in the same order compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder<D: Dialect> {
    dialect: D,
    table: String,
    columns: Vec<String>,
    filters: Vec<Filter>,
    sorts: Vec<SortField>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl<D: Dialect> QueryBuilder<D> {
    /// Start a query on `table`.
    ///
    /// # Panics
    ///
    /// Panics if `table` is not a valid SQL identifier.
    pub fn new(dialect: D, table: impl Into<String>) -> Self {
        let table = table.into();
        assert_valid_sql_identifier(&table, "table");
        Self {
            dialect,
            table,
            columns: Vec::new(),
            filters: Vec::new(),
            sorts: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Select these columns instead of `*`.
    ///
    /// # Panics
    ///
    /// Panics if a column is not a valid SQL identifier.
    pub fn fields(mut self, columns: &[&str]) -> Self {
        self.columns = columns
            .iter()
            .map(|column| {
                assert_valid_sql_identifier(column, "field");
                (*column).to_string()
            })
            .collect();
        self
    }

    /// Add a condition. Conditions are joined with `AND`.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a valid SQL identifier.
    pub fn filter(mut self, field: impl Into<String>, op: Operator, value: Value) -> Self {
        self.filters.push(Filter::new(field, op, value));
        self
    }

    /// Add an ordering column after the existing ones.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a valid SQL identifier.
    pub fn sort(mut self, field: impl Into<String>, dir: SortDir) -> Self {
        let field = field.into();
        assert_valid_sql_identifier(&field, "sort field");
        self.sorts.push(SortField::new(field, dir));
        self
    }

    /// Set `LIMIT`. The last call wins.
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set `OFFSET`. The last call wins.
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// `LIMIT` set so far.
    pub const fn current_limit(&self) -> Option<u64> {
        self.limit
    }

    /// `OFFSET` set so far.
    pub const fn current_offset(&self) -> Option<u64> {
        self.offset
    }

    /// Render the statement. Values are returned as parameters, never inlined.
    pub fn build(self) -> QueryResult {
        let mut params = Vec::new();
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };
        let mut sql = format!("SELECT {columns} FROM {}", self.table);

        let conditions: Vec<String> = self
            .filters
            .iter()
            .map(|filter| render_condition(&self.dialect, filter, &mut params))
            .collect();
        if !conditions.is_empty() {
            let _ = write!(sql, " WHERE {}", conditions.join(" AND "));
        }

        let order: Vec<String> = self
            .sorts
            .iter()
            .map(|sort| format!("{} {}", sort.field, sort.dir.as_sql()))
            .collect();
        if !order.is_empty() {
            let _ = write!(sql, " ORDER BY {}", order.join(", "));
        }

        if let Some(limit) = self.limit {
            let _ = write!(sql, " LIMIT {limit}");
        }
        if let Some(offset) = self.offset {
            let _ = write!(sql, " OFFSET {offset}");
        }

        QueryResult { sql, params }
    }
}
