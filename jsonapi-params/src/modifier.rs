//! Deferred query mutations.
//!
//! Parsers never touch a live query. They return a [`QueryModifier`], a
//! function value that replays the parsed clauses onto whatever query the
//! caller hands it later.

use std::fmt;
use std::sync::Arc;

use jsonapi_sql::{Dialect, Operator, QueryBuilder, SortDir, Value};

use crate::error::ParamsError;

/// The query-builder surface a modifier needs.
///
/// Methods take and return the query by value, matching fluent builders.
pub trait Query: Sized {
    /// Set the number of rows to skip.
    fn set_offset(self, offset: u64) -> Self;

    /// Set the maximum number of rows.
    fn set_limit(self, limit: u64) -> Self;

    /// Append an ordering clause after any existing ones.
    fn order_by(self, column: &str, dir: SortDir) -> Self;

    /// Append a `column = value` predicate.
    fn where_eq(self, column: &str, value: Value) -> Self;

    /// Append a `column IN (values)` predicate.
    fn where_in(self, column: &str, values: Vec<Value>) -> Self;
}

impl<D: Dialect> Query for QueryBuilder<D> {
    fn set_offset(self, offset: u64) -> Self {
        self.offset(offset)
    }

    fn set_limit(self, limit: u64) -> Self {
        self.limit(limit)
    }

    fn order_by(self, column: &str, dir: SortDir) -> Self {
        self.sort(column, dir)
    }

    fn where_eq(self, column: &str, value: Value) -> Self {
        self.filter(column, Operator::Eq, value)
    }

    fn where_in(self, column: &str, values: Vec<Value>) -> Self {
        self.filter(column, Operator::In, Value::Array(values))
    }
}

/// A reusable, thread-safe `Q -> Q` transformation.
///
/// Cloning is cheap (shared closure). Applying the same modifier to two equal
/// queries yields two equal queries.
///
/// ```
/// use jsonapi_params::{Query, QueryModifier};
/// use jsonapi_sql::{Postgres, QueryBuilder, SortDir, postgres};
///
/// type Pg = QueryBuilder<Postgres>;
/// let order = QueryModifier::new(|q: Pg| q.order_by("id", SortDir::Asc));
/// let page = QueryModifier::new(|q: Pg| q.set_limit(10));
/// let both = order.then(page);
///
/// let sql = both.apply(postgres("cars")).build().sql;
/// assert_eq!(sql, "SELECT * FROM cars ORDER BY id ASC LIMIT 10");
/// ```
pub struct QueryModifier<Q> {
    apply: Arc<dyn Fn(Q) -> Q + Send + Sync>,
}

impl<Q: 'static> QueryModifier<Q> {
    /// Wrap a function as a modifier.
    pub fn new(f: impl Fn(Q) -> Q + Send + Sync + 'static) -> Self {
        Self { apply: Arc::new(f) }
    }

    /// A modifier that returns the query unchanged.
    pub fn noop() -> Self {
        Self::new(|query| query)
    }

    /// Run `self`, then `next`.
    pub fn then(self, next: Self) -> Self {
        let first = self.apply;
        let second = next.apply;
        Self::new(move |query| second(first(query)))
    }
}

impl<Q> QueryModifier<Q> {
    /// Apply the modifier to a query.
    #[inline]
    pub fn apply(&self, query: Q) -> Q {
        (self.apply)(query)
    }
}

impl<Q> Clone for QueryModifier<Q> {
    fn clone(&self) -> Self {
        Self {
            apply: Arc::clone(&self.apply),
        }
    }
}

impl<Q: 'static> Default for QueryModifier<Q> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<Q> fmt::Debug for QueryModifier<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryModifier").finish_non_exhaustive()
    }
}

/// A modifier together with the error describing what was left out of it.
///
/// Sorting and filtering keep every valid clause even when some parameters are
/// rejected, so the caller gets both.
pub struct Parsed<Q> {
    /// Clauses built from the valid parameters.
    pub modifier: QueryModifier<Q>,
    /// Rejected parameters, if any.
    pub error: Option<ParamsError>,
}

impl<Q> Parsed<Q> {
    /// Both parts.
    pub fn into_parts(self) -> (QueryModifier<Q>, Option<ParamsError>) {
        (self.modifier, self.error)
    }

    /// The modifier if nothing was rejected, the error otherwise.
    pub fn into_result(self) -> Result<QueryModifier<Q>, ParamsError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.modifier),
        }
    }
}

impl<Q> fmt::Debug for Parsed<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parsed")
            .field("modifier", &self.modifier)
            .field("error", &self.error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, Recorder};
    use jsonapi_sql::postgres;

    #[test]
    fn test_noop_leaves_query_unchanged() {
        let query = QueryModifier::noop().apply(Recorder::default());
        assert!(query.calls.is_empty());
    }

    #[test]
    fn test_then_applies_in_order() {
        let a = QueryModifier::new(|q: Recorder| q.set_limit(1));
        let b = QueryModifier::new(|q: Recorder| q.set_offset(2));
        let query = a.then(b).apply(Recorder::default());
        assert_eq!(query.calls, vec![Call::Limit(1), Call::Offset(2)]);
    }

    #[test]
    fn test_modifier_is_reusable() {
        let m = QueryModifier::new(|q: Recorder| q.order_by("col", SortDir::Desc));
        let first = m.apply(Recorder::default());
        let second = m.clone().apply(Recorder::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_query_builder_impl() {
        let sql = postgres("cars")
            .where_eq("color", Value::from("red"))
            .where_in("doors", vec![Value::Int(2), Value::Int(4)])
            .order_by("year", SortDir::Desc)
            .set_limit(10)
            .set_offset(0)
            .build()
            .sql;
        assert_eq!(
            sql,
            "SELECT * FROM cars WHERE color = $1 AND doors = ANY($2) ORDER BY year DESC LIMIT 10 OFFSET 0"
        );
    }

    #[test]
    fn test_parsed_into_result() {
        let ok: Parsed<Recorder> = Parsed {
            modifier: QueryModifier::noop(),
            error: None,
        };
        assert!(ok.into_result().is_ok());

        let err: Parsed<Recorder> = Parsed {
            modifier: QueryModifier::noop(),
            error: Some(ParamsError::InvalidSort {
                fields: vec!["x".into()],
            }),
        };
        let (modifier, error) = err.into_parts();
        assert!(error.is_some());
        assert!(modifier.apply(Recorder::default()).calls.is_empty());
    }
}
