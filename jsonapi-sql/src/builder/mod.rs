//! Query builder for SQL generation with parameterization.

mod filter;
mod select;
mod types;

pub use select::QueryBuilder;
pub use types::{Filter, Operator, QueryResult, SortDir, SortField, Value};
