// =============================================================================
// CRATE-LEVEL QUALITY LINTS
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // Code in docs
#![allow(clippy::must_use_candidate)] // Not all returned values need must_use
#![allow(clippy::missing_errors_doc)] // # Errors sections - doc-heavy
#![allow(clippy::module_name_repetitions)] // ParamsError in error, etc.

//! jsonapi-params - JSON:API query parameters to validated query modifiers
//!
//! # Overview
//!
//! Clients page, sort and filter collections with bracket-style parameters:
//!
//! ```text
//! GET /cars?page[number]=2&page[size]=10&sort=-year,make&filter[color]=red,blue
//! ```
//!
//! This crate turns those parameters into a [`QueryModifier`], a deferred
//! `Q -> Q` function the caller applies to its own query builder. Client field
//! names go through a [`ColumnMapper`] before they can name a column, and
//! filter values go through a [`ValueSanitizer`] before they can reach a
//! predicate. Page sizes are checked against a [`Config`].
//!
//! # Example
//!
//! ```
//! use jsonapi_params::{
//!     ColumnTypes, Config, MapMapper, QueryParams, ValueKind, filter_paging_sorting_from_params,
//! };
//! use jsonapi_sql::Value;
//!
//! let config = Config::default();
//! let mapper = MapMapper::new([("year", "model_year"), ("color", "paint")]);
//! let types = ColumnTypes::new([("paint", ValueKind::String), ("model_year", ValueKind::Int)]);
//!
//! let params = QueryParams::from_path("/cars?page[number]=2&page[size]=10&sort=-year&filter[color]=red,blue");
//! let modifier = filter_paging_sorting_from_params(&params, &config, &mapper, &types).unwrap();
//!
//! let query = modifier.apply(jsonapi_sql::postgres("cars")).build();
//! assert_eq!(
//!     query.sql,
//!     "SELECT * FROM cars WHERE paint = ANY($1) ORDER BY model_year DESC LIMIT 10 OFFSET 19"
//! );
//! assert_eq!(query.params, vec![Value::Array(vec!["red".into(), "blue".into()])]);
//! ```
//!
//! # Partial results
//!
//! [`sorting_from_params`] and [`filter_from_params`] return a [`Parsed`]:
//! the modifier holds every valid clause and the error lists the rejected
//! fields. [`pagination_from_params`] and the combined
//! [`filter_paging_sorting_from_params`] return a plain `Result`.
//!
//! # Targets
//!
//! Any type implementing [`Query`] can be modified. `jsonapi_sql::QueryBuilder`
//! implements it for both the Postgres and `SQLite` dialects.

pub mod constants;
pub mod env;
pub mod log;

mod compose;
mod config;
mod error;
mod filtering;
mod mapper;
mod modifier;
mod pagination;
mod params;
mod sanitizer;
mod sorting;

#[cfg(test)]
mod testing;

pub use compose::filter_paging_sorting_from_params;
pub use config::Config;
pub use error::{ConfigError, ParamsError, SanitizeError};
pub use filtering::{ParsedFilter, filter_from_params, parse_filter};
pub use mapper::{ColumnMapper, MapMapper};
pub use modifier::{Parsed, Query, QueryModifier};
pub use pagination::{Page, pagination_from_params};
pub use params::{DecodeError, QueryParams, url_decode};
pub use sanitizer::{ColumnTypes, Identity, ValueKind, ValueSanitizer};
pub use sorting::{parse_sort, sorting_from_params};

/// Commonly used types and functions.
///
/// ```
/// use jsonapi_params::prelude::*;
///
/// let params = QueryParams::parse("sort=name");
/// let mapper = MapMapper::new([("name", "name")]);
/// let parsed = sorting_from_params::<jsonapi_sql::QueryBuilder<jsonapi_sql::Postgres>>(&params, &mapper);
/// assert!(parsed.error.is_none());
/// ```
pub mod prelude {
    pub use crate::log;
    pub use crate::{
        ColumnMapper, ColumnTypes, Config, Identity, MapMapper, Parsed, ParamsError, Query,
        QueryModifier, QueryParams, ValueKind, ValueSanitizer,
    };
    pub use crate::{
        filter_from_params, filter_paging_sorting_from_params, pagination_from_params,
        sorting_from_params,
    };
}

// ============================================================================
// API Contract Tests (compile-time assertions)
// ============================================================================
