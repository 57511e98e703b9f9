//! `filter[field]=value,value` handling.

use jsonapi_sql::Value;

use crate::constants::{FILTER_PREFIX, FILTER_SUFFIX};
use crate::error::ParamsError;
use crate::mapper::{ColumnMapper, checked_column};
use crate::modifier::{Parsed, Query, QueryModifier};
use crate::params::QueryParams;
use crate::sanitizer::ValueSanitizer;

/// Sanitized filter values per column.
///
/// Columns keep the order their `filter[...]` key first appeared in the
/// request; values keep request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFilter {
    entries: Vec<(String, Vec<Value>)>,
}

impl ParsedFilter {
    /// Values for a column.
    pub fn get(&self, column: &str) -> Option<&[Value]> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, values)| values.as_slice())
    }

    /// Iterate over `(column, values)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> + '_ {
        self.entries
            .iter()
            .map(|(column, values)| (column.as_str(), values.as_slice()))
    }

    /// Number of filtered columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no column is filtered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Two fields mapping to one column: the later key replaces the values.
    fn insert(&mut self, column: String, values: Vec<Value>) {
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((column, values)),
        }
    }
}

/// Field name inside `filter[...]`, if `key` is a filter key.
fn filter_field(key: &str) -> Option<&str> {
    key.strip_prefix(FILTER_PREFIX)?.strip_suffix(FILTER_SUFFIX)
}

/// Collect the sanitized filters of a request and the rejected field names.
///
/// A field is rejected when the mapper does not know it, when it maps to a
/// name that is not a SQL identifier, or when any of its comma-separated
/// values fails sanitization. Rejection drops every value of
/// that field.
pub fn parse_filter(
    params: &QueryParams,
    mapper: &impl ColumnMapper,
    sanitizer: &impl ValueSanitizer,
) -> (ParsedFilter, Vec<String>) {
    let mut filter = ParsedFilter::default();
    let mut invalid = Vec::new();

    for (key, raw_values) in params.iter() {
        let Some(field) = filter_field(key) else {
            continue;
        };
        let Some(column) = checked_column(mapper, field) else {
            invalid.push(field.to_string());
            continue;
        };

        let values: Result<Vec<Value>, _> = raw_values
            .iter()
            .flat_map(|raw| raw.split(','))
            .map(|token| sanitizer.sanitize(&column, token))
            .collect();

        match values {
            Ok(values) => filter.insert(column, values),
            Err(err) => {
                crate::log::debug!("filter value rejected for {field}: {err}");
                invalid.push(field.to_string());
            },
        }
    }

    (filter, invalid)
}

/// Build the filtering modifier for a request.
///
/// One value becomes an equality predicate, several become a membership
/// predicate. Valid fields are applied even when others were rejected.
///
/// ```
/// use jsonapi_params::{Identity, MapMapper, QueryParams, filter_from_params};
///
/// let mapper = MapMapper::new([("color", "col_color")]);
/// let params = QueryParams::parse("filter[color]=red,blue");
/// let parsed = filter_from_params(&params, &mapper, &Identity);
///
/// let query = parsed.modifier.apply(jsonapi_sql::postgres("cars")).build();
/// assert_eq!(query.sql, "SELECT * FROM cars WHERE col_color = ANY($1)");
/// ```
pub fn filter_from_params<Q>(
    params: &QueryParams,
    mapper: &impl ColumnMapper,
    sanitizer: &impl ValueSanitizer,
) -> Parsed<Q>
where
    Q: Query + 'static,
{
    let (filter, invalid) = parse_filter(params, mapper, sanitizer);
    let error = if invalid.is_empty() {
        None
    } else {
        crate::log::debug!("filter fields rejected: {}", invalid.join(","));
        Some(ParamsError::InvalidFilter { fields: invalid })
    };

    let modifier = if filter.is_empty() {
        QueryModifier::noop()
    } else {
        QueryModifier::new(move |query: Q| {
            filter
                .iter()
                .fold(query, |query, (column, values)| match values {
                    [] => query,
                    [value] => query.where_eq(column, value.clone()),
                    _ => query.where_in(column, values.to_vec()),
                })
        })
    };

    Parsed { modifier, error }
}
