//! `sort=-field,other` handling.

use jsonapi_sql::{SortDir, SortField};

use crate::constants::PARAM_SORT;
use crate::error::ParamsError;
use crate::mapper::{ColumnMapper, checked_column};
use crate::modifier::{Parsed, Query, QueryModifier};
use crate::params::QueryParams;

/// Split a `sort` value into mapped sort fields and rejected field names.
///
/// Tokens are separated by `,`. A leading `-` sorts descending. Empty tokens
/// are skipped; tokens are not trimmed, so `" name"` is looked up verbatim.
///
/// ```
/// use jsonapi_params::{MapMapper, parse_sort};
/// use jsonapi_sql::SortDir;
///
/// let mapper = MapMapper::new([("name", "col_name")]);
/// let (fields, invalid) = parse_sort("-name,bogus", &mapper);
/// assert_eq!(fields[0].field, "col_name");
/// assert_eq!(fields[0].dir, SortDir::Desc);
/// assert_eq!(invalid, ["bogus"]);
/// ```
pub fn parse_sort(raw: &str, mapper: &impl ColumnMapper) -> (Vec<SortField>, Vec<String>) {
    let mut fields = Vec::new();
    let mut invalid = Vec::new();

    for token in raw.split(',').filter(|t| !t.is_empty()) {
        let (name, dir) = match token.strip_prefix('-') {
            Some(name) => (name, SortDir::Desc),
            None => (token, SortDir::Asc),
        };
        match checked_column(mapper, name) {
            Some(column) => fields.push(SortField::new(column, dir)),
            None => invalid.push(name.to_string()),
        }
    }

    (fields, invalid)
}

/// Build the sorting modifier for a request.
///
/// The modifier orders by every mapped field, even when some fields were
/// rejected. Rejected fields are reported in [`Parsed::error`].
pub fn sorting_from_params<Q>(params: &QueryParams, mapper: &impl ColumnMapper) -> Parsed<Q>
where
    Q: Query + 'static,
{
    let Some(raw) = params.get(PARAM_SORT).filter(|s| !s.is_empty()) else {
        return Parsed {
            modifier: QueryModifier::noop(),
            error: None,
        };
    };

    let (fields, invalid) = parse_sort(raw, mapper);
    let error = if invalid.is_empty() {
        None
    } else {
        crate::log::debug!("sort fields rejected: {}", invalid.join(","));
        Some(ParamsError::InvalidSort { fields: invalid })
    };

    let modifier = QueryModifier::new(move |query: Q| {
        fields
            .iter()
            .fold(query, |query, sort| query.order_by(&sort.field, sort.dir))
    });

    Parsed { modifier, error }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::MapMapper;
    use crate::testing::{Call, Recorder, params};

    fn mapper() -> MapMapper {
        MapMapper::new([("name", "col_name"), ("age", "col_age")])
    }

    fn order(column: &str, dir: SortDir) -> Call {
        Call::Order(column.to_string(), dir)
    }

    #[test]
    fn test_directions_and_order() {
        let parsed = sorting_from_params(&params(&[("sort", "-name,age")]), &mapper());
        assert!(parsed.error.is_none());
        let query = parsed.modifier.apply(Recorder::default());
        assert_eq!(
            query.calls,
            vec![order("col_name", SortDir::Desc), order("col_age", SortDir::Asc)]
        );
    }

    #[test]
    fn test_invalid_field_keeps_valid_ones() {
        let parsed = sorting_from_params(&params(&[("sort", "-name,bogus")]), &mapper());
        let (modifier, error) = parsed.into_parts();
        assert_eq!(
            error,
            Some(ParamsError::InvalidSort {
                fields: vec!["bogus".into()]
            })
        );
        let query = modifier.apply(Recorder::default());
        assert_eq!(query.calls, vec![order("col_name", SortDir::Desc)]);
    }

    #[test]
    fn test_descending_invalid_reported_without_dash() {
        let (_, invalid) = parse_sort("-secret", &mapper());
        assert_eq!(invalid, ["secret"]);
    }

    #[test]
    fn test_absent_or_empty_is_noop() {
        for p in [params(&[]), params(&[("sort", "")])] {
            let parsed = sorting_from_params::<Recorder>(&p, &mapper());
            assert!(parsed.error.is_none());
            assert!(parsed.modifier.apply(Recorder::default()).calls.is_empty());
        }
    }

    #[test]
    fn test_empty_tokens_skipped() {
        let (fields, invalid) = parse_sort(",name,,-age,", &mapper());
        assert_eq!(
            fields,
            vec![
                SortField::new("col_name", SortDir::Asc),
                SortField::new("col_age", SortDir::Desc)
            ]
        );
        assert!(invalid.is_empty());
    }

    #[test]
    fn test_tokens_not_trimmed() {
        let (fields, invalid) = parse_sort("name, age", &mapper());
        assert_eq!(fields.len(), 1);
        assert_eq!(invalid, [" age"]);
    }

    #[test]
    fn test_lone_dash_is_invalid() {
        let (fields, invalid) = parse_sort("-", &mapper());
        assert!(fields.is_empty());
        assert_eq!(invalid, [""]);
    }

    #[test]
    fn test_non_identifier_column_is_invalid() {
        let qualified = MapMapper::new([("name", "cars.name"), ("age", "col_age")]);
        let parsed = sorting_from_params(&params(&[("sort", "name,-age")]), &qualified);
        let (modifier, error) = parsed.into_parts();
        assert_eq!(
            error,
            Some(ParamsError::InvalidSort {
                fields: vec!["name".into()]
            })
        );
        let query = modifier.apply(Recorder::default());
        assert_eq!(query.calls, vec![order("col_age", SortDir::Desc)]);
    }

    #[test]
    fn test_repeated_field_is_kept() {
        let (fields, _) = parse_sort("name,-name", &mapper());
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_only_first_sort_value_used() {
        let p = params(&[("sort", "name"), ("sort", "age")]);
        let query = sorting_from_params(&p, &mapper()).modifier.apply(Recorder::default());
        assert_eq!(query.calls, vec![order("col_name", SortDir::Asc)]);
    }
}
