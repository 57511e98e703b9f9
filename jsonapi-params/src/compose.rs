//! Sorting, pagination and filtering in one call.

use crate::config::Config;
use crate::error::ParamsError;
use crate::filtering::filter_from_params;
use crate::mapper::ColumnMapper;
use crate::modifier::{Query, QueryModifier};
use crate::pagination::pagination_from_params;
use crate::params::QueryParams;
use crate::sanitizer::ValueSanitizer;
use crate::sorting::sorting_from_params;

/// Build one modifier for sorting, filtering and pagination.
///
/// The parsers run in the order sorting, pagination, filtering, and the first
/// error is returned without running the rest. Unlike the individual
/// parsers, no partial modifier is returned on error.
///
/// The resulting modifier orders first, then filters, then paginates.
///
/// ```
/// use jsonapi_params::{Config, Identity, MapMapper, QueryParams, filter_paging_sorting_from_params};
///
/// let mapper = MapMapper::new([("name", "col_name"), ("color", "col_color")]);
/// let params = QueryParams::parse("sort=-name&filter[color]=red&page[number]=1&page[size]=5");
/// let modifier = filter_paging_sorting_from_params(&params, &Config::default(), &mapper, &Identity).unwrap();
///
/// let query = modifier.apply(jsonapi_sql::postgres("cars")).build();
/// assert_eq!(
///     query.sql,
///     "SELECT * FROM cars WHERE col_color = $1 ORDER BY col_name DESC LIMIT 5 OFFSET 4"
/// );
/// ```
pub fn filter_paging_sorting_from_params<Q>(
    params: &QueryParams,
    config: &Config,
    mapper: &impl ColumnMapper,
    sanitizer: &impl ValueSanitizer,
) -> Result<QueryModifier<Q>, ParamsError>
where
    Q: Query + 'static,
{
    let sorting = sorting_from_params(params, mapper)
        .into_result()
        .inspect_err(|err| rejected("sorting", err))?;
    let pagination =
        pagination_from_params(params, config).inspect_err(|err| rejected("pagination", err))?;
    let filtering = filter_from_params(params, mapper, sanitizer)
        .into_result()
        .inspect_err(|err| rejected("filtering", err))?;

    Ok(sorting.then(filtering).then(pagination))
}

fn rejected(stage: &str, err: &ParamsError) {
    crate::log::debug!("request rejected at {stage}: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::MapMapper;
    use crate::sanitizer::Identity;
    use crate::testing::{Call, Recorder, params};
    use jsonapi_sql::{SortDir, Value};

    fn mapper() -> MapMapper {
        MapMapper::new([("name", "col_name"), ("color", "col_color")])
    }

    fn compose(pairs: &[(&str, &str)]) -> Result<QueryModifier<Recorder>, ParamsError> {
        filter_paging_sorting_from_params(&params(pairs), &Config::default(), &mapper(), &Identity)
    }

    #[test]
    fn test_application_order() {
        let modifier = compose(&[
            ("page[number]", "0"),
            ("page[size]", "10"),
            ("filter[color]", "red"),
            ("sort", "name"),
        ])
        .unwrap();
        let query = modifier.apply(Recorder::default());
        assert_eq!(
            query.calls,
            vec![
                Call::Order("col_name".into(), SortDir::Asc),
                Call::Eq("col_color".into(), Value::String("red".into())),
                Call::Offset(0),
                Call::Limit(10),
            ]
        );
    }

    #[test]
    fn test_nothing_requested_is_noop() {
        let query = compose(&[]).unwrap().apply(Recorder::default());
        assert!(query.calls.is_empty());
    }

    #[test]
    fn test_sort_error_hides_later_errors() {
        let err = compose(&[
            ("sort", "bogus"),
            ("page[number]", "x"),
            ("filter[bad]", "1"),
        ])
        .unwrap_err();
        assert!(matches!(err, ParamsError::InvalidSort { .. }));
    }

    #[test]
    fn test_pagination_error_before_filter_error() {
        let err = compose(&[("page[number]", "1"), ("page[size]", "0"), ("filter[bad]", "1")])
            .unwrap_err();
        assert!(matches!(err, ParamsError::PageSizeOutOfBounds { size: 0, .. }));
    }

    #[test]
    fn test_filter_error_drops_whole_modifier() {
        let err = compose(&[("filter[color]", "red"), ("filter[bad]", "x")]).unwrap_err();
        assert_eq!(
            err,
            ParamsError::InvalidFilter {
                fields: vec!["bad".into()]
            }
        );
    }
}
