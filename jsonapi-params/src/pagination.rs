//! `page[number]` / `page[size]` handling.

use crate::config::Config;
use crate::constants::{MAX_OFFSET, PARAM_PAGE_NUMBER, PARAM_PAGE_SIZE};
use crate::error::ParamsError;
use crate::modifier::{Query, QueryModifier};
use crate::params::QueryParams;

/// Offset and limit computed from the page parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Rows to skip.
    pub offset: u64,
    /// Rows to return.
    pub limit: u64,
}

impl Page {
    /// Compute the page from the request.
    ///
    /// Returns `Ok(None)` when either parameter is missing or empty.
    ///
    /// The offset of page `n > 0` is `size * n - 1`; page `0` starts at `0`.
    /// A page whose offset would exceed [`MAX_OFFSET`] is rejected.
    ///
    /// ```
    /// use jsonapi_params::{Config, Page, QueryParams};
    ///
    /// let params = QueryParams::parse("page[number]=2&page[size]=10");
    /// let page = Page::from_params(&params, &Config::default()).unwrap();
    /// assert_eq!(page, Some(Page { offset: 19, limit: 10 }));
    /// ```
    pub fn from_params(params: &QueryParams, config: &Config) -> Result<Option<Self>, ParamsError> {
        let (Some(raw_number), Some(raw_size)) = (
            non_empty(params, PARAM_PAGE_NUMBER),
            non_empty(params, PARAM_PAGE_SIZE),
        ) else {
            return Ok(None);
        };

        let number = raw_number
            .parse::<u64>()
            .map_err(|source| ParamsError::InvalidNumber {
                param: PARAM_PAGE_NUMBER,
                value: raw_number.to_string(),
                source,
            })?;
        let size = raw_size
            .parse::<i64>()
            .map_err(|source| ParamsError::InvalidNumber {
                param: PARAM_PAGE_SIZE,
                value: raw_size.to_string(),
                source,
            })?;

        let (min, max) = (config.min_page_size(), config.max_page_size());
        let Some(limit) = u64::try_from(size)
            .ok()
            .filter(|size| (min..=max).contains(size))
        else {
            return Err(ParamsError::PageSizeOutOfBounds { size, min, max });
        };

        let offset = if number == 0 {
            0
        } else {
            limit
                .checked_mul(number)
                .map(|end| end.saturating_sub(1))
                .filter(|offset| *offset <= MAX_OFFSET)
                .ok_or(ParamsError::PageNumberOutOfRange { number, size: limit })?
        };
        Ok(Some(Self { offset, limit }))
    }
}

/// Build the pagination modifier for a request.
///
/// A missing or empty parameter gives a no-op modifier. Invalid numbers and
/// out-of-bounds sizes give an error and no modifier.
pub fn pagination_from_params<Q>(params: &QueryParams, config: &Config) -> Result<QueryModifier<Q>, ParamsError>
where
    Q: Query + 'static,
{
    let page = Page::from_params(params, config).inspect_err(|err| {
        crate::log::debug!("pagination rejected: {err}");
    })?;

    Ok(match page {
        Some(Page { offset, limit }) => {
            QueryModifier::new(move |query: Q| query.set_offset(offset).set_limit(limit))
        },
        None => QueryModifier::noop(),
    })
}

fn non_empty<'a>(params: &'a QueryParams, name: &str) -> Option<&'a str> {
    params.get(name).filter(|v| !v.is_empty())
}
