//! Centralized constants for the jsonapi-params crate.
//!
//! # Environment Variables
//!
//! | Variable        | Default | Description                  |
//! |-----------------|---------|------------------------------|
//! | `MIN_PAGE_SIZE` | 1       | Smallest accepted `page[size]` |
//! | `MAX_PAGE_SIZE` | 100     | Largest accepted `page[size]`  |

// ============================================================================
// TIME CONSTANTS
// ============================================================================

/// Seconds in a day (24 * 60 * 60).
pub const SECONDS_PER_DAY: u64 = 86400;

/// Seconds in an hour (60 * 60).
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Seconds in a minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Environment variable holding the minimum page size.
pub const ENV_MIN_PAGE_SIZE: &str = "MIN_PAGE_SIZE";

/// Environment variable holding the maximum page size.
pub const ENV_MAX_PAGE_SIZE: &str = "MAX_PAGE_SIZE";

/// Minimum page size when `MIN_PAGE_SIZE` is unset.
pub const DEFAULT_MIN_PAGE_SIZE: u64 = 1;

/// Maximum page size when `MAX_PAGE_SIZE` is unset.
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 100;

// ============================================================================
// QUERY PARAMETER NAMES
// ============================================================================

/// Page number parameter.
pub const PARAM_PAGE_NUMBER: &str = "page[number]";

/// Page size parameter.
pub const PARAM_PAGE_SIZE: &str = "page[size]";

/// Sort parameter.
pub const PARAM_SORT: &str = "sort";

/// Prefix of filter parameters (`filter[<field>]`).
pub const FILTER_PREFIX: &str = "filter[";

/// Suffix of filter parameters.
pub const FILTER_SUFFIX: &str = "]";

/// Largest offset a page may start at. `OFFSET` is a signed 64-bit integer
/// in Postgres and `SQLite`.
pub const MAX_OFFSET: u64 = i64::MAX.unsigned_abs();

// ============================================================================
// QUERY STRING LIMITS
// ============================================================================

/// Maximum decoded length of a single key or value (64KB).
pub const MAX_URL_DECODED_LEN: usize = 64 * 1024;

/// Maximum number of distinct query parameter keys kept per request.
pub const MAX_QUERY_PARAMS: usize = 1000;
