//! Error types.

use std::num::ParseIntError;

use thiserror::Error;

/// A rejected request parameter.
///
/// These are input-validation failures; an API layer maps them to a 4xx
/// response. None of them is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParamsError {
    /// A pagination parameter is not a valid integer.
    #[error("invalid {param} value {value:?}: {source}")]
    InvalidNumber {
        /// Parameter name, e.g. `page[size]`.
        param: &'static str,
        /// The raw value that failed to parse.
        value: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },

    /// `page[size]` is outside the configured bounds.
    #[error("invalid pagesize not between min. and max. value, min: {min}, max: {max}")]
    PageSizeOutOfBounds {
        /// Requested page size.
        size: i64,
        /// Configured minimum.
        min: u64,
        /// Configured maximum.
        max: u64,
    },

    /// `page[number]` starts the page beyond the largest usable offset.
    #[error("invalid page[number] {number}: offset for page size {size} exceeds {}", crate::constants::MAX_OFFSET)]
    PageNumberOutOfRange {
        /// Requested page number.
        number: u64,
        /// Accepted page size.
        size: u64,
    },

    /// One or more sort fields are not mapped to a column.
    #[error("at least one sorting parameter is not valid: {:?}", .fields.join(","))]
    InvalidSort {
        /// Rejected field names in request order.
        fields: Vec<String>,
    },

    /// One or more filter fields are unmapped or carry a value that failed sanitization.
    #[error("at least one filter parameter is not valid: {:?}", .fields.join(","))]
    InvalidFilter {
        /// Rejected field names in request order.
        fields: Vec<String>,
    },
}

impl ParamsError {
    /// Names of the offending parameters or fields.
    ///
    /// For pagination errors this is the parameter name (`page[number]` or
    /// `page[size]`); for sort and filter errors, the public field names.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Self::InvalidNumber { param, .. } => vec![*param],
            Self::PageNumberOutOfRange { .. } => vec![crate::constants::PARAM_PAGE_NUMBER],
            Self::PageSizeOutOfBounds { .. } => vec![crate::constants::PARAM_PAGE_SIZE],
            Self::InvalidSort { fields } | Self::InvalidFilter { fields } => {
                fields.iter().map(String::as_str).collect()
            },
        }
    }
}

/// A raw filter value that could not be converted for its column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot use {value:?} for column `{column}`: {reason}")]
pub struct SanitizeError {
    /// Column the value was meant for.
    pub column: String,
    /// The raw value.
    pub value: String,
    /// Why it was rejected.
    pub reason: String,
}

impl SanitizeError {
    /// Create a sanitize error.
    pub fn new(column: &str, value: &str, reason: impl Into<String>) -> Self {
        Self {
            column: column.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Configuration that cannot be used. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An environment variable is not an integer.
    #[error("invalid value {value:?} for {var}: {source}")]
    InvalidValue {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },

    /// Page size bounds are inconsistent.
    #[error("invalid page size bounds: min {min} must be at least 1 and not above max {max}")]
    InvalidBounds {
        /// Configured minimum.
        min: u64,
        /// Configured maximum.
        max: u64,
    },

    /// A column mapping targets a name that is not a SQL identifier.
    #[error("field `{field}` maps to invalid column name {column:?}")]
    InvalidColumn {
        /// Public field name.
        field: String,
        /// Offending column name.
        column: String,
    },
}
