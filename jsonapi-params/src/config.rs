//! Pagination bounds.
//!
//! A [`Config`] is built once when the process starts and passed by reference
//! to the parsers. It never changes afterwards.

use crate::constants::{
    DEFAULT_MAX_PAGE_SIZE, DEFAULT_MIN_PAGE_SIZE, ENV_MAX_PAGE_SIZE, ENV_MIN_PAGE_SIZE,
};
use crate::env;
use crate::error::ConfigError;

/// Page size bounds accepted by the pagination parser.
///
/// # Example
///
/// ```
/// use jsonapi_params::Config;
///
/// let vars = vec![("MAX_PAGE_SIZE".to_string(), "50".to_string())];
/// let config = Config::from_vars(&vars).unwrap();
/// assert_eq!(config.min_page_size(), 1);
/// assert_eq!(config.max_page_size(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    min_page_size: u64,
    max_page_size: u64,
}

impl Config {
    /// Create a config, checking `1 <= min <= max`.
    pub fn new(min_page_size: u64, max_page_size: u64) -> Result<Self, ConfigError> {
        if min_page_size == 0 || max_page_size < min_page_size {
            return Err(ConfigError::InvalidBounds {
                min: min_page_size,
                max: max_page_size,
            });
        }
        Ok(Self {
            min_page_size,
            max_page_size,
        })
    }

    /// Load from the process environment (`MIN_PAGE_SIZE`, `MAX_PAGE_SIZE`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::snapshot())
    }

    /// Load from an explicit variable list. Unset variables use the defaults.
    pub fn from_vars(vars: &[(String, String)]) -> Result<Self, ConfigError> {
        let min = read_u64(vars, ENV_MIN_PAGE_SIZE, DEFAULT_MIN_PAGE_SIZE)?;
        let max = read_u64(vars, ENV_MAX_PAGE_SIZE, DEFAULT_MAX_PAGE_SIZE)?;
        Self::new(min, max)
    }

    /// Smallest accepted `page[size]`.
    #[inline]
    pub const fn min_page_size(&self) -> u64 {
        self.min_page_size
    }

    /// Largest accepted `page[size]`.
    #[inline]
    pub const fn max_page_size(&self) -> u64 {
        self.max_page_size
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_page_size: DEFAULT_MIN_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

fn read_u64(vars: &[(String, String)], var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::get(vars, var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidValue {
                var,
                value: raw.to_string(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.min_page_size(), 1);
        assert_eq!(config.max_page_size(), 100);
    }

    #[test]
    fn test_reads_both_bounds() {
        let config =
            Config::from_vars(&vars(&[("MIN_PAGE_SIZE", "5"), ("MAX_PAGE_SIZE", " 25 ")])).unwrap();
        assert_eq!(config.min_page_size(), 5);
        assert_eq!(config.max_page_size(), 25);
    }

    #[test]
    fn test_non_integer_is_error() {
        let err = Config::from_vars(&vars(&[("MAX_PAGE_SIZE", "lots")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { var: "MAX_PAGE_SIZE", ref value, .. } if value == "lots"
        ));
    }

    #[test]
    fn test_negative_is_error() {
        let err = Config::from_vars(&vars(&[("MIN_PAGE_SIZE", "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "MIN_PAGE_SIZE", .. }));
    }

    #[test]
    fn test_inconsistent_bounds() {
        assert_eq!(
            Config::new(10, 5),
            Err(ConfigError::InvalidBounds { min: 10, max: 5 })
        );
        assert_eq!(
            Config::new(0, 5),
            Err(ConfigError::InvalidBounds { min: 0, max: 5 })
        );
        assert!(Config::new(7, 7).is_ok());
    }
}
