//! Decoded query string parameters.
//!
//! [`QueryParams`] is the input to every parser in this crate. It keeps all
//! values of a repeated key and remembers the order keys first appeared in.

mod decode;

pub use decode::{DecodeError, url_decode};

use std::collections::HashMap;

use crate::constants::{MAX_QUERY_PARAMS, MAX_URL_DECODED_LEN};

/// Query parameters of one request.
///
/// # Example
///
/// ```
/// use jsonapi_params::QueryParams;
///
/// let params = QueryParams::from_path("/cars?filter%5Bcolor%5D=red&sort=-year&filter[color]=blue");
/// assert_eq!(params.get("sort"), Some("-year"));
/// assert_eq!(params.get_all("filter[color]"), ["red", "blue"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Keys in first-appearance order with all of their values.
    entries: Vec<(String, Vec<String>)>,
    /// Key -> position in `entries`.
    index: HashMap<String, usize>,
}

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// Pairs are split on `&`, then on the first `=`. Keys and values are
    /// percent-decoded. A key without `=` gets an empty value. Pairs that fail
    /// to decode are dropped with a warning.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut params = Self::new();
        let mut dropped = 0u32;
        let mut truncated = false;

        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            match (url_decode(raw_key), url_decode(raw_value)) {
                (Ok(key), Ok(value)) => {
                    if !params.push(key, value) {
                        truncated = true;
                    }
                },
                _ => dropped += 1,
            }
        }

        if dropped > 0 {
            crate::log!(
                warn,
                "query param decode failed",
                dropped: dropped,
                max_decoded_len: MAX_URL_DECODED_LEN
            );
        }
        if truncated {
            crate::log!(warn, "query param limit exceeded", max: MAX_QUERY_PARAMS);
        }

        params
    }

    /// Parse the query part of a request path (everything after the first `?`).
    ///
    /// A path without `?` yields no parameters.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        path.split_once('?')
            .map_or_else(Self::new, |(_, query)| Self::parse(query))
    }

    /// Add one value. Returns `false` if the key was new and the key limit is reached.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            if let Some((_, values)) = self.entries.get_mut(pos) {
                values.push(value.into());
            }
            return true;
        }
        if self.entries.len() >= MAX_QUERY_PARAMS {
            return false;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, vec![value.into()]));
        true
    }

    /// First value of a parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// All values of a parameter, in request order.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.index
            .get(name)
            .and_then(|&pos| self.entries.get(pos))
            .map_or(&[], |(_, values)| values.as_slice())
    }

    /// Iterate over `(key, values)` in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameters are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}
