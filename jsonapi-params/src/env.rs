//! Environment variable access.
//!
//! Lookups work on an explicit `(name, value)` list so configuration can be
//! loaded from the process environment at startup and from fixed lists in
//! tests.
//!
//! ```
//! # use jsonapi_params::env;
//! let vars = vec![("MAX_PAGE_SIZE".to_string(), "50".to_string())];
//!
//! assert_eq!(env::get(&vars, "MAX_PAGE_SIZE"), Some("50"));
//! assert_eq!(env::get(&vars, "MIN_PAGE_SIZE"), None);
//! ```

/// Snapshot of the process environment.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[must_use]
pub fn snapshot() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

/// Get a variable by name. The last definition wins, as with `export`.
#[must_use]
pub fn get<'a>(env: &'a [(String, String)], name: &str) -> Option<&'a str> {
    env.iter()
        .rev()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_env() -> Vec<(String, String)> {
        vec![
            ("MIN_PAGE_SIZE".to_string(), "5".to_string()),
            ("MAX_PAGE_SIZE".to_string(), "50".to_string()),
            ("MAX_PAGE_SIZE".to_string(), "60".to_string()),
        ]
    }

    #[test]
    fn test_get() {
        let env = mock_env();
        assert_eq!(get(&env, "MIN_PAGE_SIZE"), Some("5"));
        assert_eq!(get(&env, "NONEXISTENT"), None);
    }

    #[test]
    fn test_get_last_definition_wins() {
        assert_eq!(get(&mock_env(), "MAX_PAGE_SIZE"), Some("60"));
    }

    #[test]
    fn test_snapshot_does_not_panic() {
        let _ = snapshot();
    }
}
