//! Identifier checks for table and column names.

/// Maximum length for SQL identifiers (`PostgreSQL` limit is 63).
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Validate that a string is a safe SQL identifier.
///
/// A valid SQL identifier starts with an ASCII letter or underscore, continues
/// with ASCII letters, digits or underscores, and is 1 to 63 bytes long.
///
/// # Examples
///
/// ```
/// use jsonapi_sql::is_valid_sql_identifier;
///
/// assert!(is_valid_sql_identifier("col_color"));
/// assert!(is_valid_sql_identifier("_hidden"));
///
/// assert!(!is_valid_sql_identifier(""));
/// assert!(!is_valid_sql_identifier("9lives"));
/// assert!(!is_valid_sql_identifier("name DESC"));
/// assert!(!is_valid_sql_identifier("a.b"));
/// ```
#[inline]
#[must_use]
pub fn is_valid_sql_identifier(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_IDENTIFIER_LENGTH {
        return false;
    }

    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {},
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Assert that a string is a valid SQL identifier.
///
/// # Panics
///
/// Panics if the identifier is invalid. Identifiers come from code or from a
/// column mapping, never from request input, so an invalid one is a bug.
#[inline]
pub fn assert_valid_sql_identifier(s: &str, context: &str) {
    assert!(
        is_valid_sql_identifier(s),
        "Invalid SQL {context} name '{s}': must start with letter/underscore, \
             contain only ASCII alphanumeric/underscore, and be 1-63 chars"
    );
}
