//! Public field name → column name mapping.

use std::collections::HashMap;

use jsonapi_sql::is_valid_sql_identifier;

use crate::error::ConfigError;

/// Maps the name of a sort or filter field to a database column.
///
/// Returning `None` rejects the field; the name then never reaches the query.
/// A returned column that is not a bare SQL identifier (`cars.name`,
/// `"name"`) is rejected the same way by the parsers.
pub trait ColumnMapper {
    /// Translate a client-facing field name into a column name.
    fn map_column(&self, field: &str) -> Option<String>;
}

impl<F> ColumnMapper for F
where
    F: Fn(&str) -> Option<String>,
{
    fn map_column(&self, field: &str) -> Option<String> {
        self(field)
    }
}

/// [`ColumnMapper`] backed by a fixed table of allowed fields.
///
/// ```
/// use jsonapi_params::{ColumnMapper, MapMapper};
///
/// let mapper = MapMapper::new([("name", "col_name"), ("age", "col_age")]);
/// assert_eq!(mapper.map_column("name").as_deref(), Some("col_name"));
/// assert_eq!(mapper.map_column("password"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapMapper {
    mapping: HashMap<String, String>,
}

impl MapMapper {
    /// Build a mapper from `(field, column)` pairs.
    pub fn new<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            mapping: mapping
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Like [`MapMapper::new`], but rejects column names that are not SQL identifiers.
    pub fn try_new<I, K, V>(mapping: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mapper = Self::new(mapping);
        if let Some((field, column)) = mapper
            .mapping
            .iter()
            .find(|(_, column)| !is_valid_sql_identifier(column))
        {
            return Err(ConfigError::InvalidColumn {
                field: field.clone(),
                column: column.clone(),
            });
        }
        Ok(mapper)
    }

    /// Number of allowed fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Whether no field is allowed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

impl ColumnMapper for MapMapper {
    fn map_column(&self, field: &str) -> Option<String> {
        self.mapping.get(field).cloned()
    }
}

/// Column for `field`, or `None` when it is unmapped or maps to something
/// that is not a bare SQL identifier.
pub(crate) fn checked_column(mapper: &impl ColumnMapper, field: &str) -> Option<String> {
    let column = mapper.map_column(field)?;
    if is_valid_sql_identifier(&column) {
        Some(column)
    } else {
        crate::log::debug!("field {field} maps to invalid column {column:?}");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_mapper() {
        let mapper = MapMapper::new([("color", "col_color")]);
        assert_eq!(mapper.map_column("color"), Some("col_color".to_string()));
        assert_eq!(mapper.map_column("Color"), None);
        assert_eq!(mapper.map_column(""), None);
        assert_eq!(mapper.len(), 1);
    }

    #[test]
    fn test_try_new_rejects_bad_column() {
        let err = MapMapper::try_new([("color", "col_color"), ("name", "name; DROP")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidColumn {
                field: "name".into(),
                column: "name; DROP".into()
            }
        );
        assert!(MapMapper::try_new([("color", "col_color")]).is_ok());
    }

    #[test]
    fn test_closure_mapper() {
        let prefixing = |field: &str| {
            field
                .chars()
                .all(|c| c.is_ascii_lowercase())
                .then(|| format!("col_{field}"))
        };
        assert_eq!(prefixing.map_column("name"), Some("col_name".to_string()));
        assert_eq!(prefixing.map_column("Name"), None);
    }

    #[test]
    fn test_checked_column_drops_non_identifiers() {
        let mapper = MapMapper::new([("name", "cars.name"), ("age", "col_age")]);
        assert_eq!(checked_column(&mapper, "name"), None);
        assert_eq!(checked_column(&mapper, "age").as_deref(), Some("col_age"));
        assert_eq!(checked_column(&mapper, "missing"), None);

        let quoting = |field: &str| Some(format!("\"{field}\""));
        assert_eq!(checked_column(&quoting, "name"), None);
    }

    #[test]
    fn test_mappers_interchangeable_behind_trait() {
        let table = MapMapper::new([("name", "col_name")]);
        let closure = |field: &str| (field == "name").then(|| "col_name".to_string());
        let mappers: [&dyn ColumnMapper; 2] = [&table, &closure];
        for mapper in mappers {
            assert_eq!(mapper.map_column("name").as_deref(), Some("col_name"));
            assert_eq!(mapper.map_column("age"), None);
        }
    }
}
