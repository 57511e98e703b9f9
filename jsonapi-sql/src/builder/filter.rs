//! Rendering of one `WHERE` condition.

use super::types::{Filter, Operator, Value};
use crate::dialect::Dialect;

/// Render `filter` and append the values it binds to `params`.
///
/// Placeholders continue from `params.len() + 1`, so conditions rendered into
/// the same vector number their parameters consecutively.
pub(super) fn render_condition<D: Dialect>(dialect: &D, filter: &Filter, params: &mut Vec<Value>) -> String {
    let next = params.len() + 1;
    let field = filter.field.as_str();

    match (filter.op, &filter.value) {
        (Operator::Eq, Value::Null) => format!("{field} IS NULL"),
        (Operator::In, Value::Array(values)) => {
            let (sql, bound) = dialect.membership(field, values, next);
            params.extend(bound);
            sql
        },
        // scalar membership is plain equality
        (Operator::Eq | Operator::In, value) => {
            params.push(value.clone());
            format!("{field} = {}", dialect.placeholder(next))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Postgres, Sqlite};

    #[test]
    fn test_equality() {
        let mut params = Vec::new();
        let filter = Filter::new("paint", Operator::Eq, Value::from("red"));
        assert_eq!(render_condition(&Postgres, &filter, &mut params), "paint = $1");
        assert_eq!(params, vec![Value::from("red")]);
    }

    #[test]
    fn test_null_binds_nothing() {
        let mut params = vec![Value::Int(1)];
        let filter = Filter::new("deleted_at", Operator::Eq, Value::Null);
        assert_eq!(render_condition(&Sqlite, &filter, &mut params), "deleted_at IS NULL");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_numbering_continues_after_existing_params() {
        let mut params = vec![Value::Int(1)];
        let filter = Filter::new(
            "doors",
            Operator::In,
            Value::Array(vec![Value::Int(2), Value::Int(3), Value::Int(5)]),
        );
        assert_eq!(
            render_condition(&Sqlite, &filter, &mut params),
            "doors IN (?2, ?3, ?4)"
        );
        assert_eq!(params.len(), 4);

        let next = Filter::new("paint", Operator::Eq, Value::from("red"));
        assert_eq!(render_condition(&Sqlite, &next, &mut params), "paint = ?5");
    }

    #[test]
    fn test_scalar_membership_is_equality() {
        let mut params = Vec::new();
        let filter = Filter::new("doors", Operator::In, Value::Int(4));
        assert_eq!(render_condition(&Postgres, &filter, &mut params), "doors = $1");
        assert_eq!(params, vec![Value::Int(4)]);
    }
}
