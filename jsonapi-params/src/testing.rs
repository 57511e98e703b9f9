//! A [`Query`] that records every call, for unit tests.

use jsonapi_sql::{SortDir, Value};

use crate::modifier::Query;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Offset(u64),
    Limit(u64),
    Order(String, SortDir),
    Eq(String, Value),
    In(String, Vec<Value>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Recorder {
    pub(crate) calls: Vec<Call>,
}

impl Recorder {
    fn push(mut self, call: Call) -> Self {
        self.calls.push(call);
        self
    }
}

impl Query for Recorder {
    fn set_offset(self, offset: u64) -> Self {
        self.push(Call::Offset(offset))
    }

    fn set_limit(self, limit: u64) -> Self {
        self.push(Call::Limit(limit))
    }

    fn order_by(self, column: &str, dir: SortDir) -> Self {
        self.push(Call::Order(column.to_string(), dir))
    }

    fn where_eq(self, column: &str, value: Value) -> Self {
        self.push(Call::Eq(column.to_string(), value))
    }

    fn where_in(self, column: &str, values: Vec<Value>) -> Self {
        self.push(Call::In(column.to_string(), values))
    }
}

pub(crate) fn params(pairs: &[(&str, &str)]) -> crate::QueryParams {
    pairs.iter().copied().collect()
}
