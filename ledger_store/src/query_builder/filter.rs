//! WHERE-clause conditions

use serde_json::Value;

/// Query condition operators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOperator {
    Eq,    // =
    ILike, // ILIKE (case insensitive)
}

impl QueryOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            QueryOperator::Eq => "=",
            QueryOperator::ILike => "ILIKE",
        }
    }
}

/// Single condition in a WHERE clause; conditions on one builder are ANDed
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    pub field: String,
    pub operator: QueryOperator,
    pub value: Value,
}

impl QueryFilter {
    /// Create a simple condition
    pub fn condition(field: &str, operator: QueryOperator, value: Value) -> Self {
        Self {
            field: field.to_string(),
            operator,
            value,
        }
    }

    /// Equal condition
    pub fn eq(field: &str, value: Value) -> Self {
        Self::condition(field, QueryOperator::Eq, value)
    }

    /// ILIKE condition (case insensitive)
    pub fn ilike(field: &str, pattern: &str) -> Self {
        Self::condition(
            field,
            QueryOperator::ILike,
            Value::String(pattern.to_string()),
        )
    }
}
