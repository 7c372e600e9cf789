use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Database error during {operation} on {table}: {source}")]
    Database {
        table: &'static str,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Transaction {operation} failed: {source}")]
    Transaction {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    /// Wrap a sqlx error with the table and operation it came from
    pub fn database_operation(table: &'static str, operation: &'static str, source: sqlx::Error) -> Self {
        Self::Database {
            table,
            operation,
            source,
        }
    }

    pub fn transaction(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Transaction { operation, source }
    }

    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    /// True when the lookup matched no row (as opposed to any other failure)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinct_from_database_failure() {
        let missing = StoreError::not_found("asset", "id=3 user=7");
        assert!(missing.is_not_found());
        assert_eq!(missing.to_string(), "asset not found: id=3 user=7");

        let failed = StoreError::database_operation("assets", "insert", sqlx::Error::PoolTimedOut);
        assert!(!failed.is_not_found());
        assert!(failed.to_string().contains("insert"));
        assert!(failed.to_string().contains("assets"));
    }
}
