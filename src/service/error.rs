use crate::service::response::{
    status, MSG_NOT_FOUND, MSG_SERVER_ERROR, MSG_UNAUTHORIZED, MSG_VALIDATION,
};
use crate::service::validation::ValidationErrors;
use ledger_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("no resolved identity on the request")]
    Unauthorized,

    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("asset not found")]
    NotFound,

    #[error("{operation} failed: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    /// Wrap a store failure. The cause is logged here, once, with the
    /// operation that hit it.
    pub fn storage(operation: &'static str, source: StoreError) -> Self {
        tracing::error!(operation, error = %source, "storage failure");
        Self::Storage { operation, source }
    }

    /// Like [`storage`](Self::storage), but an absent row becomes `NotFound`
    pub fn lookup(operation: &'static str, source: StoreError) -> Self {
        if source.is_not_found() {
            tracing::debug!(operation, "row not found");
            Self::NotFound
        } else {
            Self::storage(operation, source)
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized => status::UNAUTHORIZED,
            Self::Validation(_) => status::UNPROCESSABLE_ENTITY,
            Self::NotFound => status::NOT_FOUND,
            Self::Storage { .. } => status::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing message; never includes storage details
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Unauthorized => MSG_UNAUTHORIZED,
            Self::Validation(_) => MSG_VALIDATION,
            Self::NotFound => MSG_NOT_FOUND,
            Self::Storage { .. } => MSG_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_separates_absent_rows_from_failures() {
        let missing = ServiceError::lookup("get_by_id", StoreError::not_found("asset", "id=1"));
        assert!(matches!(missing, ServiceError::NotFound));
        assert_eq!(missing.status_code(), 404);

        let failed = ServiceError::lookup(
            "get_by_id",
            StoreError::database_operation("assets", "get_by_id", sqlx::Error::PoolTimedOut),
        );
        assert!(matches!(failed, ServiceError::Storage { operation: "get_by_id", .. }));
        assert_eq!(failed.status_code(), 500);
    }

    #[test]
    fn test_storage_failure_message_does_not_leak_cause() {
        let error = ServiceError::storage(
            "insert",
            StoreError::database_operation("assets", "insert", sqlx::Error::PoolTimedOut),
        );

        assert_eq!(error.public_message(), "internal server error");
        assert!(error.to_string().contains("insert"));
    }
}
