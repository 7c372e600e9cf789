//! Uniform outcome envelope returned by every service operation

use crate::service::error::ServiceError;
use crate::service::validation::ValidationErrors;
use serde::Serialize;

/// Status codes produced by the service layer (HTTP semantics)
pub mod status {
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const UNAUTHORIZED: u16 = 401;
    pub const NOT_FOUND: u16 = 404;
    pub const UNPROCESSABLE_ENTITY: u16 = 422;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

pub const MSG_SUCCESS: &str = "success";
pub const MSG_SERVER_ERROR: &str = "internal server error";
pub const MSG_NOT_FOUND: &str = "data not found";
pub const MSG_UNAUTHORIZED: &str = "unauthorized";
pub const MSG_VALIDATION: &str = "validation error";

/// Page position of a listing response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    /// Metadata for a listing, or `None` when no positive page size was
    /// requested. A missing or non-positive page reads as page 1; a page past
    /// the end is clamped to the last page.
    pub fn compute(page: Option<i64>, limit: Option<i64>, total: i64) -> Option<Self> {
        let limit = limit.filter(|limit| *limit > 0)?;
        let total = total.max(0);
        let total_pages = total / limit + i64::from(total % limit != 0);

        let mut page = page.filter(|page| *page > 0).unwrap_or(1);
        if total_pages > 0 && page > total_pages {
            page = total_pages;
        }

        Some(Self {
            page,
            limit,
            total,
            total_pages,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_meta: Option<PaginationMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl<T> ApiResponse<T> {
    fn success(status_code: u16, data: T) -> Self {
        Self {
            status_code,
            message: MSG_SUCCESS.to_string(),
            data: Some(data),
            pagination_meta: None,
            errors: None,
        }
    }

    pub fn ok(data: T) -> Self {
        Self::success(status::OK, data)
    }

    pub fn created(data: T) -> Self {
        Self::success(status::CREATED, data)
    }

    pub fn with_pagination(mut self, meta: Option<PaginationMeta>) -> Self {
        self.pagination_meta = meta;
        self
    }

    /// Failure envelope. Only the public message leaves the service; the
    /// cause of a storage failure is logged when the error is built.
    pub fn from_error(error: ServiceError) -> Self {
        let status_code = error.status_code();
        let message = error.public_message().to_string();
        let errors = match error {
            ServiceError::Validation(errors) => Some(errors),
            _ => None,
        };

        Self {
            status_code,
            message,
            data: None,
            pagination_meta: None,
            errors,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Pagination metadata
    // ============================================================================

    #[test]
    fn test_page_past_end_is_clamped() {
        let meta = PaginationMeta::compute(Some(10), Some(5), 23).unwrap();
        assert_eq!(
            meta,
            PaginationMeta {
                page: 5,
                limit: 5,
                total: 23,
                total_pages: 5
            }
        );
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PaginationMeta::compute(Some(1), Some(5), 25).unwrap().total_pages, 5);
        assert_eq!(PaginationMeta::compute(Some(1), Some(5), 26).unwrap().total_pages, 6);
        assert_eq!(PaginationMeta::compute(Some(1), Some(5), 1).unwrap().total_pages, 1);
    }

    #[test]
    fn test_huge_limit_does_not_overflow() {
        let meta = PaginationMeta::compute(Some(1), Some(i64::MAX), 2).unwrap();
        assert_eq!(meta.total_pages, 1);
        assert_eq!(meta.page, 1);

        let meta = PaginationMeta::compute(Some(3), Some(i64::MAX), i64::MAX).unwrap();
        assert_eq!((meta.page, meta.total_pages), (1, 1));
    }

    #[test]
    fn test_meta_omitted_without_positive_limit() {
        assert_eq!(PaginationMeta::compute(Some(1), None, 23), None);
        assert_eq!(PaginationMeta::compute(Some(1), Some(0), 23), None);
        assert_eq!(PaginationMeta::compute(None, Some(-5), 23), None);
    }

    #[test]
    fn test_page_defaults_to_first() {
        assert_eq!(PaginationMeta::compute(None, Some(5), 23).unwrap().page, 1);
        assert_eq!(PaginationMeta::compute(Some(0), Some(5), 23).unwrap().page, 1);
    }

    #[test]
    fn test_empty_population_keeps_requested_page() {
        let meta = PaginationMeta::compute(Some(3), Some(5), 0).unwrap();
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.page, 3);
    }

    // ============================================================================
    // Envelope
    // ============================================================================

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::ok(vec![1, 2])
            .with_pagination(PaginationMeta::compute(Some(1), Some(2), 3));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "statusCode": 200,
                "message": "success",
                "data": [1, 2],
                "paginationMeta": {"page": 1, "limit": 2, "total": 3, "totalPages": 2}
            })
        );
    }

    #[test]
    fn test_validation_envelope_carries_field_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("amount", "must be greater than 0");

        let response = ApiResponse::<()>::from_error(ServiceError::Validation(errors));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "statusCode": 422,
                "message": "validation error",
                "errors": {"amount": ["must be greater than 0"]}
            })
        );
        assert!(!response.is_success());
    }
}
