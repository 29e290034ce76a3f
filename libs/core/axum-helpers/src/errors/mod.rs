pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned for all error responses:
/// - `code`: Integer error code for logging/monitoring (e.g., 1004)
/// - `error`: Machine-readable error identifier (e.g., "NOT_FOUND")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Book not found"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Client faults map to 400/404; every store or internal failure maps to 500.
/// In release builds the message of a 500 is replaced by the error code's default
/// message so driver internals are not sent to clients.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// HTTP status and error code this error renders with.
    pub fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::QueryExtractorRejection(_) | AppError::Validation(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::ValidationError)
            }
            AppError::InvalidIdentifier(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidIdentifier)
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
            AppError::DatabaseUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::DatabaseUnavailable,
            ),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match self {
            AppError::QueryExtractorRejection(e) => {
                tracing::info!(error_code = code.code(), "Query extraction error: {:?}", e);
                e.body_text()
            }
            AppError::Validation(msg) => {
                tracing::info!(error_code = code.code(), "Validation error: {}", msg);
                msg
            }
            AppError::InvalidIdentifier(msg) => {
                tracing::info!(error_code = code.code(), "Invalid identifier: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                msg
            }
            AppError::DatabaseUnavailable(msg) => {
                tracing::error!(error_code = code.code(), "Database unavailable: {}", msg);
                msg
            }
            AppError::Database(msg) => {
                tracing::error!(error_code = code.code(), "Database error: {}", msg);
                msg
            }
        };

        let message = if cfg!(not(debug_assertions)) && status.is_server_error() {
            code.default_message().to_string()
        } else {
            message
        };

        error_response(status, message, code)
    }
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::NOT_FOUND,
///     "Book not found".to_string(),
///     ErrorCode::NotFound,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Book not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["code"], 1004);
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "Book not found");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_invalid_identifier_maps_to_400() {
        let response = AppError::InvalidIdentifier("not-an-id".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "INVALID_IDENTIFIER");
    }

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let response = AppError::Validation("missing field `title`".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], 1001);
    }

    #[tokio::test]
    async fn test_store_errors_map_to_500() {
        for error in [
            AppError::Database("connection refused".to_string()),
            AppError::DatabaseUnavailable("Database not available".to_string()),
        ] {
            assert_eq!(
                error.into_response().status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[cfg(debug_assertions)]
    #[tokio::test]
    async fn test_debug_builds_keep_store_message() {
        let response = AppError::Database("connection refused".to_string()).into_response();
        assert_eq!(body_json(response).await["message"], "connection refused");
    }

    #[test]
    fn test_status_and_code_pairs() {
        assert_eq!(
            AppError::Database(String::new()).status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError)
        );
        assert_eq!(
            AppError::InvalidIdentifier(String::new()).status_and_code(),
            (StatusCode::BAD_REQUEST, ErrorCode::InvalidIdentifier)
        );
    }
}
