//! Error Types
//!
//! Service and API error types with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Service-level errors for application logic failures.
///
/// The current services are stubs and never fail, but the handlers are
/// already wired against this type so real readings logic can start
/// returning errors without touching the API layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ServiceError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Database(_) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Service(err) => {
                (err.status_code(), err.error_code().to_string(), err.to_string())
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg.clone())
            }
            ApiError::InvalidId(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_ID".to_string(), msg.clone())
            }
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR".to_string(),
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorDetail { code, message },
            request_id: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<std::num::ParseIntError> for ApiError {
    fn from(err: std::num::ParseIntError) -> Self {
        ApiError::InvalidId(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_status_codes() {
        let not_found = ServiceError::NotFound {
            resource: "Bible".to_string(),
            id: "42".to_string(),
        };
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_invalid_id_maps_to_bad_request() {
        let err: ApiError = "abc".parse::<i64>().unwrap_err().into();
        assert!(matches!(err, ApiError::InvalidId(_)));
    }

    #[test]
    fn test_not_found_message_contains_id() {
        let err = ServiceError::NotFound {
            resource: "Liturgical".to_string(),
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "Liturgical with id '7' not found");
    }
}
