//! Error responses for the route layer.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::database::StoreError;

/// Body of every error response: `{ "message": "..." }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Failures a handler can report.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body did not match the expected schema. Nothing was
    /// written.
    #[error("{0}")]
    Validation(String),

    /// The addressed record or route does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The route exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request outlived the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Anything else.
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(source) => {
                tracing::error!(error = %source, "❌ Request failed");
            }
            other => {
                tracing::warn!(status = status.as_u16(), "⚠️  {}", other);
            }
        }
        let body = Json(ErrorBody {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err = ApiError::from(StoreError::not_found("Lesson", "x"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Lesson not found");
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = ApiError::from(anyhow::anyhow!("socket closed"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_transport_errors_keep_their_status() {
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::Timeout.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(ApiError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn test_validation_is_bad_request() {
        let err = ApiError::Validation("missing field `course_name`".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
