//! # REST API Errors
//!
//! Error types for the route layer. Every error renders as a JSON
//! `{"message": "..."}` envelope.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::ValidationError;
use crate::store::StoreError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// Fixed body of the catch-all 404 response
pub const NOT_FOUND_MESSAGE: &str = "404 Error! There was an issue with the endpoint! Please make sure everything is correct and include in your request!";

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Write body violates the schema
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Malformed body, path parameter or id on a write route
    #[error("{0}")]
    BadRequest(String),

    /// No book with the given id
    #[error("No book found with id {0}")]
    NotFound(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure on a read route
    #[error("{0}")]
    Operation(String),
}

impl RestError {
    /// Map a store failure on a read route
    pub fn read(err: StoreError) -> Self {
        RestError::Operation(err.to_string())
    }

    /// Map a store failure on a write route
    pub fn write(err: StoreError) -> Self {
        RestError::BadRequest(err.to_string())
    }

    /// Map an unreadable path parameter on a read route
    pub fn read_path(rejection: PathRejection) -> Self {
        RestError::Operation(rejection.body_text())
    }

    /// Map an unreadable path parameter on a write route
    pub fn write_path(rejection: PathRejection) -> Self {
        RestError::BadRequest(rejection.body_text())
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Validation(_) => StatusCode::BAD_REQUEST,
            RestError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::Operation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

/// Catch-all for unknown paths and unsupported methods
pub async fn route_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Violation;

    #[test]
    fn test_status_codes() {
        let validation = ValidationError::new("Book", vec![Violation::missing_field("title")]);
        assert_eq!(
            RestError::from(validation).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RestError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RestError::Operation("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_status_depends_on_route_kind() {
        let err = StoreError::InvalidId("abc".to_string());
        assert_eq!(
            RestError::read(err.clone()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(RestError::write(err).status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_message_passes_through() {
        let validation = ValidationError::new("Book", vec![Violation::missing_field("genre")]);
        let body = ErrorResponse::from(&RestError::from(validation));
        assert_eq!(
            body.message,
            "Book validation failed: genre: Path `genre` is required."
        );
    }
}
