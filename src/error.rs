//! Error types for the students API
//!
//! Provides unified error handling using thiserror and the mapping from
//! error taxonomy to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::{ErrorResponse, FieldErrors, ValidationErrorResponse};
use crate::storage::StorageError;

// == API Error Enum ==
/// Unified error type for request handling.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or empty request input (body or path segment)
    #[error("malformed request: {0}")]
    Decode(String),

    /// Field constraint violations in an otherwise well-formed body
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// No record exists for the requested id
    #[error("student with id {0} not found")]
    NotFound(i64),

    /// Storage backend failure; detail is logged, not echoed
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(id) => ApiError::NotFound(id),
            StorageError::Persistence(detail) => ApiError::Internal(detail),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Decode(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse::new(errors)),
            )
                .into_response(),
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(format!(
                    "student with id {} not found",
                    id
                ))),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                // The backend detail stays in the logs; the client gets a
                // generic message.
                error!("storage failure: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("internal server error")),
                )
                    .into_response()
            }
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
