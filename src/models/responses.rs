//! Response DTOs for the students API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::requests::FieldErrors;

/// Response body for a successful create (POST /api/students)
#[derive(Debug, Clone, Serialize)]
pub struct CreateStudentResponse {
    /// The backend-assigned id of the new record
    pub id: i64,
}

/// Response body for a successful update or delete
/// (PUT /api/students/:id, DELETE /api/students/:id)
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    /// Success message
    pub message: String,
    /// The id that was acted on
    pub id: i64,
}

impl MutationResponse {
    /// Creates the success body for an update.
    pub fn updated(id: i64) -> Self {
        Self {
            message: format!("student {} updated successfully", id),
            id,
        }
    }

    /// Creates the success body for a delete.
    pub fn deleted(id: i64) -> Self {
        Self {
            message: format!("student {} deleted successfully", id),
            id,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for general (non-validation) failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Fixed marker so clients can distinguish error envelopes
    pub status: &'static str,
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: "Error",
            error: error.into(),
        }
    }
}

/// Error response body for validation failures, keyed by field
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    /// Fixed marker so clients can distinguish error envelopes
    pub status: &'static str,
    /// One message per invalid field
    pub errors: FieldErrors,
}

impl ValidationErrorResponse {
    /// Creates a new ValidationErrorResponse
    pub fn new(errors: FieldErrors) -> Self {
        Self {
            status: "Error",
            errors,
        }
    }
}
