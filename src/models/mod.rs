//! Entity and DTO models for the students API
//!
//! This module defines the Student entity shared by all layers plus the
//! DTOs (Data Transfer Objects) used for serializing/deserializing HTTP
//! request and response bodies.

pub mod requests;
pub mod responses;
pub mod student;

// Re-export commonly used types
pub use requests::{FieldErrors, StudentPayload};
pub use responses::{
    CreateStudentResponse, ErrorResponse, HealthResponse, MutationResponse,
    ValidationErrorResponse,
};
pub use student::Student;
