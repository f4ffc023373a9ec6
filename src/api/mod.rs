//! API Module
//!
//! HTTP handlers and routing for the students REST API.
//!
//! # Endpoints
//! - `POST /api/students` - Create a student
//! - `GET /api/students` - List all students
//! - `GET /api/students/:id` - Retrieve a student by id
//! - `PUT /api/students/:id` - Update a student
//! - `DELETE /api/students/:id` - Delete a student
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
