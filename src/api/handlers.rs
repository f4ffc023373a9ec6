//! API Handlers
//!
//! HTTP request handlers for each students endpoint. Every handler follows
//! the same shape: decode, validate, invoke storage, encode.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::models::{
    CreateStudentResponse, HealthResponse, MutationResponse, Student, StudentPayload,
};
use crate::storage::StudentStore;

/// Application state shared across all handlers.
///
/// Holds the storage capability behind an Arc so every concurrent request
/// sees the same backend. Built by constructor injection; there is no
/// process-global handle.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend
    pub store: Arc<dyn StudentStore>,
}

impl AppState {
    /// Creates a new AppState around the given storage backend.
    pub fn new<S>(store: S) -> Self
    where
        S: StudentStore + 'static,
    {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Handler for POST /api/students
///
/// Decodes the body (ignoring any client-supplied id), validates it, and
/// creates the record. Responds 201 with the assigned id.
pub async fn create_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<StudentPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateStudentResponse>)> {
    let Json(payload) = payload.map_err(|rejection| ApiError::Decode(rejection.body_text()))?;
    payload.validate().map_err(ApiError::Validation)?;

    let id = state
        .store
        .create(&payload.name, &payload.email, payload.age)
        .await?;

    info!("student created: id={} name={}", id, payload.name);

    Ok((StatusCode::CREATED, Json(CreateStudentResponse { id })))
}

/// Handler for GET /api/students/:id
///
/// Responds 200 with the full record, 404 when no record matches.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Student>> {
    let id = parse_id(&id)?;
    let student = state.store.get_by_id(id).await?;

    Ok(Json(student))
}

/// Handler for GET /api/students
///
/// Responds 200 with all records; an empty array when none exist.
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Student>>> {
    let students = state.store.list().await?;

    Ok(Json(students))
}

/// Handler for PUT /api/students/:id
///
/// Decodes and validates the body like create, then overwrites the
/// addressed record. Responds 404 when no record matches.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<StudentPayload>, JsonRejection>,
) -> Result<Json<MutationResponse>> {
    let id = parse_id(&id)?;
    let Json(payload) = payload.map_err(|rejection| ApiError::Decode(rejection.body_text()))?;
    payload.validate().map_err(ApiError::Validation)?;

    state
        .store
        .update(id, &payload.name, &payload.email, payload.age)
        .await?;

    info!("student updated: id={}", id);

    Ok(Json(MutationResponse::updated(id)))
}

/// Handler for DELETE /api/students/:id
///
/// Responds 404 when no record matches.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse>> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;

    info!("student deleted: id={}", id);

    Ok(Json(MutationResponse::deleted(id)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Parses the id path segment as a base-10 integer.
fn parse_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::Decode(format!("invalid student id '{}'", raw)))
}
