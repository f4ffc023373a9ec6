//! Student Entity
//!
//! The single record shape shared by the HTTP layer and every storage backend.

use serde::{Deserialize, Serialize};

/// A student record.
///
/// The `id` is assigned by the storage backend on creation and is immutable
/// thereafter; clients never supply it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    /// Backend-assigned unique identifier
    pub id: i64,
    /// Student name (non-empty)
    pub name: String,
    /// Email address
    pub email: String,
    /// Age in years (non-negative)
    pub age: i64,
}
