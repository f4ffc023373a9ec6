//! Storage Module
//!
//! Persistence backends for student records behind a common capability
//! interface.

mod memory;
mod sqlite;


// Re-export public types
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Student;

// == Storage Error Enum ==
/// Errors produced by a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No record exists for the given id
    #[error("student with id {0} not found")]
    NotFound(i64),

    /// Any other backend failure (constraint violation, I/O failure, ...)
    #[error("persistence failure: {0}")]
    Persistence(String),
}

// == Result Type Alias ==
/// Convenience Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

// == Storage Capability ==
/// Capability interface every persistence backend satisfies.
///
/// Operations are independently invocable with no transaction or session
/// state across calls. `list` makes no ordering guarantee. Each call is a
/// single attempt; backend errors are propagated, not retried.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Inserts a new record and returns the backend-assigned id.
    async fn create(&self, name: &str, email: &str, age: i64) -> Result<i64>;

    /// Retrieves a record by id.
    async fn get_by_id(&self, id: i64) -> Result<Student>;

    /// Returns all records; an empty vec when none exist.
    async fn list(&self) -> Result<Vec<Student>>;

    /// Overwrites the record with the given id.
    async fn update(&self, id: i64, name: &str, email: &str, age: i64) -> Result<()>;

    /// Removes the record with the given id.
    async fn delete(&self, id: i64) -> Result<()>;
}
