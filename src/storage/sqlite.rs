//! SQLite Storage Backend
//!
//! Relational backend over an async sqlx connection pool. The database file
//! and the students table are created on startup if absent.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::models::Student;
use crate::storage::{Result, StorageError, StudentStore};

/// Schema applied on every connect; a no-op once the table exists.
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    age INTEGER NOT NULL
)";

// == SQLite Store ==
/// SQLite-backed student store.
///
/// The pool is safe for concurrent use by simultaneously executing
/// handlers; cloning shares the same pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    /// Shared connection pool
    pool: SqlitePool,
}

impl SqliteStore {
    // == Constructor ==
    /// Opens the database file (creating it if missing) and ensures the
    /// schema exists.
    ///
    /// # Arguments
    /// * `storage_path` - Path of the SQLite database file
    pub async fn connect(storage_path: &str) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(storage_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(CREATE_TABLE).execute(&pool).await?;

        info!("SQLite storage ready at {}", storage_path);

        Ok(Self { pool })
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Persistence(err.to_string())
    }
}

#[async_trait]
impl StudentStore for SqliteStore {
    async fn create(&self, name: &str, email: &str, age: i64) -> Result<i64> {
        let result = sqlx::query("INSERT INTO students (name, email, age) VALUES (?1, ?2, ?3)")
            .bind(name)
            .bind(email)
            .bind(age)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_by_id(&self, id: i64) -> Result<Student> {
        sqlx::query_as::<_, Student>(
            "SELECT id, name, email, age FROM students WHERE id = ?1 LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>("SELECT id, name, email, age FROM students")
            .fetch_all(&self.pool)
            .await?;

        Ok(students)
    }

    async fn update(&self, id: i64, name: &str, email: &str, age: i64) -> Result<()> {
        let result =
            sqlx::query("UPDATE students SET name = ?1, email = ?2, age = ?3 WHERE id = ?4")
                .bind(name)
                .bind(email)
                .bind(age)
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }
        Ok(())
    }
}
