//! In-Memory Storage Backend
//!
//! Map-backed store satisfying the same capability contract as the
//! relational backend. Used by tests as a drop-in fake; also handy for
//! running the service without a database file.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::Student;
use crate::storage::{Result, StorageError, StudentStore};

// == Memory Store ==
/// In-memory student store with backend-assigned incrementing ids.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Records plus the id counter, guarded together
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    students: BTreeMap<i64, Student>,
    next_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            students: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store; the first created record gets id 1.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn create(&self, name: &str, email: &str, age: i64) -> Result<i64> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        inner.students.insert(
            id,
            Student {
                id,
                name: name.to_string(),
                email: email.to_string(),
                age,
            },
        );

        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<Student> {
        self.inner
            .read()
            .await
            .students
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Student>> {
        Ok(self.inner.read().await.students.values().cloned().collect())
    }

    async fn update(&self, id: i64, name: &str, email: &str, age: i64) -> Result<()> {
        let mut inner = self.inner.write().await;
        let student = inner
            .students
            .get_mut(&id)
            .ok_or(StorageError::NotFound(id))?;

        student.name = name.to_string();
        student.email = email.to_string();
        student.age = age;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner
            .students
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound(id))
    }
}
