//! Request DTOs for the students API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Field-keyed validation messages, one entry per offending field.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Request body for creating or updating a student (POST /api/students,
/// PUT /api/students/:id)
///
/// # Fields
/// - `name`: the student's name, must be non-empty
/// - `email`: the student's email address, must be well-formed
/// - `age`: the student's age in years, must be non-negative
///
/// A client-supplied `id` field is ignored; ids are assigned by storage.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentPayload {
    /// Student name
    pub name: String,
    /// Email address
    pub email: String,
    /// Age in years
    pub age: i64,
}

impl StudentPayload {
    /// Validates the payload data.
    ///
    /// Returns a map with one message per invalid field, or Ok if every
    /// field passes.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "name cannot be empty".to_string());
        }
        if !is_well_formed_email(&self.email) {
            errors.insert(
                "email",
                format!("'{}' is not a valid email address", self.email),
            );
        }
        if self.age < 0 {
            errors.insert("age", "age cannot be negative".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Syntactic email check: exactly one '@', a non-empty local part, a dotted
/// domain, and no whitespace anywhere.
fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}
