//! Students API - a minimal CRUD service over a single student entity
//!
//! Accepts JSON requests, validates their shape, and delegates to a storage
//! capability that any persistence backend can satisfy.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use api::AppState;
pub use config::Config;
