//! Database models
//!
//! Data structures representing database tables

use serde::{Deserialize, Serialize};

/// User record in the database
///
/// The password_digest field holds the SHA-256 hex digest of
/// password + email and never leaves the persistence boundary; API
/// responses use the public projection in `auth::models`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_digest: String,
    pub created_at: String,
}
