//! API handlers

pub mod users;

pub use users::*;

use crate::db::repository::UserRepository;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared application state for handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repo: Arc<UserRepository>,
    /// Process-wide session-token signing key, read-only after startup
    pub jwt_secret: Arc<String>,
}

/// Handler for GET / - Welcome message with the route listing
pub async fn welcome() -> &'static str {
    "\
User registry with credential-based login.

Routes available:
- GET    /                  : Welcome message
- GET    /health            : Health check
- POST   /users/register    : Register a new user
- POST   /users/login       : User login (sets session cookie)
- GET    /users/logout      : User logout (clears session cookie)
- GET    /users             : List users (requires session)
- POST   /users             : Create a user (requires session)
- GET    /users/{id}        : Get user by ID (requires session)
- PUT    /users/{id}        : Update user by ID (requires session)
- DELETE /users/{id}        : Delete user by ID (requires session)
"
}

/// Handler for GET /health - Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}
