//! User CRUD handlers
//!
//! All of these sit behind the authorization gate. Responses carry the
//! public user projection; the stored digest is never serialized.

use crate::api::handlers::AppState;
use crate::auth::models::UserResponse;
use crate::auth::password::hash_secret;
use crate::core::error::{RegistryError, Result};
use crate::db::models::User;
use crate::db::repository::Repository;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

/// Request body for creating a user directly
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for updating a user
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Handler for GET /users - List all users
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_repo.find_all().await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(users))
}

/// Handler for GET /users/:id - Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    let user = state
        .user_repo
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| RegistryError::NotFound(format!("User {} not found", user_id)))?;

    Ok(Json(UserResponse::from(user)))
}

/// Handler for POST /users - Create a new user
///
/// Unlike registration, this path applies no format validation; it is the
/// raw create operation of the records store.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!(email = %req.email, "Creating user");

    let password_digest = hash_secret(&format!("{}{}", req.password, req.email));

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        email: req.email,
        password_digest,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    state.user_repo.create(&user).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Handler for PUT /users/:id - Update user by ID
///
/// Partial update: only the provided fields change. A new password is
/// re-hashed against the user's email after any email change has been
/// applied, so the digest stays comparable at login.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse> {
    let mut user = state
        .user_repo
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| RegistryError::NotFound(format!("User {} not found", user_id)))?;

    if let Some(name) = req.name {
        user.name = name;
    }

    if let Some(email) = req.email {
        user.email = email;
    }

    if let Some(password) = req.password {
        if !password.is_empty() {
            user.password_digest = hash_secret(&format!("{}{}", password, user.email));
        }
    }

    state.user_repo.update(&user).await?;

    tracing::info!(user_id = %user.id, "User updated");

    Ok(Json(UserResponse::from(user)))
}

/// Handler for DELETE /users/:id - Delete user by ID
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    state.user_repo.delete(&user_id).await?;

    tracing::info!(user_id = %user_id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
