//! Authentication flow handlers

use crate::api::handlers::AppState;
use crate::auth::models::{LoginRequest, MessageResponse, RegisterRequest, UserResponse};
use crate::auth::password::hash_secret;
use crate::auth::session;
use crate::auth::token::issue_token;
use crate::core::error::{RegistryError, Result};
use crate::db::models::User;
use crate::db::repository::Repository;
use axum::{extract::State, http::header, http::StatusCode, response::IntoResponse, Json};
use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email regex must compile")
    })
}

/// Validate registration input: email shape plus password rules
/// (minimum 8 characters, at least one uppercase letter, one lowercase
/// letter, and one digit).
pub fn validate_registration(email: &str, password: &str) -> Result<()> {
    if !email_re().is_match(email) {
        return Err(RegistryError::InvalidInput("invalid email format".to_string()));
    }

    if password.len() < 8 {
        return Err(RegistryError::InvalidInput(
            "password must be at least 8 characters long".to_string(),
        ));
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_uppercase || !has_lowercase || !has_digit {
        return Err(RegistryError::InvalidInput(
            "password must contain at least one uppercase letter, one lowercase letter, and one number"
                .to_string(),
        ));
    }

    Ok(())
}

/// Handler for POST /users/register - User registration
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!(email = %req.email, "User registration attempt");

    validate_registration(&req.email, &req.password)?;

    if state.user_repo.find_by_email(&req.email).await?.is_some() {
        tracing::warn!(email = %req.email, "Registration with duplicate email");
        return Err(RegistryError::DuplicateEmail);
    }

    let password_digest = hash_secret(&format!("{}{}", req.password, req.email));

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        email: req.email,
        password_digest,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    state.user_repo.create(&user).await?;

    tracing::info!(user_id = %user.id, email = %user.email, "User registered successfully");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Handler for POST /users/login - User login
///
/// An unknown email and a wrong password produce the identical error, so
/// responses do not reveal whether an account exists.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!(email = %req.email, "Login attempt");

    let user = state
        .user_repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| RegistryError::Unauthorized("invalid email or password".to_string()))?;

    let submitted_digest = hash_secret(&format!("{}{}", req.password, user.email));
    if submitted_digest != user.password_digest {
        tracing::warn!(email = %req.email, "Invalid password");
        return Err(RegistryError::Unauthorized(
            "invalid email or password".to_string(),
        ));
    }

    let token = issue_token(&user.id, &user.email, &state.jwt_secret)?;

    tracing::info!(user_id = %user.id, email = %user.email, "Login successful");

    Ok((
        [(header::SET_COOKIE, session::set_cookie(&token))],
        Json(MessageResponse {
            message: "login successful".to_string(),
        }),
    ))
}

/// Handler for GET /users/logout - User logout
///
/// Clears the session cookie unconditionally; no token verification and
/// no persistence interaction. Always succeeds.
pub async fn logout() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, session::clear_cookie())],
        Json(MessageResponse {
            message: "logout successful".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        let result = validate_registration("a@x.com", "short1A");
        assert!(matches!(result, Err(RegistryError::InvalidInput(_))));
    }

    #[test]
    fn test_password_missing_uppercase() {
        let result = validate_registration("a@x.com", "alllower1");
        assert!(matches!(result, Err(RegistryError::InvalidInput(_))));
    }

    #[test]
    fn test_password_missing_digit() {
        let result = validate_registration("a@x.com", "NoDigitsHere");
        assert!(matches!(result, Err(RegistryError::InvalidInput(_))));
    }

    #[test]
    fn test_password_valid() {
        assert!(validate_registration("a@x.com", "Valid123").is_ok());
    }

    #[test]
    fn test_email_format() {
        assert!(validate_registration("not-an-email", "Valid123").is_err());
        assert!(validate_registration("missing@tld", "Valid123").is_err());
        assert!(validate_registration("ok@example.com", "Valid123").is_ok());
    }
}
