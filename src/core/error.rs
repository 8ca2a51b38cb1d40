//! Error type system for the user registry
//!
//! Provides a single error enum with HTTP status mapping and a JSON
//! error body carrying a trace ID for correlation with logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Main error type for the user registry
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    // System-level errors
    #[error("System initialization failed: {0}")]
    InitializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    // Request validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("email already registered")]
    DuplicateEmail,

    // Credential / session errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Internal faults
    #[error("Token signing failed: {0}")]
    TokenCreation(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Task error: {0}")]
    TaskError(String),
}

impl RegistryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            RegistryError::InvalidInput(_) | RegistryError::DuplicateEmail => {
                StatusCode::BAD_REQUEST
            }

            // 401 Unauthorized. Bad credentials and missing/invalid sessions
            // share a status so callers cannot distinguish "no such user"
            // from "wrong password".
            RegistryError::Unauthorized(_) | RegistryError::InvalidToken(_) => {
                StatusCode::UNAUTHORIZED
            }

            // 404 Not Found
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            RegistryError::InitializationError(_)
            | RegistryError::ConfigError(_)
            | RegistryError::DatabaseError(_)
            | RegistryError::TokenCreation(_)
            | RegistryError::IoError(_)
            | RegistryError::TaskError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type name for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            RegistryError::InitializationError(_) => "InitializationError",
            RegistryError::ConfigError(_) => "ConfigError",
            RegistryError::DatabaseError(_) => "DatabaseError",
            RegistryError::InvalidInput(_) => "InvalidInput",
            RegistryError::DuplicateEmail => "DuplicateEmail",
            RegistryError::Unauthorized(_) => "Unauthorized",
            RegistryError::InvalidToken(_) => "InvalidToken",
            RegistryError::NotFound(_) => "NotFound",
            RegistryError::TokenCreation(_) => "TokenCreation",
            RegistryError::IoError(_) => "IoError",
            RegistryError::TaskError(_) => "TaskError",
        }
    }
}

/// Error response structure for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique trace ID for this error
    pub trace_id: String,
}

impl ErrorResponse {
    /// Create a new error response with a generated trace ID
    pub fn new(error: String, message: String) -> Self {
        Self {
            error,
            message,
            trace_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an error response from a RegistryError
    pub fn from_error(error: &RegistryError) -> Self {
        Self::new(error.error_type().to_string(), error.to_string())
    }
}

/// Implement IntoResponse for RegistryError to enable automatic error handling in Axum
impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let error_response = ErrorResponse::from_error(&self);

        tracing::error!(
            error_type = self.error_type(),
            trace_id = %error_response.trace_id,
            status_code = %status_code,
            "Request failed: {}",
            self
        );

        (status_code, Json(error_response)).into_response()
    }
}

/// Result type alias for operations that can fail with RegistryError
pub type Result<T> = std::result::Result<T, RegistryError>;
