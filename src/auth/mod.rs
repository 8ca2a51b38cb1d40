//! Authentication module
//!
//! Credential hashing, session-token issuance and verification, the
//! session-cookie transport, the authorization gate, and the
//! register/login/logout flow handlers.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod session;
pub mod token;

pub use handlers::{login, logout, register};
pub use middleware::require_session;
pub use password::hash_secret;
pub use token::{issue_token, verify_token, Claims};
