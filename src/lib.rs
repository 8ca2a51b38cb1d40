//! User Registry Backend Library
//!
//! A credential-based authentication layer in front of a user-records
//! store, exposed over HTTP with cookie-carried sessions.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;

// Re-export commonly used types
pub use api::ApiServer;
pub use crate::core::Config;
pub use db::DatabaseManager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
