//! Database module
//!
//! Connection pool management, repository pattern implementations,
//! schema migrations, and data models.

pub mod manager;
pub mod migrations;
pub mod models;
pub mod repository;

pub use manager::DatabaseManager;
pub use models::User;
pub use repository::{Repository, UserRepository};
