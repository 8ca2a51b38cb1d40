//! Core module
//!
//! Shared infrastructure: error types, configuration, and logging.

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{RegistryError, Result};
pub use logging::Logger;
