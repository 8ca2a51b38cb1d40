//! REST API module
//!
//! HTTP server, routing, shared request middleware, and handlers.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use middleware::{trace_id_middleware, TraceId, TRACE_ID_HEADER};
pub use server::ApiServer;
