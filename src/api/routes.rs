//! API routes

use crate::api::handlers::{
    create_user, delete_user, get_user, health_check, list_users, update_user, welcome, AppState,
};
use crate::auth::handlers::{login, logout, register};
use crate::auth::middleware::require_session;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

/// Build the API routes
///
/// Registration, login, and logout stay public; everything touching the
/// records store sits behind the session gate.
pub fn build_routes(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/logout", get(logout));

    let protected_routes = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(middleware::from_fn(require_session));

    public_routes.merge(protected_routes).with_state(state)
}
