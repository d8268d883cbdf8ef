//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `GET /api/auth/me` - Current user and admin flag
/// - `POST /api/auth/logout` - Logout (client-side token removal)
pub fn auth_routes() -> Router {
    Router::new()
        .route("/api/auth/me", get(handlers::me_handler))
        .route("/api/auth/logout", post(handlers::logout_handler))
}
