// src/profile/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

pub fn profile_routes() -> Router {
    Router::new()
        .route(
            "/api/profile",
            get(handlers::get_profile).put(handlers::update_profile),
        )
        .route(
            "/api/profile/targets/:kind",
            post(handlers::add_target).delete(handlers::remove_target),
        )
}
