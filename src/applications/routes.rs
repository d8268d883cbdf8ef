// src/applications/routes.rs

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers;

pub fn applications_routes() -> Router {
    Router::new()
        .route(
            "/api/applications",
            get(handlers::list_applications).post(handlers::create_application),
        )
        .route("/api/applications/stats", get(handlers::application_stats))
        .route("/api/applications/bulk", post(handlers::bulk_apply))
        .route(
            "/api/applications/:id",
            get(handlers::get_application).put(handlers::update_application),
        )
        .route(
            "/api/applications/:id/submit",
            post(handlers::submit_application),
        )
        .route(
            "/api/applications/:id/withdraw",
            post(handlers::withdraw_application),
        )
        .route(
            "/api/admin/applications/:id/status",
            put(handlers::update_application_status),
        )
}
