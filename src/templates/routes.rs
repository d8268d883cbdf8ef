// src/templates/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

pub fn templates_routes() -> Router {
    Router::new()
        .route(
            "/api/templates",
            get(handlers::list_templates).post(handlers::create_template),
        )
        .route(
            "/api/templates/generate-cover-letter",
            post(handlers::generate_cover_letter),
        )
        .route(
            "/api/templates/:id",
            get(handlers::get_template)
                .put(handlers::update_template)
                .delete(handlers::delete_template),
        )
        .route("/api/templates/:id/preview", post(handlers::preview_template))
}
