// src/resumes/routes.rs

use axum::{
    routing::{delete, get, put},
    Router,
};

use super::handlers;

pub fn resumes_routes() -> Router {
    Router::new()
        .route(
            "/api/resumes",
            get(handlers::list_resumes).post(handlers::upload_resume),
        )
        .route("/api/resumes/:id", delete(handlers::delete_resume))
        .route("/api/resumes/:id/default", put(handlers::set_default_resume))
        .route("/api/resumes/:id/file", get(handlers::download_resume))
}
