// src/jobs/routes.rs

use axum::{routing::get, Router};

use super::handlers;

/// Create the jobs router
pub fn jobs_routes() -> Router {
    Router::new()
        .route("/api/jobs", get(handlers::list_jobs))
        .route("/api/jobs/:id", get(handlers::get_job_by_id))
}
