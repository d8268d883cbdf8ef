// src/admin/routes.rs

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{dashboard, job_boards};

pub fn admin_routes() -> Router {
    Router::new()
        .route("/api/admin/stats", get(dashboard::get_admin_stats))
        .route("/api/admin/seed-jobs", post(dashboard::seed_jobs))
        .route(
            "/api/admin/job-boards",
            get(job_boards::list_job_boards).post(job_boards::create_job_board),
        )
        .route(
            "/api/admin/job-boards/:id",
            put(job_boards::update_job_board).delete(job_boards::delete_job_board),
        )
}
