// src/jobs/handlers/public.rs

use axum::{
    extract::{Extension, Path, Query},
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::common::{ApiError, AppState, Validator};
use crate::jobs::models::*;
use crate::jobs::services::JobsService;
use crate::jobs::validators::*;

/// GET /api/jobs - List active jobs with filters and pagination
pub async fn list_jobs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(filters): Query<JobFilters>,
) -> Result<Json<JobListResponse>, ApiError> {
    JobFiltersValidator.validate(&filters).into_result()?;
    let state = state_lock.read().await.clone();

    let (jobs, total) = JobsService::new(state.db.clone()).list_jobs(&filters).await?;

    debug!(
        job_count = jobs.len(),
        total = total,
        limit = filters.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        offset = filters.offset.unwrap_or(0),
        "Loaded jobs list"
    );

    Ok(Json(JobListResponse { jobs, total }))
}

/// GET /api/jobs/:id - Get a specific job by ID
pub async fn get_job_by_id(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, ApiError> {
    let state = state_lock.read().await.clone();

    let job = JobsService::new(state.db.clone())
        .find_job(&job_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Job not found: {}", job_id)))?;

    debug!(job_id = %job_id, job_title = %job.title, "Loaded job details");

    Ok(Json(job))
}
