// src/applications/handlers.rs

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::models::*;
use super::services::ApplicationsService;
use super::store::ApplicationStore;
use super::submitter::{BulkApplyError, BulkApplySubmitter, BulkSubmission};
use super::validators::*;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};
use crate::jobs::JobsService;
use crate::profile::ProfileService;
use crate::resumes::ResumesService;
use crate::templates::TemplatesService;

impl From<BulkApplyError> for ApiError {
    fn from(e: BulkApplyError) -> Self {
        ApiError::ValidationError(e.to_string())
    }
}

/// Resume and template references must belong to the caller
async fn check_references(
    state: &AppState,
    owner_id: &str,
    resume_id: Option<&str>,
    template_id: Option<&str>,
) -> Result<(), ApiError> {
    if let Some(resume_id) = resume_id {
        ResumesService::new(state.db.clone())
            .get_owned(owner_id, resume_id)
            .await?;
    }
    if let Some(template_id) = template_id {
        TemplatesService::new(state.db.clone())
            .get_owned(owner_id, template_id)
            .await?;
    }
    Ok(())
}

/// GET /api/applications - Own applications with their jobs
pub async fn list_applications(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Query(params): Query<ApplicationListParams>,
) -> Result<Json<Vec<ApplicationWithJob>>, ApiError> {
    let state = state_lock.read().await.clone();
    let applications = ApplicationsService::new(state.db.clone())
        .list_with_jobs(&authed.id, params.status)
        .await?;
    Ok(Json(applications))
}

/// GET /api/applications/stats
pub async fn application_stats(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<ApplicationStats>, ApiError> {
    let state = state_lock.read().await.clone();
    let stats = ApplicationsService::new(state.db.clone())
        .stats(&authed.id)
        .await?;
    Ok(Json(stats))
}

/// GET /api/applications/:id
pub async fn get_application(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(application_id): Path<String>,
) -> Result<Json<ApplicationWithJob>, ApiError> {
    let state = state_lock.read().await.clone();

    let application = ApplicationsService::new(state.db.clone())
        .get_owned(&authed.id, &application_id)
        .await?;
    let job = JobsService::new(state.db.clone())
        .find_job(&application.job_id)
        .await?;

    Ok(Json(ApplicationWithJob { application, job }))
}

/// POST /api/applications - Create a draft for one job
pub async fn create_application(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), ApiError> {
    CreateApplicationValidator.validate(&request).into_result()?;
    let state = state_lock.read().await.clone();

    JobsService::new(state.db.clone())
        .find_job(&request.job_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

    check_references(
        &state,
        &authed.id,
        request.resume_id.as_deref(),
        request.template_id.as_deref(),
    )
    .await?;

    let application = ApplicationsService::new(state.db.clone())
        .create_draft(&authed.id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// PUT /api/applications/:id - Edit a draft or pending application
pub async fn update_application(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(application_id): Path<String>,
    Json(request): Json<UpdateApplicationRequest>,
) -> Result<Json<Application>, ApiError> {
    UpdateApplicationValidator.validate(&request).into_result()?;
    let state = state_lock.read().await.clone();

    check_references(
        &state,
        &authed.id,
        request.resume_id.as_deref(),
        request.template_id.as_deref(),
    )
    .await?;

    let application = ApplicationsService::new(state.db.clone())
        .update_draft(&authed.id, &application_id, request)
        .await?;

    Ok(Json(application))
}

/// POST /api/applications/:id/submit
pub async fn submit_application(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(application_id): Path<String>,
) -> Result<Json<Application>, ApiError> {
    let state = state_lock.read().await.clone();

    let application = ApplicationsService::new(state.db.clone())
        .submit_application(&application_id, &authed.id)
        .await?;

    info!(user_id = %authed.id, application_id = %application_id, "Application submitted");
    Ok(Json(application))
}

/// POST /api/applications/:id/withdraw
pub async fn withdraw_application(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(application_id): Path<String>,
) -> Result<Json<Application>, ApiError> {
    let state = state_lock.read().await.clone();
    let application = ApplicationsService::new(state.db.clone())
        .withdraw(&authed.id, &application_id)
        .await?;
    Ok(Json(application))
}

/// POST /api/applications/bulk - Apply one resume (and template) to many jobs
pub async fn bulk_apply(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<BulkApplyRequest>,
) -> Result<Json<BulkApplyResponse>, ApiError> {
    let submission = BulkSubmission {
        job_ids: &request.job_ids,
        resume_id: &request.resume_id,
        template_id: request.template_id.as_deref(),
    };
    submission.check()?;

    let state = state_lock.read().await.clone();

    ResumesService::new(state.db.clone())
        .get_owned(&authed.id, &request.resume_id)
        .await?;

    let jobs = JobsService::new(state.db.clone());
    let applications = ApplicationsService::new(state.db.clone());
    let profiles = ProfileService::new(state.db.clone());
    let templates = TemplatesService::new(state.db.clone());

    let outcomes = BulkApplySubmitter::new(&jobs, &applications, &profiles, &templates)
        .bulk_apply(&authed.id, &submission)
        .await?;

    let succeeded = outcomes.iter().filter(|o| o.success).count();
    let failed = outcomes.len() - succeeded;

    Ok(Json(BulkApplyResponse {
        outcomes,
        succeeded,
        failed,
    }))
}

/// PUT /api/admin/applications/:id/status - Reviewer-side status change
pub async fn update_application_status(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(application_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Application>, ApiError> {
    authed.require_admin()?;
    let state = state_lock.read().await.clone();

    let application = ApplicationsService::new(state.db.clone())
        .update_status(&application_id, request.status)
        .await?;

    info!(
        admin_id = %authed.id,
        application_id = %application_id,
        status = %request.status.as_str(),
        "Admin updated application status"
    );
    Ok(Json(application))
}
