// src/templates/handlers.rs

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Json,
};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::models::*;
use super::prompt::{cover_letter_prompt, SYSTEM_PROMPT};
use super::render::{render_template, RenderContext};
use super::services::TemplatesService;
use super::validators::*;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};
use crate::jobs::models::Job;
use crate::jobs::JobsService;
use crate::profile::ProfileService;
use crate::services::LlmError;

async fn require_job(state: &AppState, job_id: &str) -> Result<Job, ApiError> {
    JobsService::new(state.db.clone())
        .find_job(job_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))
}

/// GET /api/templates?type=cover_letter
pub async fn list_templates(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Query(params): Query<TemplateListParams>,
) -> Result<Json<Vec<Template>>, ApiError> {
    let state = state_lock.read().await.clone();
    let templates = TemplatesService::new(state.db.clone())
        .list_templates(&authed.id, params.template_type)
        .await?;
    Ok(Json(templates))
}

/// GET /api/templates/:id
pub async fn get_template(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(template_id): Path<String>,
) -> Result<Json<Template>, ApiError> {
    let state = state_lock.read().await.clone();
    let template = TemplatesService::new(state.db.clone())
        .get_owned(&authed.id, &template_id)
        .await?;
    Ok(Json(template))
}

/// POST /api/templates
pub async fn create_template(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<CreateTemplateRequest>,
) -> Result<(StatusCode, Json<Template>), ApiError> {
    CreateTemplateValidator.validate(&request).into_result()?;
    let state = state_lock.read().await.clone();

    let template = TemplatesService::new(state.db.clone())
        .create_template(&authed.id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// PUT /api/templates/:id
pub async fn update_template(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(template_id): Path<String>,
    Json(request): Json<UpdateTemplateRequest>,
) -> Result<Json<Template>, ApiError> {
    UpdateTemplateValidator.validate(&request).into_result()?;
    let state = state_lock.read().await.clone();

    let template = TemplatesService::new(state.db.clone())
        .update_template(&authed.id, &template_id, request)
        .await?;
    Ok(Json(template))
}

/// DELETE /api/templates/:id
pub async fn delete_template(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(template_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();
    TemplatesService::new(state.db.clone())
        .delete_template(&authed.id, &template_id)
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// POST /api/templates/generate-cover-letter
pub async fn generate_cover_letter(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<GenerateCoverLetterRequest>,
) -> Result<Json<ContentResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let llm = state.llm.clone().ok_or_else(|| {
        ApiError::ServiceUnavailable("Cover letter generation is not configured".to_string())
    })?;

    let job = require_job(&state, &request.job_id).await?;
    let profile = ProfileService::new(state.db.clone())
        .get_profile(&authed.id)
        .await?;

    let tone = request.tone.unwrap_or_default();
    let prompt = cover_letter_prompt(&job, &profile, tone);

    let content = llm.complete(SYSTEM_PROMPT, &prompt).await.map_err(|e| {
        error!(error = %e, user_id = %authed.id, job_id = %job.id, "Cover letter generation failed");
        match e {
            LlmError::RateLimitExceeded => ApiError::ServiceUnavailable(
                "Cover letter generation is busy, try again shortly".to_string(),
            ),
            _ => ApiError::InternalServer("Failed to generate cover letter".to_string()),
        }
    })?;

    info!(
        user_id = %authed.id,
        job_id = %job.id,
        tone = %tone.as_str(),
        length = content.len(),
        "Cover letter generated"
    );

    Ok(Json(ContentResponse { content }))
}

/// POST /api/templates/:id/preview - Render against a job with the applicant's profile
pub async fn preview_template(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(template_id): Path<String>,
    Json(request): Json<PreviewTemplateRequest>,
) -> Result<Json<ContentResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let template = TemplatesService::new(state.db.clone())
        .get_owned(&authed.id, &template_id)
        .await?;
    let job = require_job(&state, &request.job_id).await?;
    let profile = ProfileService::new(state.db.clone())
        .get_profile(&authed.id)
        .await?;

    let context = RenderContext {
        name: profile.name.unwrap_or_default(),
        company: job.company,
        position: job.title,
        skills: profile.skills,
    };

    Ok(Json(ContentResponse {
        content: render_template(&template.content, &context),
    }))
}
