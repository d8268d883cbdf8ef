// src/resumes/handlers.rs

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Redirect, Response},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::models::*;
use super::services::ResumesService;
use super::validators::{check_resume_file, UploadResumeValidator};
use crate::auth::AuthedUser;
use crate::common::{generate_resume_id, ApiError, AppState, Validator};

/// GET /api/resumes - Own resumes, newest first
pub async fn list_resumes(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<Vec<Resume>>, ApiError> {
    let state = state_lock.read().await.clone();
    let resumes = ResumesService::new(state.db.clone())
        .list_resumes(&authed.id)
        .await?;
    Ok(Json(resumes))
}

/// POST /api/resumes - Upload a base64-encoded resume
pub async fn upload_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<UploadResumeRequest>,
) -> Result<(StatusCode, Json<Resume>), ApiError> {
    UploadResumeValidator.validate(&request).into_result()?;

    let bytes = BASE64
        .decode(request.file_data.trim())
        .map_err(|_| ApiError::BadRequest("file_data is not valid base64".to_string()))?;

    let (mime_type, ext) =
        check_resume_file(&bytes, request.mime_type.as_deref()).map_err(ApiError::BadRequest)?;

    let state = state_lock.read().await.clone();

    let resume_id = generate_resume_id();
    let file_key = format!("resumes/{}/{}.{}", authed.id, resume_id, ext);
    let local_url = format!("/api/resumes/{}/file", resume_id);
    let file_size = bytes.len() as i64;

    let file_url = state
        .storage
        .put(&file_key, bytes, mime_type, &local_url)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %authed.id, "Failed to store resume");
            ApiError::InternalServer("Failed to store resume".to_string())
        })?;

    let resume = ResumesService::new(state.db.clone())
        .create_resume(NewResume {
            id: resume_id,
            user_id: authed.id.clone(),
            name: request.name.trim().to_string(),
            file_url,
            file_key,
            mime_type: mime_type.to_string(),
            file_size,
            is_default: request.is_default,
        })
        .await?;

    info!(user_id = %authed.id, resume_id = %resume.id, mime_type = %mime_type, "Resume uploaded");

    Ok((StatusCode::CREATED, Json(resume)))
}

/// DELETE /api/resumes/:id
pub async fn delete_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(resume_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let resume = ResumesService::new(state.db.clone())
        .delete_resume(&authed.id, &resume_id)
        .await?;

    // The row is gone either way; a stale object is only logged
    if let Err(e) = state.storage.delete(&resume.file_key).await {
        warn!(error = %e, resume_id = %resume_id, "Failed to delete stored resume file");
    }

    Ok(Json(json!({ "success": true })))
}

/// PUT /api/resumes/:id/default
pub async fn set_default_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(resume_id): Path<String>,
) -> Result<Json<Resume>, ApiError> {
    let state = state_lock.read().await.clone();
    let resume = ResumesService::new(state.db.clone())
        .set_default(&authed.id, &resume_id)
        .await?;
    Ok(Json(resume))
}

/// GET /api/resumes/:id/file - Serve a locally stored file, or redirect to S3
pub async fn download_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(resume_id): Path<String>,
) -> Result<Response, ApiError> {
    let state = state_lock.read().await.clone();

    let resume = ResumesService::new(state.db.clone())
        .get_owned(&authed.id, &resume_id)
        .await?;

    if !state.storage.is_local() {
        return Ok(Redirect::temporary(&resume.file_url).into_response());
    }

    let bytes = state
        .storage
        .read_local(&resume.file_key)
        .await
        .map_err(|e| {
            error!(error = %e, resume_id = %resume_id, "Failed to read resume file");
            ApiError::InternalServer("Failed to read resume file".to_string())
        })?
        .ok_or_else(|| ApiError::NotFound("Resume file not found".to_string()))?;

    let content_type = resume
        .mime_type
        .unwrap_or_else(|| "application/octet-stream".to_string());

    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
