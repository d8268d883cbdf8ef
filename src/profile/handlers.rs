// src/profile/handlers.rs

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::models::*;
use super::services::ProfileService;
use super::validators::UpdateProfileValidator;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};

/// GET /api/profile
pub async fn get_profile(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<Profile>, ApiError> {
    let state = state_lock.read().await.clone();
    let profile = ProfileService::new(state.db.clone())
        .get_profile(&authed.id)
        .await?;
    Ok(Json(profile))
}

/// PUT /api/profile - Partial upsert
pub async fn update_profile(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    UpdateProfileValidator.validate(&request).into_result()?;
    let state = state_lock.read().await.clone();

    let profile = ProfileService::new(state.db.clone())
        .update_profile(&authed.id, request)
        .await?;
    Ok(Json(profile))
}

/// POST /api/profile/targets/:kind - Add one company or role
pub async fn add_target(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(kind): Path<TargetKind>,
    Json(request): Json<TargetRequest>,
) -> Result<Json<TargetListResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let response = ProfileService::new(state.db.clone())
        .add_target(&authed.id, kind, &request.value)
        .await?;

    debug!(user_id = %authed.id, kind = ?kind, added = response.changed, "Target add");
    Ok(Json(response))
}

/// DELETE /api/profile/targets/:kind - Remove one company or role
pub async fn remove_target(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(kind): Path<TargetKind>,
    Json(request): Json<TargetRequest>,
) -> Result<Json<TargetListResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let response = ProfileService::new(state.db.clone())
        .remove_target(&authed.id, kind, &request.value)
        .await?;

    debug!(user_id = %authed.id, kind = ?kind, removed = response.changed, "Target remove");
    Ok(Json(response))
}
