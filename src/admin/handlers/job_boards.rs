// src/admin/handlers/job_boards.rs

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::admin::models::*;
use crate::admin::services::AdminService;
use crate::admin::validators::{CreateJobBoardValidator, UpdateJobBoardValidator};
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};

/// GET /api/admin/job-boards
pub async fn list_job_boards(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<Vec<JobBoard>>, ApiError> {
    authed.require_admin()?;
    let state = state_lock.read().await.clone();

    let boards = AdminService::new(state.db.clone()).list_job_boards().await?;
    Ok(Json(boards))
}

/// POST /api/admin/job-boards
pub async fn create_job_board(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<CreateJobBoardRequest>,
) -> Result<(StatusCode, Json<JobBoard>), ApiError> {
    authed.require_admin()?;
    CreateJobBoardValidator.validate(&request).into_result()?;
    let state = state_lock.read().await.clone();

    let board = AdminService::new(state.db.clone())
        .create_job_board(request)
        .await?;
    Ok((StatusCode::CREATED, Json(board)))
}

/// PUT /api/admin/job-boards/:id
pub async fn update_job_board(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(board_id): Path<String>,
    Json(request): Json<UpdateJobBoardRequest>,
) -> Result<Json<JobBoard>, ApiError> {
    authed.require_admin()?;
    UpdateJobBoardValidator.validate(&request).into_result()?;
    let state = state_lock.read().await.clone();

    let board = AdminService::new(state.db.clone())
        .update_job_board(&board_id, request)
        .await?;
    Ok(Json(board))
}

/// DELETE /api/admin/job-boards/:id
pub async fn delete_job_board(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(board_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    authed.require_admin()?;
    let state = state_lock.read().await.clone();

    AdminService::new(state.db.clone())
        .delete_job_board(&board_id)
        .await?;
    Ok(Json(json!({ "success": true })))
}
