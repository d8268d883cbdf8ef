// src/admin/handlers/dashboard.rs

use axum::{extract::Extension, response::Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::admin::models::{AdminStats, SeedResponse};
use crate::admin::services::AdminService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// GET /api/admin/stats
pub async fn get_admin_stats(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<AdminStats>, ApiError> {
    authed.require_admin()?;
    let state = state_lock.read().await.clone();

    let stats = AdminService::new(state.db.clone()).stats().await?;
    Ok(Json(stats))
}

/// POST /api/admin/seed-jobs
pub async fn seed_jobs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<SeedResponse>, ApiError> {
    authed.require_admin()?;
    let state = state_lock.read().await.clone();

    let count = AdminService::new(state.db.clone()).seed_demo_jobs().await?;
    info!(admin_id = %authed.id, count = count, "Admin seeded demo jobs");

    Ok(Json(SeedResponse {
        success: true,
        count,
    }))
}
