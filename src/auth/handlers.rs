//! Authentication handlers
//!
//! Sign-in happens outside this service; these endpoints only read the
//! session established by the bearer token.

use axum::extract::{Extension, Json};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::extractors::AuthedUser;
use super::models::{MeResponse, User};
use crate::common::{ApiError, AppState};

/// GET /api/auth/me
pub async fn me_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<MeResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    if state.dev_mode.is_enabled() {
        return Ok(Json(MeResponse {
            user: state.dev_mode.dev_user(),
            is_admin: authed.is_admin,
        }));
    }

    let user = sqlx::query_as::<_, User>("SELECT id, email, name, created_at FROM users WHERE id = ?")
        .bind(&authed.id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(MeResponse {
        user,
        is_admin: authed.is_admin,
    }))
}

/// POST /api/auth/logout
///
/// Tokens are stateless, so the client simply drops it.
pub async fn logout_handler(authed: AuthedUser) -> Result<Json<serde_json::Value>, ApiError> {
    info!(user_id = %authed.id, "User logout");
    Ok(Json(json!({ "success": true })))
}
