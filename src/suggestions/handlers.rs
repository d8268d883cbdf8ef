use axum::{
    extract::{Extension, Query},
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::catalog::{COMPANIES, JOB_ROLES};
use super::engine::{suggest, StaticList, SuggestionQuery, Suggestions};
use super::models::SuggestionParams;
use super::roles::RoleCatalog;
use super::validators::SuggestionParamsValidator;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};

/// GET /api/suggestions/companies?q=
pub async fn suggest_companies(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<Suggestions>, ApiError> {
    SuggestionParamsValidator.validate(&params).into_result()?;
    let state = state_lock.read().await.clone();

    let query = SuggestionQuery::new(&params.q);
    let result = suggest(
        &query,
        &StaticList(COMPANIES),
        state.company_lookup.as_deref(),
    )
    .await;

    debug!(
        user_id = %authed.id,
        query = %query.normalized(),
        count = result.suggestions.len(),
        augmented = result.augmented,
        "Company suggestions"
    );

    Ok(Json(result))
}

/// GET /api/suggestions/roles?q=
pub async fn suggest_roles(
    authed: AuthedUser,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<Suggestions>, ApiError> {
    SuggestionParamsValidator.validate(&params).into_result()?;

    let query = SuggestionQuery::new(&params.q);
    let result = suggest(&query, &RoleCatalog::new(JOB_ROLES), None).await;

    debug!(
        user_id = %authed.id,
        query = %query.normalized(),
        count = result.suggestions.len(),
        "Role suggestions"
    );

    Ok(Json(result))
}
