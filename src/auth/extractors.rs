//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use super::models::{Claims, User};
use crate::common::{safe_email_log, ApiError, AppState};

/// Authenticated user extractor
///
/// Validates the bearer token and loads the user row. The admin flag comes
/// from the configured admin e-mail list. In dev mode the fixed dev user is
/// returned without looking at the request.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
}

impl AuthedUser {
    pub fn require_admin(&self) -> Result<(), ApiError> {
        if self.is_admin {
            Ok(())
        } else {
            warn!(user_id = %self.id, "Non-admin user attempted admin operation");
            Err(ApiError::Forbidden("Admin access required".to_string()))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        if app_state.dev_mode.is_enabled() {
            let dev_user = app_state.dev_mode.dev_user();
            let is_admin =
                app_state.dev_mode.user_is_admin || app_state.is_admin_email(&dev_user.email);

            debug!(
                user_id = %dev_user.id,
                email = %safe_email_log(&dev_user.email),
                is_admin = is_admin,
                "DEV MODE: Authentication bypassed"
            );

            return Ok(AuthedUser {
                id: dev_user.id,
                email: dev_user.email,
                is_admin,
            });
        }

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let token = match token {
            Some(t) => t,
            None => {
                warn!("Authentication failed: missing Authorization header");
                return Err(ApiError::Unauthorized("missing auth".into()));
            }
        };

        // "Bearer <token>" or the raw token
        let bare_token = token.strip_prefix("Bearer ").unwrap_or(&token);

        let decoded = match decode::<Claims>(
            bare_token,
            &DecodingKey::from_secret(app_state.config.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        ) {
            Ok(d) => d,
            Err(e) => {
                warn!(error = %e, "JWT token validation failed");
                return Err(ApiError::Unauthorized("invalid token".into()));
            }
        };

        let user_id = decoded.claims.sub;

        let user: Option<User> =
            sqlx::query_as::<_, User>("SELECT id, email, name, created_at FROM users WHERE id = ?")
                .bind(&user_id)
                .fetch_optional(&app_state.db)
                .await
                .map_err(|e| {
                    error!(
                        error = %e,
                        user_id = %user_id,
                        "Database error during user lookup in authentication"
                    );
                    ApiError::DatabaseError(e)
                })?;

        match user {
            Some(u) => {
                let is_admin = app_state.is_admin_email(&u.email);
                debug!(
                    user_id = %u.id,
                    email = %safe_email_log(&u.email),
                    is_admin = is_admin,
                    "User authenticated"
                );
                Ok(AuthedUser {
                    id: u.id,
                    email: u.email,
                    is_admin,
                })
            }
            None => {
                warn!(user_id = %user_id, "Authentication failed: user not found in database");
                Err(ApiError::Unauthorized("user not found".into()))
            }
        }
    }
}
