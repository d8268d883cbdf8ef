//! Shared fixtures for router and service tests

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Extension, Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

use super::config::AppConfig;
use super::dev_mode::DevModeConfig;
use super::migrations::test_pool;
use super::state::AppState;
use crate::services::ResumeStorage;

/// App state on a fresh in-memory database, authenticated as the dev user
pub async fn dev_state(is_admin: bool) -> AppState {
    let db = test_pool().await;
    let dev_mode = DevModeConfig {
        enabled: true,
        user_email: "dev@test.com".to_string(),
        user_name: "Dev User".to_string(),
        user_is_admin: is_admin,
    };
    dev_mode.ensure_dev_user(&db).await.expect("dev user");

    state_with(db, dev_mode)
}

/// App state with dev mode off, so requests need a bearer token
pub async fn token_state() -> AppState {
    let dev_mode = DevModeConfig {
        enabled: false,
        user_email: String::new(),
        user_name: String::new(),
        user_is_admin: false,
    };
    state_with(test_pool().await, dev_mode)
}

fn state_with(db: SqlitePool, dev_mode: DevModeConfig) -> AppState {
    let config = AppConfig::from_lookup(|key| match key {
        "JWT_SECRET" => Some("test_secret".to_string()),
        "ADMIN_EMAILS" => Some("admin@example.com".to_string()),
        _ => None,
    })
    .expect("test config");

    let resumes_dir = std::env::temp_dir().join(format!(
        "apply_api_test_{}",
        super::id_generator::generate_resume_id()
    ));

    AppState {
        db,
        config: Arc::new(config),
        dev_mode,
        company_lookup: None,
        storage: Arc::new(ResumeStorage::local(resumes_dir)),
        llm: None,
    }
}

pub fn app(router: Router, state: AppState) -> Router {
    router.layer(Extension(Arc::new(RwLock::new(state))))
}

/// Sends one request through `router` and decodes the JSON body.
///
/// An empty body becomes Null; a non-JSON body (extractor rejections) a string.
pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = router.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, json)
}

/// Signs a 24 hour HS256 token for `user_id`, as the sign-in service does
pub fn issue_token(user_id: &str, secret: &str) -> String {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    let claims = crate::auth::models::Claims {
        sub: user_id.to_string(),
        exp: (chrono::Utc::now() + chrono::Duration::hours(24)).timestamp() as usize,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("token")
}

/// Minimal active job for seeding tests
pub fn new_job(title: &str, company: &str) -> crate::jobs::models::NewJob {
    use crate::jobs::models::{EmploymentType, LocationType, NewJob};

    NewJob {
        title: title.to_string(),
        company: company.to_string(),
        location: None,
        location_type: LocationType::Remote,
        salary: None,
        salary_min: None,
        salary_max: None,
        description: None,
        requirements: Vec::new(),
        benefits: Vec::new(),
        employment_type: EmploymentType::FullTime,
        experience_level: None,
        application_url: None,
        job_board_id: None,
    }
}
