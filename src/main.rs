// src/main.rs
use axum::{extract::Extension, http::HeaderValue, middleware, Router};
use dotenv::dotenv;
use reqwest::Client;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::PathBuf;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod admin;
mod applications;
mod auth;
mod common;
mod jobs;
mod logging_middleware;
mod profile;
mod resumes;
mod services;
mod suggestions;
mod templates;

use common::dev_mode::{apply_cli_override, log_dev_mode_status, DevModeConfig};
use common::{AppConfig, AppState};
use services::{LlmService, ResumeStorage};
use suggestions::{ClearbitLookup, RemoteLookup};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;
    info!(
        admin_emails = config.admin_emails.len(),
        storage = ?config.storage_type,
        "Configuration loaded"
    );

    let dev_mode = apply_cli_override(DevModeConfig::from_env());
    log_dev_mode_status(&dev_mode);

    // ========================================================================
    // DATABASE SETUP
    // ========================================================================

    if let Some(path_part) = config.database_url.strip_prefix("sqlite://") {
        let path_without_params = path_part.split('?').next().unwrap_or("");
        if !path_without_params.is_empty() && !path_without_params.starts_with(':') {
            let db_path = PathBuf::from(path_without_params);
            if let Some(parent) = db_path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await?;

    common::migrations::run_migrations(&pool).await?;
    dev_mode.ensure_dev_user(&pool).await?;

    // ========================================================================
    // EXTERNAL ADAPTERS
    // ========================================================================

    let http_client = Client::builder().no_proxy().build()?;

    let company_lookup: Option<Arc<dyn RemoteLookup>> = if config.clearbit_enabled {
        info!(url = %config.clearbit_url, "Remote company lookup enabled");
        Some(Arc::new(ClearbitLookup::new(
            http_client.clone(),
            config.clearbit_url.clone(),
            config.suggestion_timeout,
        )))
    } else {
        info!("Remote company lookup disabled");
        None
    };

    let storage = ResumeStorage::from_config(&config).await;
    if storage.is_local() {
        tokio::fs::create_dir_all(&config.resumes_dir).await?;
    }

    let llm = LlmService::from_config(http_client, &config).map(Arc::new);
    if llm.is_none() {
        warn!("OPENAI_API_KEY not set, cover letter generation disabled");
    }

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let port = config.port;
    let cors_origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let app_state = AppState {
        db: pool,
        config: Arc::new(config),
        dev_mode,
        company_lookup,
        storage: Arc::new(storage),
        llm,
    };

    let shared = Arc::new(RwLock::new(app_state));

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let app = Router::new()
        .merge(auth::auth_routes())
        .merge(jobs::jobs_routes())
        .merge(suggestions::suggestions_routes())
        .merge(applications::applications_routes())
        .merge(resumes::resumes_routes())
        .merge(profile::profile_routes())
        .merge(templates::templates_routes())
        .merge(admin::admin_routes())
        // ====================================================================
        // MIDDLEWARE AND LAYERS
        // ====================================================================
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(shared))
        .layer(
            CorsLayer::new()
                .allow_origin(cors_origins)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                ])
                .allow_credentials(true),
        )
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
