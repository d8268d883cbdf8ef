// src/common/config.rs
//! Environment-driven configuration for the server and its external adapters

use anyhow::Context;
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CLEARBIT_URL: &str = "https://autocomplete.clearbit.com/v1/companies/suggest";

/// Where uploaded resume files are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    Local,
    S3,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub admin_emails: HashSet<String>,
    pub cors_origins: Vec<String>,
    pub resumes_dir: PathBuf,
    pub storage_type: StorageType,
    pub s3_bucket: Option<String>,
    pub aws_region: Option<String>,
    pub clearbit_enabled: bool,
    pub clearbit_url: String,
    pub suggestion_timeout: Duration,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = get("PORT", "8080")
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let suggestion_timeout_ms = get("SUGGESTION_TIMEOUT_MS", "2000")
            .parse::<u64>()
            .context("SUGGESTION_TIMEOUT_MS must be a number of milliseconds")?;

        let admin_emails: HashSet<String> = get("ADMIN_EMAILS", "")
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let cors_origins = get(
            "CORS_ORIGINS",
            "http://localhost:3000,http://localhost:5173",
        )
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

        let storage_type = match get("STORAGE_TYPE", "local").to_lowercase().as_str() {
            "s3" => StorageType::S3,
            "local" => StorageType::Local,
            other => anyhow::bail!("STORAGE_TYPE must be 'local' or 's3', got '{}'", other),
        };

        let s3_bucket = non_empty("AWS_S3_BUCKET_NAME");
        if storage_type == StorageType::S3 && s3_bucket.is_none() {
            anyhow::bail!("AWS_S3_BUCKET_NAME is required when STORAGE_TYPE=s3");
        }

        Ok(Self {
            database_url: get("DATABASE_URL", "sqlite://apply_api.db"),
            port,
            jwt_secret: get("JWT_SECRET", "replace_with_strong_secret"),
            admin_emails,
            cors_origins,
            resumes_dir: PathBuf::from(get("RESUMES_DIR", "./uploads/resumes")),
            storage_type,
            s3_bucket,
            aws_region: non_empty("AWS_REGION"),
            clearbit_enabled: get("CLEARBIT_ENABLED", "true").to_lowercase() == "true",
            clearbit_url: get("CLEARBIT_URL", DEFAULT_CLEARBIT_URL),
            suggestion_timeout: Duration::from_millis(suggestion_timeout_ms),
            openai_api_key: non_empty("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            openai_model: get("OPENAI_MODEL", "gpt-4o-mini"),
        })
    }
}
