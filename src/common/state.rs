// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::common::config::AppConfig;
use crate::common::dev_mode::DevModeConfig;
use crate::services::{LlmService, ResumeStorage};
use crate::suggestions::RemoteLookup;

/// Application state containing database pool, external adapters, and configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub dev_mode: DevModeConfig,
    /// Remote company lookup; `None` when disabled by configuration
    pub company_lookup: Option<Arc<dyn RemoteLookup>>,
    pub storage: Arc<ResumeStorage>,
    /// `None` when no API key is configured
    pub llm: Option<Arc<LlmService>>,
}

impl AppState {
    pub fn is_admin_email(&self, email: &str) -> bool {
        self.config.admin_emails.contains(&email.to_lowercase())
    }
}
