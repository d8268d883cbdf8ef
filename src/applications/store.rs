//! Storage seams consumed by the bulk submitter.
//!
//! The SQLite services implement these; tests substitute in-memory fakes.

use async_trait::async_trait;
use thiserror::Error;
use tracing::error;

use super::models::{Application, NewApplication};
use crate::common::ApiError;
use crate::jobs::models::Job;
use crate::templates::models::Template;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvalidState(String),
}

impl StoreError {
    /// Maps a UNIQUE violation to `Conflict(message)`, anything else to `Database`
    pub fn from_insert(e: sqlx::Error, message: &str) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Conflict(message.to_string())
            }
            _ => StoreError::Database(e),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Database(e) => {
                error!(error = %e, "Database error");
                ApiError::DatabaseError(e)
            }
            StoreError::NotFound(what) => ApiError::NotFound(format!("{} not found", what)),
            StoreError::Conflict(msg) => ApiError::Conflict(msg),
            StoreError::InvalidState(msg) => ApiError::BadRequest(msg),
        }
    }
}

/// The applicant fields a cover letter can reference
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerProfile {
    pub name: Option<String>,
    pub skills: Vec<String>,
}

#[async_trait]
pub trait JobStore: Send + Sync {
    async fn get_job(&self, job_id: &str) -> Result<Option<Job>, StoreError>;
}

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn applications_for_owner(&self, owner_id: &str) -> Result<Vec<Application>, StoreError>;

    async fn create_application(&self, new: NewApplication) -> Result<Application, StoreError>;

    /// Moves a draft or pending application to `submitted`
    async fn submit_application(&self, id: &str, owner_id: &str)
        -> Result<Application, StoreError>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn owner_profile(&self, owner_id: &str) -> Result<Option<OwnerProfile>, StoreError>;
}

#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn get_template(&self, template_id: &str) -> Result<Option<Template>, StoreError>;
}
