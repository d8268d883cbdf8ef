use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::HashMap;

use crate::jobs::models::Job;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Draft,
    Pending,
    Submitted,
    Viewed,
    Interview,
    Offered,
    Rejected,
    Withdrawn,
}

#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Application {
    pub id: String,
    pub user_id: String,
    pub job_id: String,
    pub resume_id: Option<String>,
    pub template_id: Option<String>,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub custom_answers: Option<Json<HashMap<String, String>>>,
    pub applied_at: Option<String>,
    pub last_status_update: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

pub const APPLICATION_COLUMNS: &str = "id, user_id, job_id, resume_id, template_id, status, \
     cover_letter, custom_answers, applied_at, last_status_update, notes, created_at, updated_at";

/// Insert payload for a new application row
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub user_id: String,
    pub job_id: String,
    pub resume_id: Option<String>,
    pub template_id: Option<String>,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub custom_answers: Option<HashMap<String, String>>,
    pub notes: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ApplicationWithJob {
    #[serde(flatten)]
    pub application: Application,
    pub job: Option<Job>,
}

#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    pub job_id: String,
    pub resume_id: Option<String>,
    pub template_id: Option<String>,
    pub cover_letter: Option<String>,
    pub custom_answers: Option<HashMap<String, String>>,
    pub notes: Option<String>,
}

/// Draft fields the owner may edit; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdateApplicationRequest {
    pub resume_id: Option<String>,
    pub template_id: Option<String>,
    pub cover_letter: Option<String>,
    pub custom_answers: Option<HashMap<String, String>>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ApplicationStatus,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationListParams {
    pub status: Option<ApplicationStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkApplyRequest {
    pub job_ids: Vec<String>,
    pub resume_id: String,
    pub template_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BulkApplyResponse {
    pub outcomes: Vec<super::submitter::ApplyOutcome>,
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct ApplicationStats {
    pub total: i64,
    pub by_status: HashMap<ApplicationStatus, i64>,
}
