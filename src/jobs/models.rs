// src/jobs/models.rs

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

// ============================================================================
// Closed enumerations stored as TEXT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum LocationType {
    Remote,
    Hybrid,
    Onsite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    Executive,
}

// ============================================================================
// Job Models
// ============================================================================

#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Job {
    pub id: String,
    pub external_id: Option<String>,
    pub job_board_id: Option<String>,
    pub title: String,
    pub company: String,
    pub company_logo: Option<String>,
    pub location: Option<String>,
    pub location_type: LocationType,
    pub salary: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub description: Option<String>,
    pub requirements: Option<Json<Vec<String>>>,
    pub benefits: Option<Json<Vec<String>>>,
    pub employment_type: EmploymentType,
    pub experience_level: Option<ExperienceLevel>,
    pub application_url: Option<String>,
    pub posted_at: Option<String>,
    pub expires_at: Option<String>,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Column list shared by every job SELECT
pub const JOB_COLUMNS: &str = "id, external_id, job_board_id, title, company, company_logo, \
     location, location_type, salary, salary_min, salary_max, description, requirements, \
     benefits, employment_type, experience_level, application_url, posted_at, expires_at, \
     is_active, created_at, updated_at";

/// Insert payload, used by seeding and job-board imports
#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub location_type: LocationType,
    pub salary: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub employment_type: EmploymentType,
    pub experience_level: Option<ExperienceLevel>,
    pub application_url: Option<String>,
    pub job_board_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JobFilters {
    pub search: Option<String>,
    pub location: Option<String>,
    pub location_type: Option<LocationType>,
    pub employment_type: Option<EmploymentType>,
    pub experience_level: Option<ExperienceLevel>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Serialize, Debug)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub total: i64,
}
