// src/profile/models.rs

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub field: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
}

/// Raw `profiles` row
#[derive(FromRow, Debug, Clone)]
pub struct ProfileRow {
    pub user_id: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub github_url: Option<String>,
    pub skills: Option<Json<Vec<String>>>,
    pub experience: Option<Json<Vec<ExperienceEntry>>>,
    pub education: Option<Json<Vec<EducationEntry>>>,
    pub target_companies: Option<Json<Vec<String>>>,
    pub target_roles: Option<Json<Vec<String>>>,
    pub updated_at: Option<String>,
}

pub const PROFILE_COLUMNS: &str = "user_id, phone, location, headline, summary, linkedin_url, \
     portfolio_url, github_url, skills, experience, education, target_companies, target_roles, updated_at";

/// The user joined with their profile row; a user without a row gets empty fields
#[derive(Serialize, Debug, Clone, Default)]
pub struct Profile {
    pub user_id: String,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub github_url: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub target_companies: Vec<String>,
    pub target_roles: Vec<String>,
    pub updated_at: Option<String>,
}

/// Partial update; absent fields keep their stored value
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub github_url: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub education: Option<Vec<EducationEntry>>,
}

/// Which target list a request addresses (`/api/profile/targets/:kind`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Companies,
    Roles,
}

impl TargetKind {
    pub fn column(&self) -> &'static str {
        match self {
            TargetKind::Companies => "target_companies",
            TargetKind::Roles => "target_roles",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TargetRequest {
    pub value: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TargetListResponse {
    pub kind: TargetKind,
    pub items: Vec<String>,
    /// False when the add or remove left the list unchanged
    pub changed: bool,
}
