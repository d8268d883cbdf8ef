// src/admin/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AdminStats {
    pub total_users: i64,
    pub total_jobs: i64,
    pub total_applications: i64,
    /// Mean of the job boards' success rates, rounded; 0 with no boards
    pub avg_success_rate: i64,
}

#[derive(FromRow, Serialize, Debug, Clone)]
pub struct JobBoard {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub api_endpoint: Option<String>,
    pub is_active: bool,
    pub success_rate: i64,
    pub total_applications: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

pub const JOB_BOARD_COLUMNS: &str = "id, name, slug, logo_url, website_url, api_endpoint, \
     is_active, success_rate, total_applications, created_at, updated_at";

#[derive(Debug, Deserialize)]
pub struct CreateJobBoardRequest {
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub api_endpoint: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateJobBoardRequest {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub api_endpoint: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub success: bool,
    pub count: usize,
}
