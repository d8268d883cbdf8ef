use sqlx::SqlitePool;
use tracing::info;

use super::models::*;
use super::seed::demo_jobs;
use crate::applications::store::StoreError;
use crate::common::{generate_job_board_id, now_rfc3339, Validator};
use crate::jobs::validators::NewJobValidator;
use crate::jobs::JobsService;

pub struct AdminService {
    db: SqlitePool,
}

impl AdminService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn stats(&self) -> Result<AdminStats, StoreError> {
        let (total_users, total_jobs, total_applications): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users),
                (SELECT COUNT(*) FROM jobs),
                (SELECT COUNT(*) FROM applications)
            "#,
        )
        .fetch_one(&self.db)
        .await?;

        let avg_success_rate: Option<f64> =
            sqlx::query_scalar("SELECT AVG(success_rate) FROM job_boards")
                .fetch_one(&self.db)
                .await?;

        Ok(AdminStats {
            total_users,
            total_jobs,
            total_applications,
            avg_success_rate: avg_success_rate.map(|v| v.round() as i64).unwrap_or(0),
        })
    }

    pub async fn list_job_boards(&self) -> Result<Vec<JobBoard>, StoreError> {
        let boards = sqlx::query_as::<_, JobBoard>(&format!(
            "SELECT {} FROM job_boards ORDER BY name",
            JOB_BOARD_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;
        Ok(boards)
    }

    async fn get_job_board(&self, id: &str) -> Result<JobBoard, StoreError> {
        sqlx::query_as::<_, JobBoard>(&format!(
            "SELECT {} FROM job_boards WHERE id = ?",
            JOB_BOARD_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NotFound("Job board"))
    }

    pub async fn create_job_board(
        &self,
        request: CreateJobBoardRequest,
    ) -> Result<JobBoard, StoreError> {
        let id = generate_job_board_id();
        let now = now_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO job_boards (id, name, slug, logo_url, website_url, api_endpoint, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(request.name.trim())
        .bind(&request.slug)
        .bind(&request.logo_url)
        .bind(&request.website_url)
        .bind(&request.api_endpoint)
        .bind(request.is_active.unwrap_or(true))
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(|e| StoreError::from_insert(e, "A job board with this slug already exists"))?;

        info!(job_board_id = %id, slug = %request.slug, "Job board created");
        self.get_job_board(&id).await
    }

    pub async fn update_job_board(
        &self,
        id: &str,
        request: UpdateJobBoardRequest,
    ) -> Result<JobBoard, StoreError> {
        self.get_job_board(id).await?;

        sqlx::query(
            r#"
            UPDATE job_boards SET
                name = COALESCE(?, name),
                logo_url = COALESCE(?, logo_url),
                website_url = COALESCE(?, website_url),
                api_endpoint = COALESCE(?, api_endpoint),
                is_active = COALESCE(?, is_active),
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(request.name.as_deref().map(str::trim))
        .bind(&request.logo_url)
        .bind(&request.website_url)
        .bind(&request.api_endpoint)
        .bind(request.is_active)
        .bind(now_rfc3339())
        .bind(id)
        .execute(&self.db)
        .await?;

        self.get_job_board(id).await
    }

    pub async fn delete_job_board(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM job_boards WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Job board"));
        }

        info!(job_board_id = %id, "Job board deleted");
        Ok(())
    }

    pub async fn seed_demo_jobs(&self) -> Result<usize, StoreError> {
        let jobs = demo_jobs();
        if let Some(invalid) = jobs
            .iter()
            .find(|job| !NewJobValidator.validate(job).is_valid)
        {
            return Err(StoreError::InvalidState(format!(
                "Demo job '{}' failed validation",
                invalid.title
            )));
        }

        let ids = JobsService::new(self.db.clone()).insert_jobs(&jobs).await?;
        info!(count = ids.len(), "Demo jobs seeded");
        Ok(ids.len())
    }
}
