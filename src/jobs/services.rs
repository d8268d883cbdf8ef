// src/jobs/services.rs

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use super::models::{Job, JobFilters, NewJob, JOB_COLUMNS};
use super::validators::DEFAULT_PAGE_SIZE;
use crate::applications::store::{JobStore, StoreError};
use crate::common::{generate_job_id, now_rfc3339};

pub struct JobsService {
    db: SqlitePool,
}

/// Appends the WHERE clause for `filters`; active jobs only
fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, filters: &JobFilters) {
    builder.push(" WHERE is_active = 1");

    if let Some(search) = filters.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        builder
            .push(" AND (title LIKE ")
            .push_bind(pattern.clone())
            .push(" OR company LIKE ")
            .push_bind(pattern.clone())
            .push(" OR description LIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(location) = filters.location.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        builder
            .push(" AND location LIKE ")
            .push_bind(format!("%{}%", location));
    }

    if let Some(location_type) = filters.location_type {
        builder.push(" AND location_type = ").push_bind(location_type);
    }

    if let Some(employment_type) = filters.employment_type {
        builder
            .push(" AND employment_type = ")
            .push_bind(employment_type);
    }

    if let Some(experience_level) = filters.experience_level {
        builder
            .push(" AND experience_level = ")
            .push_bind(experience_level);
    }

    if let Some(salary_min) = filters.salary_min {
        builder.push(" AND salary_min >= ").push_bind(salary_min);
    }

    if let Some(salary_max) = filters.salary_max {
        builder.push(" AND salary_max <= ").push_bind(salary_max);
    }
}

impl JobsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Active jobs matching `filters`, newest posted first, plus the unpaged total
    pub async fn list_jobs(&self, filters: &JobFilters) -> Result<(Vec<Job>, i64), StoreError> {
        let mut count_query = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM jobs");
        push_filters(&mut count_query, filters);
        let total: i64 = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&self.db)
            .await?;

        let mut list_query = QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM jobs", JOB_COLUMNS));
        push_filters(&mut list_query, filters);
        list_query
            .push(" ORDER BY posted_at DESC, created_at DESC LIMIT ")
            .push_bind(filters.limit.unwrap_or(DEFAULT_PAGE_SIZE))
            .push(" OFFSET ")
            .push_bind(filters.offset.unwrap_or(0));

        let jobs = list_query
            .build_query_as::<Job>()
            .fetch_all(&self.db)
            .await?;

        debug!(count = jobs.len(), total = total, "Loaded job list");
        Ok((jobs, total))
    }

    pub async fn find_job(&self, job_id: &str) -> Result<Option<Job>, StoreError> {
        let job = sqlx::query_as::<_, Job>(&format!("SELECT {} FROM jobs WHERE id = ?", JOB_COLUMNS))
            .bind(job_id)
            .fetch_optional(&self.db)
            .await?;
        Ok(job)
    }

    /// Inserts all jobs in one transaction and returns their ids in order
    pub async fn insert_jobs(&self, jobs: &[NewJob]) -> Result<Vec<String>, StoreError> {
        let mut tx = self.db.begin().await?;
        let now = now_rfc3339();
        let mut ids = Vec::with_capacity(jobs.len());

        for job in jobs {
            let id = generate_job_id();
            sqlx::query(
                r#"
                INSERT INTO jobs (
                    id, job_board_id, title, company, location, location_type, salary,
                    salary_min, salary_max, description, requirements, benefits,
                    employment_type, experience_level, application_url, posted_at,
                    is_active, created_at, updated_at
                )
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1, ?, ?)
                "#,
            )
            .bind(&id)
            .bind(&job.job_board_id)
            .bind(&job.title)
            .bind(&job.company)
            .bind(&job.location)
            .bind(job.location_type)
            .bind(&job.salary)
            .bind(job.salary_min)
            .bind(job.salary_max)
            .bind(&job.description)
            .bind(Json(&job.requirements))
            .bind(Json(&job.benefits))
            .bind(job.employment_type)
            .bind(job.experience_level)
            .bind(&job.application_url)
            .bind(&now)
            .bind(&now)
            .bind(&now)
            .execute(&mut *tx)
            .await?;

            ids.push(id);
        }

        tx.commit().await?;
        Ok(ids)
    }
}

#[async_trait]
impl JobStore for JobsService {
    async fn get_job(&self, job_id: &str) -> Result<Option<Job>, StoreError> {
        self.find_job(job_id).await
    }
}
