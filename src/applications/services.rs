use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;
use tracing::info;

use super::models::*;
use super::store::{ApplicationStore, StoreError};
use crate::common::{generate_application_id, now_rfc3339};
use crate::jobs::models::{Job, JOB_COLUMNS};

pub struct ApplicationsService {
    db: SqlitePool,
}

impl ApplicationsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Own applications, newest first, each with its job (if it still exists)
    pub async fn list_with_jobs(
        &self,
        owner_id: &str,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<ApplicationWithJob>, StoreError> {
        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {} FROM applications WHERE user_id = ",
            APPLICATION_COLUMNS
        ));
        query.push_bind(owner_id.to_string());
        if let Some(status) = status {
            query.push(" AND status = ").push_bind(status);
        }
        query.push(" ORDER BY created_at DESC, id DESC");

        let applications = query
            .build_query_as::<Application>()
            .fetch_all(&self.db)
            .await?;

        if applications.is_empty() {
            return Ok(Vec::new());
        }

        let mut jobs_query =
            QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM jobs WHERE id IN (", JOB_COLUMNS));
        let mut ids = jobs_query.separated(", ");
        for application in &applications {
            ids.push_bind(application.job_id.clone());
        }
        jobs_query.push(")");

        let jobs: HashMap<String, Job> = jobs_query
            .build_query_as::<Job>()
            .fetch_all(&self.db)
            .await?
            .into_iter()
            .map(|job| (job.id.clone(), job))
            .collect();

        Ok(applications
            .into_iter()
            .map(|application| {
                let job = jobs.get(&application.job_id).cloned();
                ApplicationWithJob { application, job }
            })
            .collect())
    }

    async fn find(&self, id: &str) -> Result<Option<Application>, StoreError> {
        let application = sqlx::query_as::<_, Application>(&format!(
            "SELECT {} FROM applications WHERE id = ?",
            APPLICATION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(application)
    }

    pub async fn get_owned(&self, owner_id: &str, id: &str) -> Result<Application, StoreError> {
        match self.find(id).await? {
            Some(a) if a.user_id == owner_id => Ok(a),
            _ => Err(StoreError::NotFound("Application")),
        }
    }

    /// Manual apply: a draft, refused if any application for the job exists
    pub async fn create_draft(
        &self,
        owner_id: &str,
        request: CreateApplicationRequest,
    ) -> Result<Application, StoreError> {
        let existing: Option<String> =
            sqlx::query_scalar("SELECT id FROM applications WHERE user_id = ? AND job_id = ?")
                .bind(owner_id)
                .bind(&request.job_id)
                .fetch_optional(&self.db)
                .await?;

        if existing.is_some() {
            return Err(StoreError::Conflict(
                "You have already applied to this job".to_string(),
            ));
        }

        self.create_application(NewApplication {
            user_id: owner_id.to_string(),
            job_id: request.job_id,
            resume_id: request.resume_id,
            template_id: request.template_id,
            status: ApplicationStatus::Draft,
            cover_letter: request.cover_letter,
            custom_answers: request.custom_answers,
            notes: request.notes,
        })
        .await
    }

    pub async fn update_draft(
        &self,
        owner_id: &str,
        id: &str,
        request: UpdateApplicationRequest,
    ) -> Result<Application, StoreError> {
        let existing = self.get_owned(owner_id, id).await?;
        if !existing.status.is_unsubmitted() {
            return Err(StoreError::InvalidState(
                "Only draft or pending applications can be edited".to_string(),
            ));
        }

        let custom_answers = request
            .custom_answers
            .or_else(|| existing.custom_answers.map(|a| a.0));

        sqlx::query(
            r#"
            UPDATE applications
            SET resume_id = ?, template_id = ?, cover_letter = ?, custom_answers = ?, notes = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(request.resume_id.or(existing.resume_id))
        .bind(request.template_id.or(existing.template_id))
        .bind(request.cover_letter.or(existing.cover_letter))
        .bind(custom_answers.map(Json))
        .bind(request.notes.or(existing.notes))
        .bind(now_rfc3339())
        .bind(id)
        .bind(owner_id)
        .execute(&self.db)
        .await?;

        self.get_owned(owner_id, id).await
    }

    pub async fn withdraw(&self, owner_id: &str, id: &str) -> Result<Application, StoreError> {
        let existing = self.get_owned(owner_id, id).await?;
        if !existing
            .status
            .can_transition_to(ApplicationStatus::Withdrawn)
        {
            return Err(StoreError::InvalidState(format!(
                "A {} application cannot be withdrawn",
                existing.status.as_str()
            )));
        }

        self.set_status(id, ApplicationStatus::Withdrawn, false).await?;
        info!(user_id = %owner_id, application_id = %id, "Application withdrawn");
        self.get_owned(owner_id, id).await
    }

    /// Reviewer-side status change (viewed, interview, offered, rejected)
    pub async fn update_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<Application, StoreError> {
        let existing = self
            .find(id)
            .await?
            .ok_or(StoreError::NotFound("Application"))?;

        if !status.is_reviewer_status() || !existing.status.can_transition_to(status) {
            return Err(StoreError::InvalidState(format!(
                "Cannot move application from {} to {}",
                existing.status.as_str(),
                status.as_str()
            )));
        }

        self.set_status(id, status, false).await?;
        info!(application_id = %id, status = %status.as_str(), "Application status updated");
        self.find(id).await?.ok_or(StoreError::NotFound("Application"))
    }

    async fn set_status(
        &self,
        id: &str,
        status: ApplicationStatus,
        mark_applied: bool,
    ) -> Result<(), StoreError> {
        let now = now_rfc3339();
        let applied_at = mark_applied.then(|| now.clone());

        sqlx::query(
            r#"
            UPDATE applications
            SET status = ?, applied_at = COALESCE(?, applied_at), last_status_update = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(status)
        .bind(applied_at)
        .bind(&now)
        .bind(&now)
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    pub async fn stats(&self, owner_id: &str) -> Result<ApplicationStats, StoreError> {
        let rows: Vec<(ApplicationStatus, i64)> = sqlx::query_as(
            "SELECT status, COUNT(*) FROM applications WHERE user_id = ? GROUP BY status",
        )
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;

        let by_status: HashMap<ApplicationStatus, i64> = rows.into_iter().collect();
        Ok(ApplicationStats {
            total: by_status.values().sum(),
            by_status,
        })
    }
}

#[async_trait]
impl ApplicationStore for ApplicationsService {
    async fn applications_for_owner(&self, owner_id: &str) -> Result<Vec<Application>, StoreError> {
        let applications = sqlx::query_as::<_, Application>(&format!(
            "SELECT {} FROM applications WHERE user_id = ? ORDER BY created_at DESC",
            APPLICATION_COLUMNS
        ))
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;
        Ok(applications)
    }

    async fn create_application(&self, new: NewApplication) -> Result<Application, StoreError> {
        let id = generate_application_id();
        let now = now_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO applications (
                id, user_id, job_id, resume_id, template_id, status, cover_letter,
                custom_answers, notes, last_status_update, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&new.user_id)
        .bind(&new.job_id)
        .bind(&new.resume_id)
        .bind(&new.template_id)
        .bind(new.status)
        .bind(&new.cover_letter)
        .bind(new.custom_answers.as_ref().map(Json))
        .bind(&new.notes)
        .bind(&now)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(|e| StoreError::from_insert(e, "You have already applied to this job"))?;

        info!(
            user_id = %new.user_id,
            application_id = %id,
            job_id = %new.job_id,
            status = %new.status.as_str(),
            "Application created"
        );

        self.find(&id)
            .await?
            .ok_or(StoreError::NotFound("Application"))
    }

    async fn submit_application(
        &self,
        id: &str,
        owner_id: &str,
    ) -> Result<Application, StoreError> {
        let existing = self.get_owned(owner_id, id).await?;
        if !existing
            .status
            .can_transition_to(ApplicationStatus::Submitted)
        {
            return Err(StoreError::InvalidState(
                "Application already submitted".to_string(),
            ));
        }

        self.set_status(id, ApplicationStatus::Submitted, true).await?;
        self.get_owned(owner_id, id).await
    }
}
