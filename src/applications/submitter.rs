//! Bulk application submitter.
//!
//! Applies one resume (and optionally one template) to a list of jobs.
//! Items are processed strictly in input order; a failure on one item is
//! recorded in its outcome and the batch moves on.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::models::{ApplicationStatus, NewApplication};
use super::store::{ApplicationStore, JobStore, ProfileStore, StoreError, TemplateStore};
use crate::jobs::models::Job;
use crate::templates::render::{render_template, RenderContext};

/// Upper bound on job ids per batch
pub const MAX_BATCH_SIZE: usize = 100;

/// Why a single item of a batch did not produce a submitted application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ApplyFailure {
    #[error("Already applied")]
    AlreadyApplied,

    #[error("Job not found")]
    JobNotFound,

    #[error("{0}")]
    PersistenceFailure(String),
}

impl From<StoreError> for ApplyFailure {
    fn from(e: StoreError) -> Self {
        ApplyFailure::PersistenceFailure(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyOutcome {
    pub job_id: String,
    pub success: bool,
    /// Display form of `reason`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ApplyFailure>,
}

impl ApplyOutcome {
    fn from_result(job_id: &str, result: Result<(), ApplyFailure>) -> Self {
        match result {
            Ok(()) => Self {
                job_id: job_id.to_string(),
                success: true,
                error: None,
                reason: None,
            },
            Err(failure) => Self {
                job_id: job_id.to_string(),
                success: false,
                error: Some(failure.to_string()),
                reason: Some(failure),
            },
        }
    }
}

/// Errors that reject the whole batch before any item is attempted
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BulkApplyError {
    #[error("A resume is required")]
    MissingResume,

    #[error("Job ids must not be blank")]
    BlankJobId,

    #[error("At most 100 jobs can be applied to at once")]
    TooManyJobs,
}

/// One batch: a list of jobs sharing a resume and optional template
#[derive(Debug, Clone)]
pub struct BulkSubmission<'a> {
    pub job_ids: &'a [String],
    pub resume_id: &'a str,
    pub template_id: Option<&'a str>,
}

impl BulkSubmission<'_> {
    pub fn check(&self) -> Result<(), BulkApplyError> {
        if self.resume_id.trim().is_empty() {
            return Err(BulkApplyError::MissingResume);
        }
        if self.job_ids.len() > MAX_BATCH_SIZE {
            return Err(BulkApplyError::TooManyJobs);
        }
        if self.job_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(BulkApplyError::BlankJobId);
        }
        Ok(())
    }
}

pub struct BulkApplySubmitter<'a> {
    jobs: &'a dyn JobStore,
    applications: &'a dyn ApplicationStore,
    profiles: &'a dyn ProfileStore,
    templates: &'a dyn TemplateStore,
}

impl<'a> BulkApplySubmitter<'a> {
    pub fn new(
        jobs: &'a dyn JobStore,
        applications: &'a dyn ApplicationStore,
        profiles: &'a dyn ProfileStore,
        templates: &'a dyn TemplateStore,
    ) -> Self {
        Self {
            jobs,
            applications,
            profiles,
            templates,
        }
    }

    /// Returns exactly one outcome per job id, in input order
    pub async fn bulk_apply(
        &self,
        owner_id: &str,
        submission: &BulkSubmission<'_>,
    ) -> Result<Vec<ApplyOutcome>, BulkApplyError> {
        submission.check()?;

        let mut outcomes = Vec::with_capacity(submission.job_ids.len());

        for job_id in submission.job_ids {
            let result = self.apply_one(owner_id, job_id, submission).await;

            match &result {
                Ok(()) => debug!(user_id = %owner_id, job_id = %job_id, "Bulk apply item submitted"),
                Err(ApplyFailure::PersistenceFailure(detail)) => warn!(
                    user_id = %owner_id,
                    job_id = %job_id,
                    error = %detail,
                    "Bulk apply item failed to persist"
                ),
                Err(failure) => debug!(
                    user_id = %owner_id,
                    job_id = %job_id,
                    reason = %failure,
                    "Bulk apply item skipped"
                ),
            }

            outcomes.push(ApplyOutcome::from_result(job_id, result));
        }

        let succeeded = outcomes.iter().filter(|o| o.success).count();
        info!(
            user_id = %owner_id,
            total = outcomes.len(),
            succeeded = succeeded,
            failed = outcomes.len() - succeeded,
            "Bulk apply finished"
        );

        Ok(outcomes)
    }

    async fn apply_one(
        &self,
        owner_id: &str,
        job_id: &str,
        submission: &BulkSubmission<'_>,
    ) -> Result<(), ApplyFailure> {
        // Re-read every time so earlier items of this batch are seen
        let existing = self.applications.applications_for_owner(owner_id).await?;
        if existing.iter().any(|a| a.job_id == job_id) {
            return Err(ApplyFailure::AlreadyApplied);
        }

        let job = self
            .jobs
            .get_job(job_id)
            .await?
            .ok_or(ApplyFailure::JobNotFound)?;

        let (template_id, cover_letter) = match submission.template_id {
            Some(template_id) => self.cover_letter(owner_id, template_id, &job).await?,
            None => (None, String::new()),
        };

        let application = self
            .applications
            .create_application(NewApplication {
                user_id: owner_id.to_string(),
                job_id: job_id.to_string(),
                resume_id: Some(submission.resume_id.to_string()),
                template_id,
                status: ApplicationStatus::Pending,
                cover_letter: Some(cover_letter).filter(|c| !c.is_empty()),
                custom_answers: None,
                notes: None,
            })
            .await?;

        self.applications
            .submit_application(&application.id, owner_id)
            .await?;

        Ok(())
    }

    /// Renders the owner's template for `job`. A template that is missing or
    /// belongs to someone else yields an empty letter and no template link.
    async fn cover_letter(
        &self,
        owner_id: &str,
        template_id: &str,
        job: &Job,
    ) -> Result<(Option<String>, String), ApplyFailure> {
        let template = match self.templates.get_template(template_id).await? {
            Some(t) if t.user_id == owner_id => t,
            _ => return Ok((None, String::new())),
        };

        let profile = self
            .profiles
            .owner_profile(owner_id)
            .await?
            .unwrap_or_default();

        let context = RenderContext {
            name: profile.name.unwrap_or_default(),
            company: job.company.clone(),
            position: job.title.clone(),
            skills: profile.skills,
        };

        Ok((Some(template.id), render_template(&template.content, &context)))
    }
}
