// src/applications/tests/submitter_tests.rs

#[cfg(test)]
mod tests {
    use crate::applications::models::*;
    use crate::applications::store::*;
    use crate::applications::submitter::*;
    use crate::jobs::models::{EmploymentType, Job, LocationType};
    use crate::templates::models::{Template, TemplateType};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const OWNER: &str = "U_ANN";

    fn job(id: &str, title: &str, company: &str) -> Job {
        Job {
            id: id.to_string(),
            external_id: None,
            job_board_id: None,
            title: title.to_string(),
            company: company.to_string(),
            company_logo: None,
            location: None,
            location_type: LocationType::Remote,
            salary: None,
            salary_min: None,
            salary_max: None,
            description: None,
            requirements: None,
            benefits: None,
            employment_type: EmploymentType::FullTime,
            experience_level: None,
            application_url: None,
            posted_at: None,
            expires_at: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn template(id: &str, owner: &str, content: &str) -> Template {
        Template {
            id: id.to_string(),
            user_id: owner.to_string(),
            name: "Default letter".to_string(),
            template_type: TemplateType::CoverLetter,
            content: content.to_string(),
            variables: None,
            is_default: true,
            created_at: None,
            updated_at: None,
        }
    }

    /// In-memory stand-in for all four stores
    #[derive(Default)]
    struct FakeStores {
        jobs: HashMap<String, Job>,
        templates: HashMap<String, Template>,
        profile: Option<OwnerProfile>,
        applications: Mutex<Vec<Application>>,
        fail_create_for: Option<String>,
        fail_submit_for: Option<String>,
        listing_down: Mutex<bool>,
        profile_down: bool,
        next_id: Mutex<u32>,
    }

    impl FakeStores {
        fn with_jobs(ids: &[&str]) -> Self {
            let jobs = ids
                .iter()
                .map(|id| (id.to_string(), job(id, &format!("Engineer {}", id), "Acme")))
                .collect();
            Self {
                jobs,
                ..Self::default()
            }
        }

        fn existing(&self, job_id: &str, status: ApplicationStatus) {
            self.applications.lock().unwrap().push(Application {
                id: format!("A_OLD_{}", job_id),
                user_id: OWNER.to_string(),
                job_id: job_id.to_string(),
                resume_id: None,
                template_id: None,
                status,
                cover_letter: None,
                custom_answers: None,
                applied_at: None,
                last_status_update: None,
                notes: None,
                created_at: None,
                updated_at: None,
            });
        }

        fn stored(&self) -> Vec<Application> {
            self.applications.lock().unwrap().clone()
        }

        fn submitter(&self) -> BulkApplySubmitter<'_> {
            BulkApplySubmitter::new(self, self, self, self)
        }
    }

    #[async_trait]
    impl JobStore for FakeStores {
        async fn get_job(&self, job_id: &str) -> Result<Option<Job>, StoreError> {
            Ok(self.jobs.get(job_id).cloned())
        }
    }

    #[async_trait]
    impl ApplicationStore for FakeStores {
        async fn applications_for_owner(
            &self,
            owner_id: &str,
        ) -> Result<Vec<Application>, StoreError> {
            if *self.listing_down.lock().unwrap() {
                return Err(StoreError::InvalidState("listing unavailable".to_string()));
            }
            Ok(self
                .stored()
                .into_iter()
                .filter(|a| a.user_id == owner_id)
                .collect())
        }

        async fn create_application(&self, new: NewApplication) -> Result<Application, StoreError> {
            if self.fail_create_for.as_deref() == Some(new.job_id.as_str()) {
                return Err(StoreError::InvalidState("disk full".to_string()));
            }

            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;

            let application = Application {
                id: format!("A_{}", next_id),
                user_id: new.user_id,
                job_id: new.job_id,
                resume_id: new.resume_id,
                template_id: new.template_id,
                status: new.status,
                cover_letter: new.cover_letter,
                custom_answers: None,
                applied_at: None,
                last_status_update: None,
                notes: new.notes,
                created_at: None,
                updated_at: None,
            };
            self.applications.lock().unwrap().push(application.clone());
            Ok(application)
        }

        async fn submit_application(
            &self,
            id: &str,
            owner_id: &str,
        ) -> Result<Application, StoreError> {
            let mut applications = self.applications.lock().unwrap();
            if let Some(failing) = &self.fail_submit_for {
                if applications.iter().any(|a| a.id == id && &a.job_id == failing) {
                    return Err(StoreError::InvalidState("submit boom".to_string()));
                }
            }
            let application = applications
                .iter_mut()
                .find(|a| a.id == id && a.user_id == owner_id)
                .ok_or(StoreError::NotFound("Application"))?;

            if !application.status.can_transition_to(ApplicationStatus::Submitted) {
                return Err(StoreError::InvalidState(
                    "Application already submitted".to_string(),
                ));
            }
            application.status = ApplicationStatus::Submitted;
            application.applied_at = Some("2026-01-01T00:00:00Z".to_string());
            Ok(application.clone())
        }
    }

    #[async_trait]
    impl ProfileStore for FakeStores {
        async fn owner_profile(&self, _owner_id: &str) -> Result<Option<OwnerProfile>, StoreError> {
            if self.profile_down {
                return Err(StoreError::InvalidState("profile unavailable".to_string()));
            }
            Ok(self.profile.clone())
        }
    }

    #[async_trait]
    impl TemplateStore for FakeStores {
        async fn get_template(&self, template_id: &str) -> Result<Option<Template>, StoreError> {
            Ok(self.templates.get(template_id).cloned())
        }
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn batch<'a>(job_ids: &'a [String], template_id: Option<&'a str>) -> BulkSubmission<'a> {
        BulkSubmission {
            job_ids,
            resume_id: "R_7",
            template_id,
        }
    }

    fn summary(outcomes: &[ApplyOutcome]) -> Vec<(&str, bool, Option<&str>)> {
        outcomes
            .iter()
            .map(|o| (o.job_id.as_str(), o.success, o.error.as_deref()))
            .collect()
    }

    #[tokio::test]
    async fn test_already_applied_job_is_skipped_in_order() {
        let stores = FakeStores::with_jobs(&["1", "2", "3"]);
        stores.existing("2", ApplicationStatus::Submitted);

        let job_ids = ids(&["1", "2", "3"]);
        let outcomes = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&job_ids, None))
            .await
            .unwrap();

        assert_eq!(
            summary(&outcomes),
            vec![
                ("1", true, None),
                ("2", false, Some("Already applied")),
                ("3", true, None),
            ]
        );
        assert_eq!(outcomes[1].reason, Some(ApplyFailure::AlreadyApplied));

        let stored = stores.stored();
        assert_eq!(stored.len(), 3);
        let new: Vec<&Application> = stored
            .iter()
            .filter(|a| !a.id.starts_with("A_OLD"))
            .collect();
        assert_eq!(new.len(), 2);
        for application in new {
            assert_eq!(application.status, ApplicationStatus::Submitted);
            assert_eq!(application.resume_id.as_deref(), Some("R_7"));
            assert!(application.applied_at.is_some());
            assert!(application.cover_letter.is_none());
        }
    }

    #[tokio::test]
    async fn test_second_run_is_idempotent() {
        let stores = FakeStores::with_jobs(&["1", "2"]);
        let job_ids = ids(&["1", "2"]);

        let first = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&job_ids, None))
            .await
            .unwrap();
        assert!(first.iter().all(|o| o.success));

        let second = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&job_ids, None))
            .await
            .unwrap();
        assert_eq!(
            summary(&second),
            vec![
                ("1", false, Some("Already applied")),
                ("2", false, Some("Already applied")),
            ]
        );
        assert_eq!(stores.stored().len(), 2);
    }

    #[tokio::test]
    async fn test_withdrawn_application_still_counts_as_applied() {
        let stores = FakeStores::with_jobs(&["1"]);
        stores.existing("1", ApplicationStatus::Withdrawn);

        let job_ids = ids(&["1"]);
        let outcomes = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&job_ids, None))
            .await
            .unwrap();
        assert_eq!(outcomes[0].reason, Some(ApplyFailure::AlreadyApplied));
    }

    #[tokio::test]
    async fn test_duplicate_ids_in_one_batch() {
        let stores = FakeStores::with_jobs(&["1"]);
        let job_ids = ids(&["1", "1"]);

        let outcomes = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&job_ids, None))
            .await
            .unwrap();
        assert_eq!(
            summary(&outcomes),
            vec![("1", true, None), ("1", false, Some("Already applied"))]
        );
    }

    #[tokio::test]
    async fn test_missing_job_is_reported() {
        let stores = FakeStores::with_jobs(&["1"]);
        let job_ids = ids(&["404", "1"]);

        let outcomes = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&job_ids, None))
            .await
            .unwrap();
        assert_eq!(
            summary(&outcomes),
            vec![("404", false, Some("Job not found")), ("1", true, None)]
        );
        assert_eq!(outcomes[0].reason, Some(ApplyFailure::JobNotFound));
    }

    #[tokio::test]
    async fn test_one_persistence_failure_does_not_stop_the_batch() {
        let mut stores = FakeStores::with_jobs(&["1", "2", "3", "4", "5"]);
        stores.fail_create_for = Some("3".to_string());

        let job_ids = ids(&["1", "2", "3", "4", "5"]);
        let outcomes = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&job_ids, None))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 5);
        let succeeded: Vec<&str> = outcomes
            .iter()
            .filter(|o| o.success)
            .map(|o| o.job_id.as_str())
            .collect();
        assert_eq!(succeeded, vec!["1", "2", "4", "5"]);

        assert_eq!(
            outcomes[2].reason,
            Some(ApplyFailure::PersistenceFailure("disk full".to_string()))
        );
        assert_eq!(outcomes[2].error.as_deref(), Some("disk full"));
        assert_eq!(stores.stored().len(), 4);
    }

    #[tokio::test]
    async fn test_template_is_rendered_per_job() {
        let mut stores = FakeStores::with_jobs(&[]);
        stores.jobs.insert("1".into(), job("1", "Backend Engineer", "Acme"));
        stores.jobs.insert("2".into(), job("2", "Platform Engineer", "Globex"));
        stores.templates.insert(
            "T_1".into(),
            template(
                "T_1",
                OWNER,
                "Hi {{name}} applying to {{company}} as {{position}}. Skills: {{skills}}. {{summary}}",
            ),
        );
        stores.profile = Some(OwnerProfile {
            name: Some("Ann".to_string()),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
        });

        let job_ids = ids(&["1", "2"]);
        let outcomes = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&job_ids, Some("T_1")))
            .await
            .unwrap();
        assert!(outcomes.iter().all(|o| o.success));

        let letters: Vec<(Option<String>, Option<String>)> = stores
            .stored()
            .into_iter()
            .map(|a| (a.template_id, a.cover_letter))
            .collect();
        assert_eq!(
            letters,
            vec![
                (
                    Some("T_1".to_string()),
                    Some(
                        "Hi Ann applying to Acme as Backend Engineer. Skills: Rust, SQL. {{summary}}"
                            .to_string()
                    )
                ),
                (
                    Some("T_1".to_string()),
                    Some(
                        "Hi Ann applying to Globex as Platform Engineer. Skills: Rust, SQL. {{summary}}"
                            .to_string()
                    )
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_or_foreign_template_gives_empty_letter() {
        let mut stores = FakeStores::with_jobs(&["1", "2"]);
        stores
            .templates
            .insert("T_BOB".into(), template("T_BOB", "U_BOB", "Bob's letter"));

        let first = ids(&["1"]);
        let outcomes = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&first, Some("T_GONE")))
            .await
            .unwrap();
        assert!(outcomes[0].success);

        let second = ids(&["2"]);
        let outcomes = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&second, Some("T_BOB")))
            .await
            .unwrap();
        assert!(outcomes[0].success);

        for application in stores.stored() {
            assert_eq!(application.template_id, None);
            assert_eq!(application.cover_letter, None);
        }
    }

    #[tokio::test]
    async fn test_preconditions_reject_the_whole_batch() {
        let stores = FakeStores::with_jobs(&["1"]);
        let job_ids = ids(&["1"]);

        let no_resume = BulkSubmission {
            job_ids: &job_ids,
            resume_id: "  ",
            template_id: None,
        };
        assert_eq!(
            stores.submitter().bulk_apply(OWNER, &no_resume).await,
            Err(BulkApplyError::MissingResume)
        );

        let blank = ids(&["1", ""]);
        assert_eq!(
            stores.submitter().bulk_apply(OWNER, &batch(&blank, None)).await,
            Err(BulkApplyError::BlankJobId)
        );

        let too_many: Vec<String> = (0..=MAX_BATCH_SIZE).map(|i| i.to_string()).collect();
        assert_eq!(
            stores.submitter().bulk_apply(OWNER, &batch(&too_many, None)).await,
            Err(BulkApplyError::TooManyJobs)
        );

        assert!(stores.stored().is_empty());
    }

    #[tokio::test]
    async fn test_empty_batch_has_no_outcomes() {
        let stores = FakeStores::default();
        let outcomes = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&[], None))
            .await
            .unwrap();
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_outcome_serialization() {
        let failed = ApplyOutcome {
            job_id: "J_1".to_string(),
            success: false,
            error: Some("disk full".to_string()),
            reason: Some(ApplyFailure::PersistenceFailure("disk full".to_string())),
        };
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({
                "job_id": "J_1",
                "success": false,
                "error": "disk full",
                "reason": { "kind": "persistence_failure", "detail": "disk full" }
            })
        );

        let skipped = serde_json::to_value(ApplyFailure::AlreadyApplied).unwrap();
        assert_eq!(skipped, serde_json::json!({ "kind": "already_applied" }));
    }

    #[tokio::test]
    async fn test_submit_failure_leaves_pending_and_batch_continues() {
        let mut stores = FakeStores::with_jobs(&["1", "2", "3"]);
        stores.fail_submit_for = Some("2".to_string());

        let job_ids = ids(&["1", "2", "3"]);
        let outcomes = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&job_ids, None))
            .await
            .unwrap();

        assert_eq!(
            summary(&outcomes),
            vec![
                ("1", true, None),
                ("2", false, Some("submit boom")),
                ("3", true, None),
            ]
        );
        assert_eq!(
            outcomes[1].reason,
            Some(ApplyFailure::PersistenceFailure("submit boom".to_string()))
        );

        let stuck = stores
            .stored()
            .into_iter()
            .find(|a| a.job_id == "2")
            .unwrap();
        assert_eq!(stuck.status, ApplicationStatus::Pending);
        assert!(stuck.applied_at.is_none());

        // The pending row from the failed submit still blocks a repeat
        let rerun = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&job_ids, None))
            .await
            .unwrap();
        assert!(rerun
            .iter()
            .all(|o| o.reason == Some(ApplyFailure::AlreadyApplied)));
    }

    #[tokio::test]
    async fn test_listing_failure_is_recorded_per_item() {
        let stores = FakeStores::with_jobs(&["1", "2"]);
        *stores.listing_down.lock().unwrap() = true;

        let job_ids = ids(&["1", "2"]);
        let outcomes = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&job_ids, None))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 2);
        for outcome in &outcomes {
            assert!(!outcome.success);
            assert_eq!(
                outcome.reason,
                Some(ApplyFailure::PersistenceFailure(
                    "listing unavailable".to_string()
                ))
            );
        }
        assert!(stores.stored().is_empty());

        *stores.listing_down.lock().unwrap() = false;
        let retry = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&job_ids, None))
            .await
            .unwrap();
        assert!(retry.iter().all(|o| o.success));
    }

    #[tokio::test]
    async fn test_profile_failure_during_render_is_recorded() {
        let mut stores = FakeStores::with_jobs(&["1"]);
        stores.profile_down = true;
        stores
            .templates
            .insert("T_1".to_string(), template("T_1", OWNER, "Hi {{company}}"));

        let job_ids = ids(&["1"]);
        let outcomes = stores
            .submitter()
            .bulk_apply(OWNER, &batch(&job_ids, Some("T_1")))
            .await
            .unwrap();

        assert_eq!(
            summary(&outcomes),
            vec![("1", false, Some("profile unavailable"))]
        );
        assert!(stores.stored().is_empty());
    }
}
