//! Tests for the profile module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::applications::store::{OwnerProfile, ProfileStore};
    use crate::common::dev_mode::DEV_USER_ID;
    use crate::common::migrations::{insert_test_user, test_pool};
    use crate::common::test_support::{app, dev_state, send};
    use crate::common::Validator;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_profile_without_row_has_empty_lists() {
        let pool = test_pool().await;
        insert_test_user(&pool, "U_ANN", Some("Ann")).await;

        let profile = ProfileService::new(pool).get_profile("U_ANN").await.unwrap();
        assert_eq!(profile.name.as_deref(), Some("Ann"));
        assert!(profile.skills.is_empty());
        assert!(profile.target_companies.is_empty());
        assert!(profile.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let pool = test_pool().await;
        insert_test_user(&pool, "U_ANN", Some("Ann")).await;
        let service = ProfileService::new(pool);

        service
            .update_profile(
                "U_ANN",
                models::UpdateProfileRequest {
                    headline: Some("Backend engineer".to_string()),
                    skills: Some(vec![" Rust ".to_string(), "SQL".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let profile = service
            .update_profile(
                "U_ANN",
                models::UpdateProfileRequest {
                    name: Some("Ann Lee".to_string()),
                    location: Some("Berlin".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(profile.name.as_deref(), Some("Ann Lee"));
        assert_eq!(profile.location.as_deref(), Some("Berlin"));
        assert_eq!(profile.headline.as_deref(), Some("Backend engineer"));
        assert_eq!(profile.skills, vec!["Rust".to_string(), "SQL".to_string()]);
    }

    #[tokio::test]
    async fn test_owner_profile_feeds_templates() {
        let pool = test_pool().await;
        insert_test_user(&pool, "U_ANN", Some("Ann")).await;
        let service = ProfileService::new(pool);

        assert_eq!(
            service.owner_profile("U_ANN").await.unwrap(),
            Some(OwnerProfile {
                name: Some("Ann".to_string()),
                skills: Vec::new(),
            })
        );
        assert_eq!(service.owner_profile("U_GHOST").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_target_lists_are_independent() {
        let pool = test_pool().await;
        insert_test_user(&pool, "U_ANN", None).await;
        let service = ProfileService::new(pool);

        let added = service
            .add_target("U_ANN", models::TargetKind::Companies, "Stripe")
            .await
            .unwrap();
        assert!(added.changed);

        service
            .add_target("U_ANN", models::TargetKind::Roles, "Software Engineer")
            .await
            .unwrap();

        let profile = service.get_profile("U_ANN").await.unwrap();
        assert_eq!(profile.target_companies, vec!["Stripe".to_string()]);
        assert_eq!(profile.target_roles, vec!["Software Engineer".to_string()]);
    }

    #[tokio::test]
    async fn test_target_routes() {
        let router = app(profile_routes(), dev_state(false).await);

        for value in ["Stripe", "Acme", " Stripe "] {
            send(
                router.clone(),
                Method::POST,
                "/api/profile/targets/companies",
                Some(json!({ "value": value })),
                None,
            )
            .await;
        }

        let (status, body) = send(
            router.clone(),
            Method::POST,
            "/api/profile/targets/companies",
            Some(json!({ "value": "Acme" })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changed"], false);
        assert_eq!(body["items"], json!(["Stripe", "Acme"]));

        let (status, body) = send(
            router.clone(),
            Method::DELETE,
            "/api/profile/targets/companies",
            Some(json!({ "value": "Stripe" })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changed"], true);
        assert_eq!(body["items"], json!(["Acme"]));

        let (status, body) = send(
            router.clone(),
            Method::POST,
            "/api/profile/targets/roles",
            Some(json!({ "value": "   " })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (_, profile) = send(router, Method::GET, "/api/profile", None, None).await;
        assert_eq!(profile["user_id"], DEV_USER_ID);
        assert_eq!(profile["target_companies"], json!(["Acme"]));
        assert_eq!(profile["target_roles"], json!([]));
    }

    #[tokio::test]
    async fn test_unknown_target_kind_is_rejected() {
        let router = app(profile_routes(), dev_state(false).await);
        let (status, _) = send(
            router,
            Method::POST,
            "/api/profile/targets/salaries",
            Some(json!({ "value": "lots" })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_update_validator_checks_urls_and_entries() {
        let request = models::UpdateProfileRequest {
            linkedin_url: Some("linkedin.com/in/ann".to_string()),
            skills: Some(vec!["Rust".to_string(), " ".to_string()]),
            experience: Some(vec![models::ExperienceEntry {
                title: String::new(),
                company: "Acme".to_string(),
                location: None,
                start_date: "2020-01".to_string(),
                end_date: None,
                current: true,
                description: None,
            }]),
            ..Default::default()
        };

        let result = validators::UpdateProfileValidator.validate(&request);
        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["linkedin_url", "skills", "experience"]);
    }
}
