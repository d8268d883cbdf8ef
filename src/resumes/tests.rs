//! Router and service tests for resumes

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::migrations::{insert_test_user, test_pool};
    use crate::common::test_support::{app, dev_state, send};
    use crate::common::dev_mode::DEV_USER_ID;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use serde_json::json;
    use tower::ServiceExt;

    const PDF_BYTES: &[u8] = b"%PDF-1.4\n%test resume\n";

    fn new_resume(id: &str, user_id: &str, is_default: bool) -> models::NewResume {
        models::NewResume {
            id: id.to_string(),
            user_id: user_id.to_string(),
            name: format!("{} resume", id),
            file_url: format!("/api/resumes/{}/file", id),
            file_key: format!("resumes/{}/{}.pdf", user_id, id),
            mime_type: "application/pdf".to_string(),
            file_size: 10,
            is_default,
        }
    }

    #[tokio::test]
    async fn test_only_one_default_per_owner() {
        let pool = test_pool().await;
        insert_test_user(&pool, "U_ANN", Some("Ann")).await;
        let service = ResumesService::new(pool);

        service.create_resume(new_resume("R_1", "U_ANN", true)).await.unwrap();
        service.create_resume(new_resume("R_2", "U_ANN", true)).await.unwrap();

        let defaults: Vec<String> = service
            .list_resumes("U_ANN")
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.is_default)
            .map(|r| r.id)
            .collect();
        assert_eq!(defaults, vec!["R_2".to_string()]);

        service.set_default("U_ANN", "R_1").await.unwrap();
        let r1 = service.get_owned("U_ANN", "R_1").await.unwrap();
        let r2 = service.get_owned("U_ANN", "R_2").await.unwrap();
        assert!(r1.is_default);
        assert!(!r2.is_default);
    }

    #[tokio::test]
    async fn test_other_owners_resume_is_not_found() {
        let pool = test_pool().await;
        insert_test_user(&pool, "U_ANN", Some("Ann")).await;
        insert_test_user(&pool, "U_BOB", Some("Bob")).await;
        let service = ResumesService::new(pool);

        service.create_resume(new_resume("R_1", "U_ANN", false)).await.unwrap();

        assert!(service.get_owned("U_BOB", "R_1").await.is_err());
        assert!(service.delete_resume("U_BOB", "R_1").await.is_err());
        assert!(service.set_default("U_BOB", "R_1").await.is_err());
        assert!(service.get_owned("U_ANN", "R_1").await.is_ok());
    }

    #[tokio::test]
    async fn test_upload_list_download_delete() {
        let state = dev_state(false).await;
        let router = app(resumes_routes(), state);

        let (status, created) = send(
            router.clone(),
            Method::POST,
            "/api/resumes",
            Some(json!({
                "name": "  Backend CV ",
                "file_data": BASE64.encode(PDF_BYTES),
                "mime_type": "application/pdf",
                "is_default": true
            })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "Backend CV");
        assert_eq!(created["mime_type"], "application/pdf");
        assert_eq!(created["is_default"], true);
        assert!(created.get("file_key").is_none());

        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["file_url"], format!("/api/resumes/{}/file", id));

        let (status, list) = send(router.clone(), Method::GET, "/api/resumes", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["user_id"], DEV_USER_ID);

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/resumes/{}/file", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/pdf");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], PDF_BYTES);

        let (status, body) = send(
            router.clone(),
            Method::DELETE,
            &format!("/api/resumes/{}", id),
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let (_, list) = send(router, Method::GET, "/api/resumes", None, None).await;
        assert!(list.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_rejects_non_resume_content() {
        let router = app(resumes_routes(), dev_state(false).await);

        let (status, body) = send(
            router.clone(),
            Method::POST,
            "/api/resumes",
            Some(json!({
                "name": "notes",
                "file_data": BASE64.encode(b"plain text is not a resume")
            })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");

        let (status, _) = send(
            router,
            Method::POST,
            "/api/resumes",
            Some(json!({ "name": "cv", "file_data": "%%%not-base64%%%" })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_missing_resume_is_404() {
        let router = app(resumes_routes(), dev_state(false).await);
        let (status, body) = send(router, Method::DELETE, "/api/resumes/R_NOPE00", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }
}
