pub mod email;
pub mod events;
pub mod health;
pub mod linkedin;
pub mod preview;
pub mod upload;
pub mod wizard;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::editors::{
    certifications, education, experience, languages, profile, section_order, settings, skills,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session
        .route("/api/state", get(wizard::handle_state))
        .route("/api/events", get(events::handle_events))
        .route("/api/wizard/next", post(wizard::handle_next))
        .route("/api/wizard/previous", post(wizard::handle_previous))
        .route("/api/wizard/goto/:step", post(wizard::handle_goto))
        .route("/api/wizard/reset", post(wizard::handle_reset))
        // Step 1: uploads
        .route("/api/files", post(upload::handle_upload_files))
        .route("/api/files/:index", delete(upload::handle_remove_file))
        .route(
            "/api/photo",
            post(upload::handle_upload_photo).delete(upload::handle_remove_photo),
        )
        // Step 2: configuration
        .route(
            "/api/config",
            get(settings::handle_get_config).patch(settings::handle_patch_config),
        )
        .route(
            "/api/config/sections/:section",
            put(settings::handle_toggle_section),
        )
        .route("/api/config/template", put(settings::handle_select_template))
        .route("/api/config/colors/:key", put(settings::handle_set_color))
        .route(
            "/api/contact",
            get(profile::handle_get_contact).put(profile::handle_set_contact),
        )
        .route(
            "/api/profile",
            get(profile::handle_get_profile).patch(profile::handle_update_profile),
        )
        .route(
            "/api/experience",
            get(experience::handle_list).post(experience::handle_add),
        )
        .route(
            "/api/experience/:index",
            patch(experience::handle_update).delete(experience::handle_delete),
        )
        .route(
            "/api/experience/:index/visibility",
            put(experience::handle_toggle_visibility),
        )
        .route(
            "/api/education",
            get(education::handle_list).post(education::handle_add),
        )
        .route(
            "/api/education/:index",
            patch(education::handle_update).delete(education::handle_delete),
        )
        .route(
            "/api/education/:index/visibility",
            put(education::handle_toggle_visibility),
        )
        .route(
            "/api/skills",
            get(skills::handle_list).post(skills::handle_add),
        )
        .route("/api/skills/:name", delete(skills::handle_delete))
        .route(
            "/api/skills/:name/selection",
            put(skills::handle_toggle_selection),
        )
        .route(
            "/api/languages",
            get(languages::handle_list).post(languages::handle_add),
        )
        .route(
            "/api/languages/:index",
            patch(languages::handle_update).delete(languages::handle_delete),
        )
        .route(
            "/api/certifications",
            get(certifications::handle_list).post(certifications::handle_add),
        )
        .route(
            "/api/certifications/:index",
            patch(certifications::handle_update).delete(certifications::handle_delete),
        )
        .route("/api/sections", get(section_order::handle_list))
        .route("/api/sections/move", post(section_order::handle_move))
        .route("/api/sections/:index/up", post(section_order::handle_move_up))
        .route(
            "/api/sections/:index/down",
            post(section_order::handle_move_down),
        )
        // Step 3: preview and sharing
        .route("/api/preview", post(preview::handle_generate))
        .route("/api/preview/pdf", get(preview::handle_download))
        .route("/api/email", post(email::handle_send))
        .route("/api/email/mailto", get(email::handle_mailto))
        .route("/api/linkedin/auth", get(linkedin::handle_auth))
        .route("/api/linkedin/profile", get(linkedin::handle_profile))
        .route("/api/linkedin/status", get(linkedin::handle_status))
        .route("/api/linkedin/logout", post(linkedin::handle_logout))
        .layer(DefaultBodyLimit::max(upload::UPLOAD_BODY_LIMIT))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::test_support::{app_state, sample_parsed_data, FakeBackend, FAKE_PDF};

    const BOUNDARY: &str = "wizard-test-boundary";

    fn multipart_body(field: &str, files: &[(&str, &str)]) -> Body {
        let mut body = String::new();
        for (name, content_type) in files {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{name}\"\r\nContent-Type: {content_type}\r\n\r\nFirst Name,Last Name\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        Body::from(body)
    }

    fn upload_request(names: &[&str]) -> Request<Body> {
        let files: Vec<(&str, &str)> = names.iter().map(|n| (*n, "text/csv")).collect();
        Request::builder()
            .method(Method::POST)
            .uri("/api/files")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(multipart_body("files", &files))
            .unwrap()
    }

    fn photo_request(content_type: &str, size: usize) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"me.jpg\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.resize(body.len() + size, 0xAB);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        Request::builder()
            .method(Method::POST)
            .uri("/api/photo")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _) = app_state(FakeBackend::default());
        let response = build_router(state)
            .oneshot(empty_request(Method::GET, "/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["service"], "cv-wizard");
    }

    #[tokio::test]
    async fn test_incomplete_upload_blocks_step_one() {
        let (state, backend) = app_state(FakeBackend::default());
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(upload_request(&["Profile.csv", "notes.txt"]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let files = body_json(response).await;
        assert_eq!(files["files"].as_array().unwrap().len(), 1);
        assert_eq!(files["missing"], json!(["Positions.csv", "Education.csv"]));

        let response = app
            .oneshot(empty_request(Method::POST, "/api/wizard/next"))
            .await
            .unwrap();
        assert_eq!(
            body_json(response).await,
            json!({"outcome": "rejected", "step": 1})
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_full_flow_to_pdf_download() {
        let (state, backend) = app_state(FakeBackend::default());
        let app = build_router(state);

        app.clone()
            .oneshot(upload_request(&["Profile.csv", "Positions.csv", "Education.csv"]))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(empty_request(Method::POST, "/api/wizard/next"))
            .await
            .unwrap();
        assert_eq!(
            body_json(response).await,
            json!({"outcome": "advanced", "step": 2})
        );

        let response = app
            .clone()
            .oneshot(empty_request(Method::POST, "/api/wizard/next"))
            .await
            .unwrap();
        assert_eq!(
            body_json(response).await,
            json!({"outcome": "advanced", "step": 3})
        );
        assert_eq!(backend.calls(), vec!["parse_linkedin", "generate_pdf"]);

        let response = app
            .oneshot(empty_request(Method::GET, "/api/preview/pdf"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"cv.pdf\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], FAKE_PDF);
    }

    #[tokio::test]
    async fn test_duplicate_skill_is_reported_not_failed() {
        let (state, _) = app_state(FakeBackend::default());
        state
            .store
            .lock()
            .set_parsed_data(Some(sample_parsed_data()));

        let response = build_router(state)
            .oneshot(json_request(Method::POST, "/api/skills", json!({"name": "SQL"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["skills"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_experience_delete_remaps_visibility() {
        let (state, _) = app_state(FakeBackend::default());
        {
            let mut store = state.store.lock();
            store.set_parsed_data(Some(sample_parsed_data()));
            let mut config = store.config().clone();
            config.experience_visible = Some(vec![0, 1, 2]);
            store.set_config(config);
        }
        let app = build_router(state.clone());

        let response = app
            .oneshot(empty_request(Method::DELETE, "/api/experience/1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            state.store.lock().config().experience_visible,
            Some(vec![0, 1])
        );
    }

    #[tokio::test]
    async fn test_edit_before_parse_is_conflict() {
        let (state, _) = app_state(FakeBackend::default());
        let response = build_router(state)
            .oneshot(empty_request(Method::POST, "/api/languages"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_reset_restores_default_config() {
        let (state, _) = app_state(FakeBackend::default());
        let app = build_router(state);

        app.clone()
            .oneshot(json_request(
                Method::PUT,
                "/api/config/template",
                json!({"template": "creative"}),
            ))
            .await
            .unwrap();
        app.clone()
            .oneshot(json_request(
                Method::PUT,
                "/api/config/sections/skills",
                json!({"enabled": false}),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(empty_request(Method::POST, "/api/wizard/reset"))
            .await
            .unwrap();
        let snapshot = body_json(response).await;
        let config = &snapshot["current_config"];
        assert_eq!(config["template"], "modern");
        assert_eq!(config["sections"]["skills"], true);
        assert_eq!(config["skills_selected"], Value::Null);
        assert_eq!(snapshot["current_step"], 1);
    }

    #[tokio::test]
    async fn test_goto_ignores_unknown_step() {
        let (state, _) = app_state(FakeBackend::default());
        let response = build_router(state)
            .oneshot(empty_request(Method::POST, "/api/wizard/goto/7"))
            .await
            .unwrap();
        assert_eq!(
            body_json(response).await,
            json!({"step": 1, "changed": false})
        );
    }

    #[tokio::test]
    async fn test_download_without_pdf_is_not_found() {
        let (state, _) = app_state(FakeBackend::default());
        let response = build_router(state)
            .oneshot(empty_request(Method::GET, "/api/preview/pdf"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_email_is_bad_request() {
        let (state, backend) = app_state(FakeBackend::default());
        let response = build_router(state)
            .oneshot(json_request(
                Method::POST,
                "/api/email",
                json!({"recipient": "nobody", "subject": "CV"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_photo_above_two_megabytes_is_accepted() {
        let (state, _) = app_state(FakeBackend::default());
        let store = state.store.clone();
        let response = build_router(state)
            .oneshot(photo_request("image/jpeg", 4 * 1024 * 1024))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["size"], 4 * 1024 * 1024);
        assert_eq!(store.lock().photo().map(|p| p.size()), Some(4 * 1024 * 1024));
    }

    #[tokio::test]
    async fn test_oversized_photo_reaches_validation() {
        let (state, _) = app_state(FakeBackend::default());
        let store = state.store.clone();
        let response = build_router(state)
            .oneshot(photo_request("image/png", 6 * 1024 * 1024))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Maximum 5MB"));
        assert!(store.lock().photo().is_none());
    }
}
