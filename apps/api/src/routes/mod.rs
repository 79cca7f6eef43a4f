pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::profile::handlers as profile;
use crate::rewrite::handlers as rewrite;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index_handler))
        .route("/health", get(health::health_handler))
        // Analysis
        .route("/api/v1/analyze", post(profile::handle_analyze))
        .route("/api/v1/upload", post(profile::handle_upload))
        // Rewriting
        .route("/api/v1/rewrite/simple", post(rewrite::handle_rewrite_simple))
        .route("/api/v1/rewrite/advanced", post(rewrite::handle_rewrite_advanced))
        .route("/api/v1/rewrite/tone", post(rewrite::handle_change_tone))
        // Export
        .route("/api/v1/export", post(export::handle_export))
        .route("/api/v1/export/download", get(export::handle_download))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::export::EXPORT_FILE_NAME;
    use crate::rewrite::paraphrase::testing::{EchoParaphraser, FailingParaphraser};
    use crate::rewrite::paraphrase::Paraphraser;

    fn test_state(export_dir: &Path, paraphraser: Arc<dyn Paraphraser>) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                export_dir: export_dir.to_path_buf(),
                hf_api_token: None,
                hf_hub_url: "http://127.0.0.1:9".to_string(),
                hf_inference_url: "http://127.0.0.1:9".to_string(),
            },
            paraphraser,
        }
    }

    fn app(export_dir: &Path) -> Router {
        build_router(test_state(export_dir, Arc::new(EchoParaphraser::default())))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_page_is_html() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_analyze_returns_full_report() {
        let dir = tempfile::tempdir().unwrap();
        let text = "Summary: Backend engineer. Experience building distributed platforms.";
        let response = app(dir.path())
            .oneshot(post_json("/api/v1/analyze", json!({ "text": text })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["checklist"]["total"], 20);
        assert_eq!(body["summary"], text);
        assert!(body["keywords"].as_array().unwrap().iter().any(|k| k == "engineer"));
        assert_eq!(body["grammar"]["passed"], true);
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_text() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path())
            .oneshot(post_json("/api/v1/analyze", json!({ "text": "   " })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_simple_rewrite_below_minimum_is_422() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path())
            .oneshot(post_json("/api/v1/rewrite/simple", json!({ "text": "too short. really." })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_json(response).await;
        assert_eq!(body["error"]["code"], "INSUFFICIENT_INPUT");
        assert_eq!(body["error"]["message"], "Please enter more text to rewrite.");
    }

    #[tokio::test]
    async fn test_advanced_rewrite_uses_configured_backend() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path())
            .oneshot(post_json(
                "/api/v1/rewrite/advanced",
                json!({ "text": "I lead platform teams" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["rewritten"], "teams platform lead I");
        assert_eq!(body["backend"], "echo");
    }

    #[tokio::test]
    async fn test_advanced_rewrite_failure_is_502() {
        let dir = tempfile::tempdir().unwrap();
        let router = build_router(test_state(dir.path(), Arc::new(FailingParaphraser)));
        let response = router
            .oneshot(post_json(
                "/api/v1/rewrite/advanced",
                json!({ "text": "I lead platform teams" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(read_json(response).await["error"]["code"], "PARAPHRASE_ERROR");
    }

    #[tokio::test]
    async fn test_tone_defaults_to_formal() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path())
            .oneshot(post_json("/api/v1/rewrite/tone", json!({ "text": "I'm good at stuff" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["tone"], "Formal");
        assert_eq!(body["rewritten"], "I am good at stuff");
    }

    #[tokio::test]
    async fn test_export_then_download() {
        let dir = tempfile::tempdir().unwrap();
        let router = app(dir.path());

        let response = router
            .clone()
            .oneshot(post_json("/api/v1/export", json!({ "text": "Principal engineer" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["file_name"], EXPORT_FILE_NAME);
        assert!(dir.path().join(EXPORT_FILE_NAME).exists());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/export/download")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_download_before_export_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path())
            .oneshot(
                Request::builder()
                    .uri("/api/v1/export/download")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_export_into_missing_directory_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let response = app(&missing)
            .oneshot(post_json("/api/v1/export", json!({ "text": "Principal engineer" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(read_json(response).await["error"]["code"], "EXPORT_ERROR");
    }

    #[tokio::test]
    async fn test_upload_text_file_is_analyzed() {
        let dir = tempfile::tempdir().unwrap();
        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"profile.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             Headline: Rust engineer. Skills: distributed systems.\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app(dir.path()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["file_name"], "profile.txt");
        assert_eq!(body["text"], "Headline: Rust engineer. Skills: distributed systems.");
        assert_eq!(body["analysis"]["grammar"]["passed"], true);
    }
}
