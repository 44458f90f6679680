pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/analyze/:analysis_id",
            get(handlers::handle_get_analysis),
        )
        .route(
            "/api/v1/analyze/:analysis_id/download",
            get(handlers::handle_download),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::{Config, DEFAULT_MAX_UPLOAD_BYTES};
    use crate::extraction::tests::docx_bytes;
    use crate::render::DOCX_CONTENT_TYPE;
    use crate::store::InMemoryResultStore;

    const BOUNDARY: &str = "matcher-test-boundary";

    fn test_state(max_upload_bytes: usize) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                max_upload_bytes,
                result_ttl_secs: 60,
                redis_url: None,
            },
            results: Arc::new(InMemoryResultStore::new(Duration::from_secs(60))),
        }
    }

    fn app() -> Router {
        build_router(test_state(DEFAULT_MAX_UPLOAD_BYTES))
    }

    enum Part<'a> {
        File { name: &'a str, file_name: &'a str, data: &'a [u8] },
        Text { name: &'a str, value: &'a str },
    }

    fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::File { name, file_name, data } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                             Content-Type: application/octet-stream\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(data);
                }
                Part::Text { name, value } => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                            .as_bytes(),
                    );
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn analyze_request(parts: &[Part<'_>]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_txt_upload_is_rejected() {
        let response = app()
            .oneshot(analyze_request(&[Part::File {
                name: "resume",
                file_name: "resume.txt",
                data: b"Python developer",
            }]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(
            body["error"]["message"],
            "File type not allowed. Please upload a PDF or DOCX."
        );
    }

    #[tokio::test]
    async fn test_missing_resume_field_is_rejected() {
        let response = app()
            .oneshot(analyze_request(&[Part::Text {
                name: "job_description",
                value: "Rust engineer",
            }]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["message"], "No file uploaded.");
    }

    #[tokio::test]
    async fn test_empty_filename_is_rejected() {
        let response = app()
            .oneshot(analyze_request(&[Part::File {
                name: "resume",
                file_name: "",
                data: b"",
            }]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["message"], "No selected file.");
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected() {
        let data = vec![b'x'; 4096];
        let response = build_router(test_state(1024))
            .oneshot(analyze_request(&[Part::File {
                name: "resume",
                file_name: "resume.pdf",
                data: &data,
            }]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_corrupt_pdf_still_produces_report() {
        let response = app()
            .oneshot(analyze_request(&[
                Part::File {
                    name: "resume",
                    file_name: "resume.pdf",
                    data: b"%PDF-1.4 truncated garbage",
                },
                Part::Text {
                    name: "job_description",
                    value: "Seeking Python Java developer",
                },
            ]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let text = body["resume_text"].as_str().unwrap();
        assert!(text.starts_with("[Error reading PDF: "), "got: {text}");
        assert_eq!(body["skills"].as_array().unwrap().len(), 0);
        assert!(body["sections"].as_object().unwrap().is_empty());
        let tips = body["recommendations"].as_array().unwrap();
        assert!(tips[0].as_str().unwrap().contains("'Education'"));
        assert!(tips[1].as_str().unwrap().contains("'Experience'"));
        assert!(tips[2].as_str().unwrap().contains("'Skills'"));
        assert!(!tips
            .iter()
            .any(|t| t.as_str().unwrap().contains("well-structured")));
    }

    #[tokio::test]
    async fn test_docx_analysis_then_fetch_and_download() {
        let app = app();
        let resume = docx_bytes(&[
            "Jane Doe",
            "Experience",
            "Acme Corp",
            "Python engineer",
            "Skills",
            "Python Docker",
        ]);

        let response = app
            .clone()
            .oneshot(analyze_request(&[
                Part::File {
                    name: "resume",
                    file_name: "Jane Doe.docx",
                    data: &resume,
                },
                Part::Text {
                    name: "job_description",
                    value: "Seeking Python Java developer",
                },
            ]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["match_percent"], 25.0);
        assert_eq!(body["file_name"], "Jane_Doe.docx");
        assert_eq!(body["document_kind"], "docx");
        assert_eq!(
            body["missing_keywords"],
            serde_json::json!(["developer", "java", "seeking"])
        );
        assert_eq!(body["skills"], serde_json::json!(["docker", "python"]));
        assert_eq!(body["sections"]["Experience"], "Acme Corp\nPython engineer\n");
        let id = body["analysis_id"].as_str().unwrap().to_string();

        let fetched = app
            .clone()
            .oneshot(
                Request::get(format!("/api/v1/analyze/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(fetched.status(), StatusCode::OK);
        assert_eq!(json_body(fetched).await["analysis_id"], id.as_str());

        let download = app
            .oneshot(
                Request::get(format!("/api/v1/analyze/{id}/download"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(download.status(), StatusCode::OK);
        assert_eq!(
            download.headers()[header::CONTENT_TYPE],
            DOCX_CONTENT_TYPE
        );
        assert!(download.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .starts_with("attachment"));
        let bytes = to_bytes(download.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_unknown_analysis_is_not_found() {
        let id = uuid::Uuid::new_v4();
        let response = app()
            .oneshot(
                Request::get(format!("/api/v1/analyze/{id}/download"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
