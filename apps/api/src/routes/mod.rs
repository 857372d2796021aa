pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ats::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé scan (multipart upload + AI suggestions)
        .route("/upload", post(handlers::handle_upload))
        // Scoring API
        .route("/api/v1/score", post(handlers::handle_score_text))
        .route("/api/v1/profile", get(handlers::handle_get_profile))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use bytes::Bytes;
    use tower::ServiceExt;

    use crate::ats::extraction::{require_text, ExtractionError, TextExtractor};
    use crate::ats::scorer::{ScoreResult, Scorer};
    use crate::ats::suggestions::SuggestionGenerator;
    use crate::config::Config;

    const BOUNDARY: &str = "ats-test-boundary";

    /// Treats the uploaded bytes as UTF-8 text.
    struct PlainTextExtractor;

    #[async_trait]
    impl TextExtractor for PlainTextExtractor {
        async fn extract(&self, document: Bytes) -> Result<String, ExtractionError> {
            let text = String::from_utf8(document.to_vec())
                .map_err(|e| ExtractionError::Parse(e.to_string()))?;
            require_text(text)
        }
    }

    struct EchoSuggester;

    #[async_trait]
    impl SuggestionGenerator for EchoSuggester {
        async fn suggest(&self, result: &ScoreResult, _resume_text: &str) -> Vec<String> {
            vec![format!("score was {}", result.score)]
        }
    }

    fn test_state() -> AppState {
        AppState {
            config: Config::default(),
            scorer: Arc::new(Scorer::default()),
            extractor: Arc::new(PlainTextExtractor),
            suggester: Arc::new(EchoSuggester),
        }
    }

    fn multipart_request(field: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"resume.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::post("/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn read_body(resp: axum::http::Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let resp = build_router(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "ats-api");
    }

    #[tokio::test]
    async fn upload_returns_score_keywords_and_suggestions() {
        let resp = build_router(test_state())
            .oneshot(multipart_request("resume", "Skills: C++, Node.js\nProjects"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_body(resp).await;
        // 2/20 * 80 + 2/6 * 20
        assert_eq!(body["score"], "14.67");
        assert_eq!(body["matchedKeywords"], serde_json::json!(["node.js", "C++"]));
        // `cpp` stays missing next to the matched `C++`.
        assert_eq!(body["missingKeywords"].as_array().unwrap().len(), 19);
        assert_eq!(body["suggestions"], serde_json::json!(["score was 14.67"]));
    }

    #[tokio::test]
    async fn upload_without_resume_field_is_bad_request() {
        let resp = build_router(test_state())
            .oneshot(multipart_request("avatar", "hello"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = read_body(resp).await;
        assert_eq!(body["error"]["message"], "No file uploaded");
    }

    #[tokio::test]
    async fn upload_with_blank_text_is_unprocessable() {
        let resp = build_router(test_state())
            .oneshot(multipart_request("resume", "   "))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_body(resp).await;
        assert_eq!(body["error"]["code"], "EXTRACTION_ERROR");
    }

    #[tokio::test]
    async fn score_text_returns_result_without_suggestions() {
        let resp = build_router(test_state())
            .oneshot(
                Request::post("/api/v1/score")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"text": "C++"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["score"], "4.00");
        assert_eq!(body["matchedKeywords"], serde_json::json!(["C++"]));
        assert!(body["missingKeywords"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("cpp")));
        assert!(body.get("suggestions").is_none());
    }

    #[tokio::test]
    async fn score_text_rejects_blank_text() {
        let resp = build_router(test_state())
            .oneshot(
                Request::post("/api/v1/score")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"text": "  "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn profile_lists_reference_catalogs() {
        let resp = build_router(test_state())
            .oneshot(Request::get("/api/v1/profile").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["keywords"].as_array().unwrap().len(), 20);
        assert_eq!(body["sections"][1], "internship/experience");
        assert_eq!(body["display_names"]["cpp"], "C++");
    }

    #[tokio::test]
    async fn oversized_upload_is_payload_too_large() {
        let mut state = test_state();
        state.config.max_upload_bytes = 64;
        let resp = build_router(state)
            .oneshot(multipart_request("resume", &"react ".repeat(100)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = read_body(resp).await;
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }
}
