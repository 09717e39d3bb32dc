pub mod health;

use axum::{
    extract::{DefaultBodyLimit, OriginalUri},
    routing::{get, post},
    Router,
};

use crate::ats::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // ATS check API
        .route(
            "/api/v1/resumes/ats-score",
            post(handlers::handle_ats_score),
        )
        .route("/api/v1/resumes/progress", post(handlers::handle_progress))
        .route("/api/v1/ats/keywords", get(handlers::handle_keywords))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        send_to(app(), request).await
    }

    async fn send_to(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-api");
    }

    #[tokio::test]
    async fn test_ats_score_empty_document() {
        let (status, body) = send(post_json("/api/v1/resumes/ats-score", "{}".to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 3);
        assert_eq!(body["grade"], "F");
        assert_eq!(body["scorerBackend"], "heuristic");
        assert_eq!(body["breakdown"].as_array().unwrap().len(), 7);
        assert_eq!(body["details"]["categoryScores"]["formatting"], 3.0);
        assert!(body["details"]["missingKeywords"].as_array().unwrap().len() <= 10);
    }

    #[tokio::test]
    async fn test_ats_score_partial_contact() {
        let doc = json!({
            "personalInfo": {"fullName": "Jane Doe", "email": "jane@x.com", "phone": ""},
            "skills": ["Python", "SQL", "Docker", "Git", "AWS"]
        });
        let (status, body) =
            send(post_json("/api/v1/resumes/ats-score", doc.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["details"]["categoryScores"]["contactInfo"], 10.0);
        assert_eq!(body["details"]["categoryScores"]["skills"], 15.0);
    }

    #[tokio::test]
    async fn test_ats_score_rejects_malformed_json() {
        let (status, body) =
            send(post_json("/api/v1/resumes/ats-score", "{not json".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_ats_score_rejects_wrong_types() {
        let (status, body) = send(post_json(
            "/api/v1/resumes/ats-score",
            r#"{"skills": "Rust"}"#.to_string(),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_progress_endpoint() {
        let doc = json!({"personalInfo": {"fullName": "Jane", "email": "j@x.com"}});
        let (status, body) = send(post_json("/api/v1/resumes/progress", doc.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["progress"], 25);
    }

    #[tokio::test]
    async fn test_keywords_for_software_role() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/v1/ats/keywords?role=Senior%20Software%20Developer")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roleCategory"], "software_development");
        assert_eq!(body["keywords"].as_array().unwrap().len(), 52);
    }

    #[tokio::test]
    async fn test_keywords_without_role() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/v1/ats/keywords")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["roleCategory"].is_null());
        assert_eq!(body["keywords"].as_array().unwrap().len(), 42);
    }

    #[tokio::test]
    async fn test_keywords_rejects_oversized_role() {
        let uri = format!("/api/v1/ats/keywords?role={}", "a".repeat(201));
        let (status, body) = send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_keywords_rejects_repeated_role_as_json() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/v1/ats/keywords?role=a&role=b")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("role"));
    }

    #[tokio::test]
    async fn test_oversized_body_is_payload_too_large() {
        let small = build_router(AppState::new(Config {
            max_body_bytes: 16,
            ..Config::default()
        }));
        let doc = json!({"summary": "a".repeat(100)});
        let (status, body) =
            send_to(small, post_json("/api/v1/resumes/ats-score", doc.to_string())).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_body_under_limit_still_scores() {
        let small = build_router(AppState::new(Config {
            max_body_bytes: 16,
            ..Config::default()
        }));
        let (status, body) =
            send_to(small, post_json("/api/v1/resumes/ats-score", "{}".to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["grade"], "F");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/v1/courses")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
