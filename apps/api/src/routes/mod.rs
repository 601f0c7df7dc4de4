pub mod home;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::recommendation::handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_handler))
        .route("/recommend", post(handlers::handle_recommend))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::fake::FakeModel;
    use crate::recommendation::generator::RecommendationGenerator;

    const FENCED_FIVE: &str = "```json\n[\n\
        {\"job_title\": \"Frontend Engineer\", \"reason\": \"React\", \"match_percentage\": 92},\n\
        {\"job_title\": \"Full Stack Developer\", \"reason\": \"React, Node.js\", \"match_percentage\": 88},\n\
        {\"job_title\": \"Backend Engineer\", \"reason\": \"Node.js\", \"match_percentage\": 81},\n\
        {\"job_title\": \"Python Developer\", \"reason\": \"Python\", \"match_percentage\": 75},\n\
        {\"job_title\": \"Data Analyst\", \"reason\": \"Python\", \"match_percentage\": 60}\n\
        ]\n```";

    fn app(model: &Arc<FakeModel>) -> Router {
        build_router(AppState {
            generator: RecommendationGenerator::new(model.clone()),
        })
    }

    async fn send(router: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_home_is_static() {
        let model = Arc::new(FakeModel::failing("unused"));
        let (status, body) = send(app(&model), Method::GET, "/", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "AI Job Recommendation API is running");
        assert!(body["usage"].as_str().unwrap().starts_with("POST /recommend"));
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_skills_is_400() {
        let model = Arc::new(FakeModel::replying("[]"));
        for body in [r#"{"languages": ["Rust"]}"#, "", "not json", "{}"] {
            let (status, json) = send(app(&model), Method::POST, "/recommend", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json, json!({"error": "Missing 'skills' in request body"}));
        }
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_or_non_list_skills_is_400() {
        let model = Arc::new(FakeModel::replying("[]"));
        for body in [r#"{"skills": []}"#, r#"{"skills": "Rust"}"#, r#"{"skills": null}"#] {
            let (status, json) = send(app(&model), Method::POST, "/recommend", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json, json!({"error": "'skills' must be a non-empty list"}));
        }
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_fenced_array_round_trips() {
        let model = Arc::new(FakeModel::replying(FENCED_FIVE));
        let (status, body) = send(
            app(&model),
            Method::POST,
            "/recommend",
            r#"{"skills": ["React", "Node.js", "Python"]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 5);
        assert_eq!(
            list[1],
            json!({"job_title": "Full Stack Developer", "reason": "React, Node.js", "match_percentage": 88})
        );
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_non_json_model_output_is_200_with_raw() {
        let model = Arc::new(FakeModel::replying("Sorry, I cannot help."));
        let (status, body) = send(
            app(&model),
            Method::POST,
            "/recommend",
            r#"{"skills": ["Excel"]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"error": "Model response not valid JSON", "raw": "Sorry, I cannot help."})
        );
    }

    #[tokio::test]
    async fn test_provider_failure_is_200_with_message() {
        let model = Arc::new(FakeModel::failing("rate limit exceeded"));
        let (status, body) = send(
            app(&model),
            Method::POST,
            "/recommend",
            r#"{"skills": ["Rust"]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": "rate limit exceeded"}));
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let model = Arc::new(FakeModel::replying("[]"));
        let (status, body) = send(app(&model), Method::GET, "/jobs", "").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found"}));
    }
}
