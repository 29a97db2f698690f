//! Black-box endpoint tests driven through the router in-process.
//!
//! The static agent is wired in so no network access is needed; the HTTP
//! contract under test is identical for both adapter variants.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use agent_hub_llm::StaticAgent;
use agent_hub_server::{router, ServerState};

fn test_app() -> Router {
    let state = Arc::new(ServerState::new(Arc::new(StaticAgent::new())));
    router(state)
}

async fn send_prompt(app: Router, body: &Value) -> (StatusCode, String, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/prompt")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    (status, content_type, body)
}

async fn send_health(app: Router) -> (StatusCode, String, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    (status, content_type, body)
}

#[tokio::test]
async fn prompt_returns_hello_world() {
    let (status, _, body) = send_prompt(test_app(), &json!({"prompt": "test prompt"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "hello world");
}

#[tokio::test]
async fn prompt_accepts_varied_input() {
    let prompts = [
        "Simple prompt",
        "A longer prompt with multiple words and punctuation!",
        "12345",
        "Special characters: @#$%^&*()",
    ];

    let app = test_app();
    for prompt in prompts {
        let (status, _, body) = send_prompt(app.clone(), &json!({ "prompt": prompt })).await;

        assert_eq!(status, StatusCode::OK, "prompt {prompt:?} was rejected");
        assert_eq!(body["message"], "hello world");
    }
}

#[tokio::test]
async fn prompt_field_is_required() {
    let (status, content_type, body) = send_prompt(test_app(), &json!({})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(content_type.starts_with("application/json"));
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn empty_prompt_is_rejected() {
    let (status, _, body) = send_prompt(test_app(), &json!({"prompt": ""})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn prompt_response_is_json() {
    let (status, content_type, body) = send_prompt(test_app(), &json!({"prompt": "test"})).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("application/json"));
    assert!(body.is_object());
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn health_reports_healthy() {
    let (status, content_type, body) = send_health(test_app()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("application/json"));
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn health_is_independent_of_request_history() {
    let app = test_app();

    let (status, _, _) = send_prompt(app.clone(), &json!({"prompt": "warm up"})).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _, _) = send_prompt(app.clone(), &json!({"prompt": ""})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _, body) = send_health(app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
