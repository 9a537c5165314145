// Handler-level tests for the HTTP surface
use anyhow::{bail, Result};
use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use agentforge::error::Error;
use agentforge::generator::ArtifactGenerator;
use agentforge::llm::client::CompletionProvider;
use agentforge::model::AgentSpec;
use agentforge::server::{execute, health, AppState, SharedState};

struct CountingProvider {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

#[async_trait]
impl CompletionProvider for CountingProvider {
    async fn complete(&self, _system: &str, _prompt: &str, _max_tokens: u32) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            bail!("completion endpoint returned 429");
        }
        Ok("generated content".to_string())
    }
}

fn state(fail: bool) -> (SharedState, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = CountingProvider {
        calls: Arc::clone(&calls),
        fail,
    };
    let state = Arc::new(AppState {
        generator: ArtifactGenerator::new(Box::new(provider)),
    });
    (state, calls)
}

fn valid_spec() -> AgentSpec {
    AgentSpec {
        name: "review-summarizer".to_string(),
        description: "summarizes customer reviews".to_string(),
        input_schema: json!({"type": "object", "properties": {"reviews": {"type": "array"}}}),
        output_schema: json!({"type": "object", "properties": {"summary": {"type": "string"}}}),
        extra_instructions: None,
    }
}

#[tokio::test]
async fn test_health_always_reports_healthy() {
    let body = serde_json::to_value(health().await.0).unwrap();
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_execute_returns_all_files_with_status_and_message() {
    let (state, calls) = state(false);

    let response = execute(State(state), Json(valid_spec())).await.unwrap();

    assert_eq!(response.0.status, "success");
    assert!(response.0.message.contains("review-summarizer"));
    assert_eq!(response.0.files.len(), 4);
    assert_eq!(response.0.files[0].path, "app/controllers/agent_controller.py");
    assert_eq!(response.0.files[0].content, "generated content");
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_invalid_input_schema_is_rejected_before_any_provider_call() {
    let (state, calls) = state(false);
    let mut spec = valid_spec();
    spec.input_schema = json!({"type": "string"});

    let err = execute(State(state), Json(spec)).await.unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    match err.0 {
        Error::InvalidSchema(ref reason) => {
            assert!(reason.contains("input_schema"));
            assert!(reason.contains("'type' and 'properties'"));
        }
        ref other => panic!("expected InvalidSchema, got {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_invalid_output_schema_names_the_field() {
    let (state, calls) = state(false);
    let mut spec = valid_spec();
    spec.output_schema = json!({"type": "object", "properties": "oops"});

    let err = execute(State(state), Json(spec)).await.unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    match err.0 {
        Error::InvalidSchema(ref reason) => {
            assert!(reason.contains("output_schema"));
            assert!(reason.contains("'properties' must be an object"));
        }
        ref other => panic!("expected InvalidSchema, got {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_empty_agent_name_is_a_client_error() {
    let (state, calls) = state(false);
    let mut spec = valid_spec();
    spec.name = "   ".to_string();

    let err = execute(State(state), Json(spec)).await.unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_provider_failure_maps_to_server_error() {
    let (state, calls) = state(true);

    let err = execute(State(state), Json(valid_spec())).await.unwrap_err();

    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    match err.0 {
        Error::Generation { ref message, .. } => {
            assert!(message.contains("429"));
        }
        ref other => panic!("expected Generation error, got {:?}", other),
    }
    // The first call failed; no further artifacts were attempted.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_error_response_body_carries_detail() {
    let (state, _calls) = state(false);
    let mut spec = valid_spec();
    spec.input_schema = json!([]);

    let err = execute(State(state), Json(spec)).await.unwrap_err();
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
}
