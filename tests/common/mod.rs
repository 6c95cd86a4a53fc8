//! Common test utilities for Courier
//!
//! Shared fixtures, stub backends, and helpers used across the
//! integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use courier::{routes, AppResult, AppState, CompletionBackend, Config, OpenAIBackend};

/// Test configuration constants
pub mod constants {
    /// Default test API key
    pub const TEST_API_KEY: &str = "test-api-key";
    /// Model identifier used by test configs
    pub const TEST_MODEL: &str = "gpt-3.5-turbo-1106";
}

/// Build a config pointing at the given upstream URL
pub fn test_config(api_url: &str, api_key: Option<&str>) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Let OS assign port
        openai_api_url: api_url.to_string(),
        openai_api_key: api_key.map(str::to_string),
        openai_model: constants::TEST_MODEL.to_string(),
    }
}

/// Build the full app router with an injected backend
pub fn router_with_backend(backend: Arc<dyn CompletionBackend>) -> Router {
    let config = test_config("http://127.0.0.1:9", Some(constants::TEST_API_KEY));
    let state = Arc::new(AppState::with_backend(
        config,
        reqwest::Client::new(),
        backend,
    ));
    routes::create_router(state)
}

/// Build the full app router with the real OpenAI backend pointed at
/// `api_url` (typically a wiremock server)
pub fn router_with_openai(api_url: &str, api_key: Option<&str>) -> Router {
    let config = test_config(api_url, api_key);
    let http_client = reqwest::Client::new();
    let backend: Arc<dyn CompletionBackend> =
        Arc::new(OpenAIBackend::new(http_client.clone(), &config));
    let state = Arc::new(AppState::with_backend(config, http_client, backend));
    routes::create_router(state)
}

/// Completion backend stub that records how often it is invoked
pub struct StubBackend {
    configured: bool,
    response: Value,
    calls: AtomicUsize,
}

impl StubBackend {
    /// A configured stub returning `response` on every call
    pub fn new(response: Value) -> Self {
        Self {
            configured: true,
            response,
            calls: AtomicUsize::new(0),
        }
    }

    /// A stub with no credential: requests must fail before reaching it
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            response: Value::Null,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `complete` was invoked
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for StubBackend {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, _prompt: &str) -> AppResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Mock upstream completion API responses
pub mod upstream_mocks {
    use super::*;

    /// Canonical successful completion body
    pub fn completion_body() -> Value {
        json!({
            "id": "chatcmpl-test123",
            "object": "chat.completion",
            "created": 1706745600,
            "model": constants::TEST_MODEL,
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": "{\"verdict\":\"ok\"}"
                    },
                    "finish_reason": "stop"
                }
            ],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 8,
                "total_tokens": 18
            }
        })
    }

    /// Mock a successful chat completion, matching the exact outbound
    /// request shape the relay is expected to produce
    pub async fn mock_chat_completion(server: &MockServer, prompt: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header(
                "Authorization",
                format!("Bearer {}", constants::TEST_API_KEY).as_str(),
            ))
            .and(body_partial_json(json!({
                "model": constants::TEST_MODEL,
                "messages": [{"role": "user", "content": prompt}],
                "response_format": {"type": "json_object"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body()))
            .mount(server)
            .await;
    }

    /// Mock an upstream failure with the given status and body
    pub async fn mock_chat_completion_failure(server: &MockServer, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(server)
            .await;
    }
}
