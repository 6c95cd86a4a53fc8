//! OpenAI completion backend
//!
//! Forwards prompts to the OpenAI chat completions API with the
//! server-held credential attached.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    upstream::CompletionBackend,
};

/// OpenAI chat completions client
pub struct OpenAIBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

/// Chat message sent upstream
#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// Directive requesting a JSON-structured completion
#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Fixed-shape chat completion payload
#[derive(Debug, Serialize)]
struct CompletionPayload {
    model: String,
    messages: Vec<Message>,
    response_format: ResponseFormat,
}

impl OpenAIBackend {
    /// Create a new OpenAI backend
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.openai_api_url.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
        }
    }

    fn payload(&self, prompt: &str) -> CompletionPayload {
        CompletionPayload {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAIBackend {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, prompt: &str) -> AppResult<Value> {
        let api_key = self.api_key.as_ref().ok_or(AppError::MissingCredential)?;

        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, model = %self.model, "Sending completion request upstream");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&self.payload(prompt))
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to send request to upstream");
                e
            })?;

        let status = response.status();

        // Parse the body as JSON regardless of status; upstream errors carry
        // their detail in the body.
        let body: Value = response.json().await.map_err(|e| {
            error!(url = %url, status = %status, error = %e, "Failed to parse upstream response body");
            e
        })?;

        if !status.is_success() {
            error!(status = %status, body = %body, "Upstream completion API returned an error");
            let message = body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("API 請求失敗，狀態碼: {}", status.as_u16()));
            return Err(AppError::Upstream(message));
        }

        debug!(status = %status, "Received completion from upstream");
        Ok(body)
    }
}
