//! Prompt analysis endpoint
//!
//! Relays a client prompt to the completion backend and passes the
//! upstream response through verbatim.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::{error::AppError, AppState};

/// Inbound analysis request
///
/// Parsed leniently: a body that is not valid JSON, or that lacks a
/// usable `prompt`, fails validation rather than surfacing a parse error.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Handle prompt analysis requests
///
/// Registered for every method so the handler owns the method check;
/// preflight `OPTIONS` is answered by the cross-origin middleware before
/// this handler runs. Decision points, each terminal on failure:
///
/// 1. Method must be `POST` (405 otherwise).
/// 2. The backend credential must be configured (500 otherwise); checked
///    before the body is read so misconfiguration fails fast.
/// 3. `prompt` must be present and non-empty (400 otherwise).
/// 4. One upstream call; its JSON body is returned unchanged on success.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Response, AppError> {
    if request.method() != Method::POST {
        return Err(AppError::MethodNotAllowed(request.method().to_string()));
    }

    if !state.backend.is_configured() {
        error!("OPENAI_API_KEY was not found in the environment; rejecting request");
        return Err(AppError::MissingCredential);
    }

    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to read request body: {}", e)))?;

    let analyze_request: AnalyzeRequest = serde_json::from_slice(&body).unwrap_or_default();
    let prompt = analyze_request
        .prompt
        .filter(|p| !p.is_empty())
        .ok_or(AppError::MissingPrompt)?;

    info!(
        backend = %state.backend.name(),
        prompt_len = prompt.len(),
        "Forwarding prompt to completion backend"
    );

    let completion = state.backend.complete(&prompt).await?;

    Ok((StatusCode::OK, Json(completion)).into_response())
}
