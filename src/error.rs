//! Error types for Courier
//!
//! This module defines custom error types used throughout the application.
//! Client-facing messages for configuration and validation failures are
//! localized for the deployment's audience; full detail is logged
//! server-side in English via `tracing`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(String),

    #[error("伺服器設定錯誤：後端環境中找不到名為 OPENAI_API_KEY 的環境變數。")]
    MissingCredential,

    #[error("請求錯誤：缺少 'prompt' 欄位。")]
    MissingPrompt,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details
///
/// The envelope carries a single human-readable `message`; the inbound
/// contract fixes this shape exactly.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MethodNotAllowed(_) => {
                (StatusCode::METHOD_NOT_ALLOWED, self.to_string())
            }
            AppError::MissingCredential => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::MissingPrompt => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Http(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Json(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
