//! Completion backend abstraction layer
//!
//! Defines the trait interface for completion backends to keep the
//! request handlers independent of the concrete upstream API, and to
//! allow tests to substitute a stub.

pub mod openai;

use async_trait::async_trait;

use crate::error::AppResult;

pub use openai::OpenAIBackend;

/// Trait defining the interface for completion backends
///
/// Implementations MUST:
/// - Never forward client Authorization headers to the upstream
/// - Use the backend-specific API key from configuration
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Get the backend name for logging
    fn name(&self) -> &'static str;

    /// Whether the backend holds the credential it needs to make calls
    fn is_configured(&self) -> bool;

    /// Send one completion request for `prompt` and return the upstream
    /// response body verbatim.
    ///
    /// The body is parsed as JSON regardless of the upstream status; a
    /// non-success status is reported as [`AppError::Upstream`] carrying
    /// the upstream's own error message when it provides one.
    ///
    /// [`AppError::Upstream`]: crate::error::AppError::Upstream
    async fn complete(&self, prompt: &str) -> AppResult<serde_json::Value>;
}
