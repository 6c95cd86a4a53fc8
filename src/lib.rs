//! Courier - Minimal completion relay
//!
//! This library provides the core functionality for the Courier relay
//! server. It forwards client prompts to an upstream LLM completion API
//! with a server-held credential attached, and passes the upstream
//! response back verbatim.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod upstream;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::upstream::{CompletionBackend, OpenAIBackend};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
    pub start_time: Instant,
    /// Completion backend for forwarding prompts to the upstream LLM API
    pub backend: Arc<dyn CompletionBackend>,
}

impl AppState {
    /// Create a new application state
    ///
    /// No explicit request timeout is configured on the HTTP client; the
    /// relay defers to platform defaults for bounding the upstream call.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        let backend: Arc<dyn CompletionBackend> =
            Arc::new(OpenAIBackend::new(http_client.clone(), &config));

        Ok(Self::with_backend(config, http_client, backend))
    }

    /// Create an application state with an injected completion backend
    ///
    /// This is the seam tests use to observe or stub the upstream call.
    pub fn with_backend(
        config: Config,
        http_client: reqwest::Client,
        backend: Arc<dyn CompletionBackend>,
    ) -> Self {
        Self {
            config,
            http_client,
            start_time: Instant::now(),
            backend,
        }
    }
}
