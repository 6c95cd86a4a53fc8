//! Configuration management for Courier
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Upstream completion API base URL
    pub openai_api_url: String,
    /// Upstream API key; absence is surfaced per-request, not at startup
    pub openai_api_key: Option<String>,
    /// Model identifier sent with every completion request
    pub openai_model: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("COURIER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("COURIER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid COURIER_PORT")?,

            openai_api_url: env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo-1106".to_string()),
        })
    }
}
