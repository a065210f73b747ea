//! # SumUp Configuration
//!
//! Configuration management for the SumUp integration.
//! Secrets are loaded from environment variables.

use reader_core::ReaderError;
use std::env;

/// Default SumUp API host
pub const DEFAULT_API_BASE_URL: &str = "https://api.sumup.com";

/// SumUp API configuration
#[derive(Clone)]
pub struct SumUpConfig {
    /// API key or OAuth access token
    pub api_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,
}

impl SumUpConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `SUMUP_API_KEY`
    ///
    /// Optional env vars:
    /// - `SUMUP_API_BASE_URL`
    pub fn from_env() -> Result<Self, ReaderError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReaderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("SUMUP_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ReaderError::Configuration("Missing SUMUP_API_KEY env var.".to_string()))?;

        let api_base_url = lookup("SUMUP_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            api_key,
            api_base_url,
        })
    }

    /// Create config with an explicit key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

impl std::fmt::Debug for SumUpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SumUpConfig")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}
