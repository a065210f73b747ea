//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the startup configuration and the reader client.

use reader_core::{BoxedReaderClient, ReaderError, ReaderResult};
use reader_sumup::{SumUpConfig, SumUpReaderClient};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Merchant account every reader call is scoped to
    pub merchant_code: String,
}

impl AppConfig {
    /// Create a config listening on all interfaces, port 8080
    pub fn new(merchant_code: impl Into<String>) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            merchant_code: merchant_code.into(),
        }
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ReaderResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let merchant_code = lookup("SUMUP_MERCHANT_CODE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ReaderError::Configuration("Missing SUMUP_MERCHANT_CODE env var.".to_string())
            })?;

        let mut config = Self::new(merchant_code);

        if let Some(port) = lookup("PORT").filter(|p| !p.trim().is_empty()) {
            config.port = port.trim().parse().map_err(|_| {
                ReaderError::Configuration(format!("PORT must be a valid number, got {:?}", port))
            })?;
        }

        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().parse().map_err(|_| {
                ReaderError::Configuration(format!("HOST must be an IP address, got {:?}", host))
            })?;
        }

        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Reader provider client
    pub client: BoxedReaderClient,
    /// Application config
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState backed by SumUp, configured from the environment
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the SumUp-backed state through an arbitrary variable lookup.
    ///
    /// The API key is checked before the merchant code; either one missing
    /// is an error.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client = SumUpConfig::from_lookup(&lookup)
            .and_then(SumUpReaderClient::new)
            .map_err(|e| anyhow::anyhow!("Failed to initialize SumUp: {}", e))?;

        let config = AppConfig::from_lookup(&lookup)?;

        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create an AppState around any reader client
    pub fn with_client(config: AppConfig, client: BoxedReaderClient) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    /// Merchant account for reader calls
    pub fn merchant_code(&self) -> &str {
        &self.config.merchant_code
    }
}
