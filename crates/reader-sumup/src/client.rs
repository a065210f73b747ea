//! # SumUp Readers Client
//!
//! `ReaderClient` backed by the SumUp REST API.

use crate::config::SumUpConfig;
use async_trait::async_trait;
use reader_core::{
    CreateCheckoutBody, CreateReaderBody, Reader, ReaderCheckout, ReaderClient, ReaderError,
    ReaderList, ReaderResult,
};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

const API_VERSION: &str = "v0.1";

/// SumUp card reader client
pub struct SumUpReaderClient {
    config: SumUpConfig,
    client: Client,
}

impl SumUpReaderClient {
    /// Create a new SumUp client
    pub fn new(config: SumUpConfig) -> ReaderResult<Self> {
        // Validate the base URL up front so a bad value fails at startup.
        Url::parse(&config.api_base_url).map_err(|e| {
            ReaderError::Configuration(format!(
                "Invalid SumUp API base URL {}: {}",
                config.api_base_url, e
            ))
        })?;

        let client = Client::builder()
            .user_agent(concat!("reader-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReaderError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> ReaderResult<Self> {
        let config = SumUpConfig::from_env()?;
        Self::new(config)
    }

    /// Build `{base}/v0.1/merchants/{merchant_code}/readers[/...]`, percent-encoding each segment
    fn readers_url(&self, merchant_code: &str, rest: &[&str]) -> ReaderResult<Url> {
        let mut url = Url::parse(&self.config.api_base_url).map_err(|e| {
            ReaderError::Configuration(format!("Invalid SumUp API base URL: {}", e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ReaderError::Configuration("SumUp API base URL cannot be a base".to_string())
            })?
            .pop_if_empty()
            .extend([API_VERSION, "merchants", merchant_code, "readers"])
            .extend(rest);

        Ok(url)
    }

    /// Send an authorized request and decode the JSON object it returns
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ReaderResult<T> {
        let response = request
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| ReaderError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ReaderError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("SumUp API error: status={}, body={}", status, body);

            return Err(ReaderError::Provider {
                status: status.as_u16(),
                message: provider_error_message(&body)
                    .unwrap_or_else(|| format!("HTTP {}", status)),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            ReaderError::Serialization(format!("Failed to parse SumUp response: {}", e))
        })
    }
}

#[async_trait]
impl ReaderClient for SumUpReaderClient {
    #[instrument(skip(self, body), fields(name = %body.name))]
    async fn create_reader(
        &self,
        merchant_code: &str,
        body: CreateReaderBody,
    ) -> ReaderResult<Reader> {
        let url = self.readers_url(merchant_code, &[])?;
        debug!("Creating SumUp reader: url={}", url);

        let reader: Reader = self.send(self.client.post(url).json(&body)).await?;

        info!("Created SumUp reader: id={:?}", reader.id());
        Ok(reader)
    }

    #[instrument(skip(self))]
    async fn list_readers(&self, merchant_code: &str) -> ReaderResult<ReaderList> {
        let url = self.readers_url(merchant_code, &[])?;
        debug!("Listing SumUp readers: url={}", url);

        let readers: ReaderList = self.send(self.client.get(url)).await?;

        debug!("Listed SumUp readers: count={:?}", readers.item_count());
        Ok(readers)
    }

    #[instrument(skip(self, body), fields(amount = %body.total_amount))]
    async fn create_checkout(
        &self,
        merchant_code: &str,
        reader_id: &str,
        body: CreateCheckoutBody,
    ) -> ReaderResult<ReaderCheckout> {
        let url = self.readers_url(merchant_code, &[reader_id, "checkout"])?;
        debug!("Creating SumUp reader checkout: url={}", url);

        let checkout: ReaderCheckout = self.send(self.client.post(url).json(&body)).await?;

        info!(
            "Created SumUp reader checkout: client_transaction_id={:?}",
            checkout.client_transaction_id()
        );
        Ok(checkout)
    }

    fn provider_name(&self) -> &'static str {
        "sumup"
    }
}

/// Extract a human readable message from a SumUp error body.
///
/// The Readers API nests details under `errors`, older endpoints put
/// `message` or `detail` at the top level. Falls back to the raw body.
fn provider_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
        return Some(trimmed.to_string());
    };

    let text_of = |v: &Value| -> Option<String> {
        ["detail", "message"]
            .iter()
            .find_map(|key| v.get(*key).and_then(Value::as_str))
            .map(String::from)
    };

    text_of(&value)
        .or_else(|| value.get("errors").and_then(|e| text_of(e)))
        .or_else(|| Some(trimmed.to_string()))
}
