//! # Request Handlers
//!
//! Axum request handlers for the reader API.
//!
//! Two failures are answered locally as `400 {"error": ...}`: missing reader
//! fields and an invalid checkout amount. Anything the provider reports is
//! logged and returned as a bare 500.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reader_core::{
    parse_amount, CreateCheckoutBody, CreateReaderBody, ProviderRecord, ReaderClient, ReaderError,
    Record,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, instrument};

pub const MISSING_READER_FIELDS: &str = "pairing_code and name are required";
pub const INVALID_AMOUNT: &str = "amount must be a positive number";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Handler failure
#[derive(Debug)]
pub enum ApiError {
    /// Request rejected before reaching the provider
    Validation(&'static str),
    /// Provider call failed
    Upstream(ReaderError),
}

impl From<ReaderError> for ApiError {
    fn from(err: ReaderError) -> Self {
        ApiError::Upstream(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            }
            ApiError::Upstream(err) => {
                error!(
                    provider_status = ?err.provider_status(),
                    "Reader provider call failed: {}",
                    err
                );
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

type ApiResult = Result<(StatusCode, Json<Record>), ApiError>;

/// Relay a provider record verbatim
fn relay<R: ProviderRecord>(status: StatusCode, record: R) -> (StatusCode, Json<Record>) {
    (status, Json(record.into_record()))
}

/// Parse a request body as a JSON object.
/// Missing, malformed, or non-object bodies count as an empty object.
fn json_object(body: &[u8]) -> Record {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Record::new(),
    }
}

/// Read a field as trimmed text. Null or missing fields are empty.
fn text_field(data: &Record, key: &str) -> String {
    match data.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "reader-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Pair a reader with the merchant account
#[instrument(skip(state, body))]
pub async fn create_reader(State(state): State<AppState>, body: Bytes) -> ApiResult {
    let data = json_object(&body);
    let pairing_code = text_field(&data, "pairing_code");
    let name = text_field(&data, "name");

    if pairing_code.is_empty() || name.is_empty() {
        return Err(ApiError::Validation(MISSING_READER_FIELDS));
    }

    let reader = state
        .client
        .create_reader(state.merchant_code(), CreateReaderBody::new(pairing_code, name))
        .await?;

    info!("Paired reader: id={:?}", reader.id());

    Ok(relay(StatusCode::CREATED, reader))
}

/// List readers for the merchant account
#[instrument(skip(state))]
pub async fn list_readers(State(state): State<AppState>) -> ApiResult {
    let readers = state.client.list_readers(state.merchant_code()).await?;

    Ok(relay(StatusCode::OK, readers))
}

/// Start a checkout on a reader
#[instrument(skip(state, body))]
pub async fn create_checkout(
    State(state): State<AppState>,
    Path(reader_id): Path<String>,
    body: Bytes,
) -> ApiResult {
    let data = json_object(&body);
    let total_amount = data
        .get("amount")
        .and_then(parse_amount)
        .ok_or(ApiError::Validation(INVALID_AMOUNT))?;

    info!("Creating reader checkout: amount={}", total_amount);

    let checkout = state
        .client
        .create_checkout(
            state.merchant_code(),
            &reader_id,
            CreateCheckoutBody::new(total_amount),
        )
        .await?;

    info!(
        "Created reader checkout: client_transaction_id={:?}",
        checkout.client_transaction_id()
    );

    Ok(relay(StatusCode::CREATED, checkout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_object_fallbacks() {
        assert!(json_object(b"").is_empty());
        assert!(json_object(b"not json").is_empty());
        assert!(json_object(b"[1,2]").is_empty());
        assert_eq!(json_object(br#"{"a":1}"#).get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_text_field_coercion() {
        let data = json_object(
            br#"{"s":"  Lane 1 ","n":1234,"b":true,"z":null,"blank":"   "}"#,
        );
        assert_eq!(text_field(&data, "s"), "Lane 1");
        assert_eq!(text_field(&data, "n"), "1234");
        assert_eq!(text_field(&data, "b"), "true");
        assert_eq!(text_field(&data, "z"), "");
        assert_eq!(text_field(&data, "blank"), "");
        assert_eq!(text_field(&data, "missing"), "");
    }

    #[test]
    fn test_validation_response() {
        let response = ApiError::Validation(INVALID_AMOUNT).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_response() {
        let err = ApiError::from(ReaderError::Provider {
            status: 404,
            message: "Not Found".into(),
        });
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
