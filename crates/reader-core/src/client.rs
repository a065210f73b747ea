//! # Reader Client Trait
//!
//! Seam between the HTTP layer and a payment-terminal provider.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    ReaderClient (trait)                     │
//! │  ├── create_reader()                                        │
//! │  ├── list_readers()                                         │
//! │  └── create_checkout()                                      │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┴─────────────────┐
//!          │                                   │
//!  ┌───────┴───────┐                   ┌───────┴───────┐
//!  │  SumUpReader  │                   │  test doubles │
//!  │    Client     │                   │               │
//!  └───────────────┘                   └───────────────┘
//! ```

use crate::error::ReaderResult;
use crate::reader::{CreateCheckoutBody, CreateReaderBody, Reader, ReaderCheckout, ReaderList};
use async_trait::async_trait;
use std::sync::Arc;

/// Operations the gateway needs from a card reader provider.
///
/// Every call is scoped to a merchant account. Implementations must not
/// retry, validate, or reshape anything: failures are returned as-is.
#[async_trait]
pub trait ReaderClient: Send + Sync {
    /// Pair a reader with the merchant account.
    async fn create_reader(
        &self,
        merchant_code: &str,
        body: CreateReaderBody,
    ) -> ReaderResult<Reader>;

    /// List the readers paired with the merchant account.
    async fn list_readers(&self, merchant_code: &str) -> ReaderResult<ReaderList>;

    /// Start a checkout on a paired reader.
    async fn create_checkout(
        &self,
        merchant_code: &str,
        reader_id: &str,
        body: CreateCheckoutBody,
    ) -> ReaderResult<ReaderCheckout>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared reader client (dynamic dispatch)
pub type BoxedReaderClient = Arc<dyn ReaderClient>;
