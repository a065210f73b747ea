//! # reader-core
//!
//! Core types and traits for the card reader gateway.
//!
//! This crate provides:
//! - `ReaderClient` trait for talking to a payment-terminal provider
//! - `Money` and the amount parser used by reader checkouts
//! - `CreateReaderBody` and `CreateCheckoutBody` request payloads
//! - `Reader`, `ReaderList` and `ReaderCheckout` opaque provider records
//! - `ReaderError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use reader_core::{parse_amount, CreateCheckoutBody, ReaderClient};
//!
//! let total = parse_amount(&serde_json::json!("12.50")).expect("positive amount");
//! assert_eq!(total.value, 1250);
//!
//! let checkout = client
//!     .create_checkout("MCODE", "rdr_123", CreateCheckoutBody::new(total))
//!     .await?;
//! ```

pub mod client;
pub mod error;
pub mod money;
pub mod reader;

// Re-exports for convenience
pub use client::{BoxedReaderClient, ReaderClient};
pub use error::{ReaderError, ReaderResult};
pub use money::{parse_amount, Money, CHECKOUT_CURRENCY, CHECKOUT_MINOR_UNIT};
pub use reader::{
    CreateCheckoutBody, CreateReaderBody, ProviderRecord, Reader, ReaderCheckout, ReaderList,
    Record, CHECKOUT_DESCRIPTION,
};
