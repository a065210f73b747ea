//! # reader-sumup
//!
//! SumUp implementation of `ReaderClient`.
//!
//! Talks to the SumUp Readers API over HTTPS:
//!
//! | Operation | SumUp endpoint |
//! |-----------|----------------|
//! | `create_reader` | `POST /v0.1/merchants/{merchant_code}/readers` |
//! | `list_readers` | `GET /v0.1/merchants/{merchant_code}/readers` |
//! | `create_checkout` | `POST /v0.1/merchants/{merchant_code}/readers/{reader_id}/checkout` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reader_core::{CreateReaderBody, ReaderClient};
//! use reader_sumup::SumUpReaderClient;
//!
//! let client = SumUpReaderClient::from_env()?;
//! let reader = client
//!     .create_reader("MCODE", CreateReaderBody::new("ABC-123", "Lane 1"))
//!     .await?;
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::SumUpReaderClient;
pub use config::SumUpConfig;
