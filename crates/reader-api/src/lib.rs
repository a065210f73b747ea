//! # reader-api
//!
//! HTTP API layer for the card reader gateway.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for pairing readers and starting checkouts
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/readers` | Pair a reader |
//! | GET | `/readers` | List readers |
//! | POST | `/readers/{reader_id}/checkout` | Start a checkout on a reader |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
