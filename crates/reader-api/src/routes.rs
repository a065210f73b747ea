//! # Routes
//!
//! Axum router configuration for the reader API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
///   - GET  /health - Health check
///   - POST /readers - Pair a reader
///   - GET  /readers - List readers
///   - POST /readers/{reader_id}/checkout - Start a checkout on a reader
pub fn create_router(state: AppState) -> Router {
    // The browser frontend is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/readers",
            get(handlers::list_readers).post(handlers::create_reader),
        )
        .route("/readers/{reader_id}/checkout", post(handlers::create_checkout))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
