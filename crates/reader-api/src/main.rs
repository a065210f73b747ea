//! # Reader Gateway
//!
//! HTTP gateway for SumUp card readers.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export SUMUP_API_KEY=sup_sk_...
//! export SUMUP_MERCHANT_CODE=MC...
//!
//! # Run the server (PORT defaults to 8080)
//! reader-gateway
//! ```

use reader_api::{routes, state::AppState};
use reader_core::ReaderClient;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    print_banner();

    // Missing credentials abort here, before anything binds
    let state = AppState::new()?;

    let addr = state.config.socket_addr();

    info!("Reader provider: {}", state.client.provider_name());
    info!("Merchant: {}", state.merchant_code());

    let app = routes::create_router(state);

    info!("Reader gateway listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `LOG_FORMAT=json` switches to one JSON object per line
fn init_logging() {
    let json = std::env::var("LOG_FORMAT")
        .map(|f| f.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(fmt::layer))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

fn print_banner() {
    println!(
        r#"
  Reader Gateway
  ━━━━━━━━━━━━━━━━━━━━━━━
  SumUp card reader API
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
