mod config;
mod errors;
mod formatting;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_env_filter(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting RefStyle API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the generative model client
    let model = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!("Model client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        model,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Fallback log filter when RUST_LOG is unset: the crate's own target at the
/// configured level. The package name is normalized to a module path first —
/// tracing targets use underscores, so a hyphenated directive matches nothing.
fn default_env_filter(rust_log: &str) -> EnvFilter {
    let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
    EnvFilter::new(format!("{crate_target}={rust_log}"))
}
