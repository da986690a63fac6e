mod config;
mod errors;
mod export;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{CompletionBackend, OpenAiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (a missing API key is tolerated, a bad PORT is not)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Covercraft API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the completion backend. A missing key does not stop the
    // process: generation requests are rejected with a visible error until
    // the key is configured.
    let backend: Option<Arc<dyn CompletionBackend>> = match &config.openai_api_key {
        Some(key) => {
            info!(
                "Completion client initialized (model: {})",
                llm_client::MODEL
            );
            Some(Arc::new(OpenAiClient::new(key.clone())))
        }
        None => {
            warn!("OPENAI_API_KEY is not set; generation requests will be rejected");
            None
        }
    };

    // Build app state
    let state = AppState {
        backend,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
