mod ai;
mod analysis;
mod catalog;
mod config;
mod errors;
mod extract;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::llm_client::{GeminiClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

/// UTC timestamp with microsecond precision, used on every response envelope.
pub fn utc_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DocuSense API v{}", env!("CARGO_PKG_VERSION"));

    // Role catalog: read-only after this point, shared across requests
    let catalog = Arc::new(RoleCatalog::builtin());

    // The model client is optional; without a key every AI call takes its
    // deterministic fallback tier.
    let generator: Option<Arc<dyn TextGenerator>> = match &config.gemini_api_key {
        Some(key) => {
            info!("Model client configured ({})", llm_client::MODEL);
            Some(Arc::new(GeminiClient::new(key.clone())))
        }
        None => {
            warn!("GEMINI_API_KEY not found. AI analysis will use fallback responses.");
            None
        }
    };

    let state = AppState {
        catalog,
        generator,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
