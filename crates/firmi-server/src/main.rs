//! Firmi HTTP Server
//!
//! Serves the Leptos WASM frontend and forwards chat messages to the
//! configured chat service.

mod config;
mod error;
mod handlers;
mod routes;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::ServerConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;

    if !config.static_dir.join("index.html").exists() {
        tracing::warn!("⚠ No index.html in {}", config.static_dir.display());
        tracing::warn!("  Build the frontend into STATIC_DIR first");
    }
    match &config.chat_upstream {
        Some(url) => tracing::info!("✓ Chat forwarded to {}", url),
        None => {
            tracing::warn!("⚠ CHAT_UPSTREAM_URL not set - chat disabled");
        }
    }

    let addr = config.bind_addr;
    let app = routes::router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("🚀 firmi-server running on http://{}", addr);
    tracing::info!("  GET  /health    - Health check");
    tracing::info!("  POST /api/chat  - Send chat message");

    axum::serve(listener, app).await?;

    Ok(())
}
