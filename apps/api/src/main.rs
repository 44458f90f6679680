mod analysis;
mod config;
mod errors;
mod extraction;
mod models;
mod render;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{InMemoryResultStore, RedisResultStore, ResultStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume matcher v{}", env!("CARGO_PKG_VERSION"));

    let results = build_result_store(&config).await?;

    info!(
        "Upload limit {} bytes, results kept for {}s",
        config.max_upload_bytes, config.result_ttl_secs
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        results,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the upload form has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Redis when `REDIS_URL` is set, otherwise a process-local map.
async fn build_result_store(config: &Config) -> Result<Arc<dyn ResultStore>> {
    match &config.redis_url {
        Some(url) => {
            let store = RedisResultStore::open(url, config.result_ttl_secs).await?;
            info!("Result store: Redis");
            Ok(Arc::new(store))
        }
        None => {
            info!("Result store: in-memory");
            Ok(Arc::new(InMemoryResultStore::new(Duration::from_secs(
                config.result_ttl_secs,
            ))))
        }
    }
}
