mod config;
mod content;
mod errors;
mod layout;
mod models;
mod pages;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ContentSource};
use crate::content::{CachedStore, FsStore, S3Store, SharedStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Darkroom API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;

    let state = AppState {
        store,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the content backend and wraps it in the Redis cache when configured.
async fn build_store(config: &Config) -> Result<SharedStore> {
    let base: SharedStore = match &config.content {
        ContentSource::Filesystem { root } => {
            info!("Serving content from directory {root}");
            Arc::new(FsStore::new(root))
        }
        ContentSource::S3(settings) => {
            let store = S3Store::connect(settings).await;
            info!(
                "Serving content from s3://{} via {}",
                settings.bucket, settings.endpoint
            );
            Arc::new(store)
        }
    };

    let Some(redis_url) = &config.redis_url else {
        return Ok(base);
    };
    let redis = redis::Client::open(redis_url.as_str()).context("REDIS_URL is not a valid Redis URL")?;
    info!(
        "Redis content cache enabled (ttl {}s, timeout {}ms)",
        config.cache_ttl_secs, config.cache_timeout_ms
    );
    Ok(Arc::new(CachedStore::new(
        base,
        redis,
        config.cache_ttl_secs,
        Duration::from_millis(config.cache_timeout_ms),
    )))
}
