mod config;
mod metrics;
mod models;
mod routes;
mod services;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::host_catalog::HostCatalog;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub hosts: HostCatalog,
    pub start_time: Instant,
}

/// Assemble routes and middleware
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health endpoints
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .route("/metrics", get(routes::health::metrics))
        .route("/ready", get(routes::health::ready))
        .route("/live", get(routes::health::live))
        // VPS hosts
        .route("/api/hosts", get(routes::hosts::list_hosts))
        .route("/api/hosts/selected", put(routes::hosts::select_host))
        // URL tools
        .route("/api/url/rewrite", post(routes::url_tools::rewrite_url))
        .route("/api/url/credentials", post(routes::url_tools::credentials))
        .route("/api/url/playlist", post(routes::url_tools::playlist))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seller_desk=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();
    let port = config.port;

    tracing::info!("Starting Seller Desk Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.node_env);

    let hosts = HostCatalog::load(&config).await?;
    tracing::info!(
        "VPS hosts loaded: {} (selected {})",
        hosts.hosts().len(),
        hosts.selected().await
    );

    let state = Arc::new(AppState {
        config,
        hosts,
        start_time: Instant::now(),
    });

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
