//! NewsCheck Server - REST API for news content verification
//!
//! Exposes newscheck-core via HTTP endpoints:
//! - POST /verify-news - Verify a piece of content (alias: POST /verify)
//! - GET /health, GET /ready - Monitoring probes
//! - GET /swagger-ui - API documentation

use std::net::SocketAddr;

use anyhow::Context;
use newscheck_server::{build_store, create_router_with_state, AppState, Config};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("newscheck_server=info,tower_http=info")),
        )
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    let config = Config::from_env();
    let store = build_store(&config)
        .await
        .context("Failed to initialize verification store")?;
    let state = AppState::new(store, &config);
    let app = create_router_with_state(&config, state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        %addr,
        version = env!("CARGO_PKG_VERSION"),
        lookup_failure_policy = ?config.lookup_failure_policy,
        "NewsCheck server listening"
    );

    // Peer addresses are required by the rate limiter's key extractor
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
