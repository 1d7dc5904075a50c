//! Babel library HTTP server

use anyhow::Result;
use babel_server::{create_router, create_shared_state, init_prometheus_recorder, ServerConfig};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "babel_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();

    let metrics = if config.metrics {
        Some(init_prometheus_recorder()?)
    } else {
        None
    };

    let state = create_shared_state(&config, metrics);
    let app = create_router(&config, state)?;

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        origins = ?config.allowed_origins,
        max_concurrent_books = config.max_concurrent_books,
        metrics = config.metrics,
        "Babel library listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
