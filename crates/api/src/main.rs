use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use shelf_api::app::{self, services::AppServices};
use shelf_api::config::ServerConfig;
use shelf_inventory::InMemoryItemStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    shelf_observability::init(&config.log_level);

    tracing::info!(service = %config.service_name, "application starting up");

    let services = Arc::new(AppServices::new(
        InMemoryItemStore::new(),
        config.service_name.clone(),
    ));
    let app = app::build_app(services);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(addr = %listener.local_addr()?, "application is ready to accept requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shelf_api::shutdown::signal())
        .await
        .context("server error")?;

    tracing::info!("application shutting down");
    Ok(())
}
