//! Articles API server binary

use anyhow::Context;
use clap::Parser;

use articles_api::api::{create_router, create_router_with_cors, AppState};
use articles_api::catalog::Catalog;
use articles_api::cli::Cli;
use articles_api::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("failed to load configuration")?;

    init_tracing(&config.logging).context("failed to initialise tracing")?;

    let catalog = Catalog::reference().context("invalid reference catalog")?;
    tracing::info!(
        articles = catalog.len(),
        variant = %config.api.variant,
        "Starting articles API",
    );

    let state = AppState::new(catalog, config.api.variant);
    let router = if config.cors.enabled {
        create_router_with_cors(state)
    } else {
        tracing::info!("CORS disabled via configuration");
        create_router(state)
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}
