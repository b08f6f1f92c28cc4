use tracing_subscriber::EnvFilter;

use moodtunes_api::api::{create_router, AppState};
use moodtunes_api::config::Config;
use moodtunes_api::services::catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("moodtunes_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    if config.prewarm_catalog {
        catalog::shared();
    }

    // Initialize application state
    let state = AppState::new();

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
