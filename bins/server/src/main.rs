//! Fransuite API Server
//!
//! Main entry point for the Fransuite back-office service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fransuite_api::{AppState, create_router};
use fransuite_core::currency::{CurrencyProvider, CurrencyStore};
use fransuite_db::{SettingsRepository, connect_with};
use fransuite_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fransuite=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Connect to database
    let db = connect_with(&config.database).await?;
    info!("Connected to database");

    // Display currency: start from the configured default, then apply the
    // stored preference in the background
    let settings_repo = Arc::new(SettingsRepository::new(db));
    let store = Arc::new(CurrencyStore::with_default(
        settings_repo,
        config.currency.default_code,
    ));
    tokio::spawn({
        let store = store.clone();
        async move { store.load_preference().await }
    });
    info!(default = %config.currency.default_code, "Currency store ready");

    let state = AppState {
        currency: CurrencyProvider::with_store(store),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
