//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes exposing the display currency to dashboard clients
//! - Error-to-response mapping
//! - Shared application state

pub mod error;
pub mod routes;

use axum::Router;
use fransuite_core::currency::CurrencyProvider;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Slot holding the process-wide currency store.
    pub currency: CurrencyProvider,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
