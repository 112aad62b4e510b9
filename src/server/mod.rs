//! HTTP surface: `GET /orders` plus liveness and readiness checks.

mod error;
mod handlers;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::storage::OrderRepository;

pub use error::AppError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
}

impl AppState {
    pub fn new<R: OrderRepository + 'static>(orders: R) -> Self {
        Self {
            orders: Arc::new(orders),
        }
    }
}

/// Build the router. Cross-origin requests are allowed from any origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(handlers::list_orders))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Bind to the configured address and serve until Ctrl-C
pub async fn serve(
    config: &ServiceConfig,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Orders service listening on http://{}", addr);
    tracing::info!("Orders endpoint: http://{}/orders", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Orders service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
