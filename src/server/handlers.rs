//! Request handlers.
//!
//! Repository calls are synchronous Diesel queries, so they run on the
//! blocking pool rather than on the async workers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::error::AppError;
use super::AppState;
use crate::model::Order;

/// List every order with its status resolved
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Order>>, AppError> {
    let repo = Arc::clone(&state.orders);
    let orders = tokio::task::spawn_blocking(move || repo.list_all_orders())
        .await??;

    tracing::info!("Returning {} orders", orders.len());

    Ok(Json(orders))
}

/// Health check endpoint (liveness)
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "orders-service",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check endpoint - verifies the database is reachable
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let repo = Arc::clone(&state.orders);
    let ping = tokio::task::spawn_blocking(move || repo.ping())
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match ping {
        Ok(()) => Ok(Json(serde_json::json!({
            "status": "ready",
            "service": "orders-service",
            "database": "connected"
        }))),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
