//! Order handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::models::Order;

use super::super::state::AppState;
use super::super::types::ApiError;

/// POST /orders
pub async fn add_order(
    State(state): State<Arc<AppState>>,
    Json(order): Json<Order>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let saved = state.order_service.add_order(order).await?;
    tracing::info!(order_id = ?saved.id, "order created");
    Ok((StatusCode::CREATED, Json(saved)))
}

/// POST /orders/bulk
///
/// Persists the whole batch in one transaction; a failure on any element
/// leaves nothing persisted. Returns the saved orders in input order.
pub async fn add_orders(
    State(state): State<Arc<AppState>>,
    Json(orders): Json<Vec<Order>>,
) -> Result<Json<Vec<Order>>, ApiError> {
    tracing::info!(count = orders.len(), "received order batch");
    let saved = state.order_service.add_orders(orders).await?;
    Ok(Json(saved))
}

/// GET /orders
pub async fn get_all_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.order_service.get_all_orders().await?;
    Ok(Json(orders))
}

/// GET /orders/{id}
pub async fn get_order_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Order>, ApiError> {
    let order = state.order_service.get_order_by_id(id).await?;
    Ok(Json(order))
}

/// DELETE /orders/{id}
///
/// Idempotent, no response body.
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.order_service.delete_order(id).await?;
    tracing::info!(order_id = id, "order deleted");
    Ok(StatusCode::NO_CONTENT)
}
