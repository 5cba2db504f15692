//! Customer handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::models::Customer;

use super::super::state::AppState;
use super::super::types::ApiError;

/// POST /customers
pub async fn add_customer(
    State(state): State<Arc<AppState>>,
    Json(customer): Json<Customer>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let saved = state.customer_service.add_customer(customer).await?;
    tracing::info!(customer_id = ?saved.id, "customer created");
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /customers
pub async fn get_all_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state.customer_service.get_all_customers().await?;
    Ok(Json(customers))
}

/// GET /customers/{id}
pub async fn get_customer_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state.customer_service.get_customer_by_id(id).await?;
    Ok(Json(customer))
}

/// PUT /customers/{id}
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(updated): Json<Customer>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state.customer_service.update_customer(id, updated).await?;
    tracing::info!(customer_id = id, "customer updated");
    Ok(Json(customer))
}

/// DELETE /customers/{id}
///
/// Idempotent, no response body.
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.customer_service.delete_customer(id).await?;
    tracing::info!(customer_id = id, "customer deleted");
    Ok(StatusCode::NO_CONTENT)
}
