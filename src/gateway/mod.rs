pub mod handlers;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tokio::net::TcpListener;

use state::AppState;

/// Build the HTTP router
///
/// Each request is stateless: handler → service → repository → store, with
/// the result (or error) flowing back unchanged.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Customer CRUD
        .route("/customers", post(handlers::add_customer))
        .route("/customers", get(handlers::get_all_customers))
        .route("/customers/{id}", get(handlers::get_customer_by_id))
        .route("/customers/{id}", put(handlers::update_customer))
        .route("/customers/{id}", delete(handlers::delete_customer))
        // Order CRUD
        .route("/orders", post(handlers::add_order))
        .route("/orders/bulk", post(handlers::add_orders))
        .route("/orders", get(handlers::get_all_orders))
        .route("/orders/{id}", get(handlers::get_order_by_id))
        .route("/orders/{id}", delete(handlers::delete_order))
        .with_state(state)
}

/// Start the HTTP gateway server
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Gateway listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
