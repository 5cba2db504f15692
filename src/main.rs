//! customer_order - Customer and Order record management backend
//!
//! Entry point: load config, set up logging, connect to PostgreSQL, create
//! the schema, wire repositories into services, start the gateway.

use std::sync::Arc;

use customer_order::config::AppConfig;
use customer_order::gateway::{self, state::AppState};
use customer_order::logging;
use customer_order::persistence::{CustomerRepository, Database, OrderRepository, schema};
use customer_order::service::{CustomerService, OrderService};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env)?;
    let _guard = logging::init_logging(&config);

    tracing::info!("Starting customer_order (env: {})", env);

    let db = Database::connect(&config.database.url, config.database.max_connections).await?;
    schema::init_schema(db.pool()).await?;
    let db = Arc::new(db);

    let customer_service = CustomerService::new(CustomerRepository::new(db.pool().clone()));
    let order_service = OrderService::new(OrderRepository::new(db.pool().clone()), db.pool().clone());

    let state = Arc::new(AppState::new(customer_service, order_service, db));

    gateway::run_server(&config.server.host, config.server.port, state).await
}
