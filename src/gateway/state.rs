use std::sync::Arc;

use crate::persistence::Database;
use crate::service::{CustomerService, OrderService};

/// Shared gateway state
///
/// Services are constructor-injected; handlers reach the store only through
/// them. The raw `Database` handle is kept for the health check ping.
pub struct AppState {
    pub customer_service: CustomerService,
    pub order_service: OrderService,
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(
        customer_service: CustomerService,
        order_service: OrderService,
        db: Arc<Database>,
    ) -> Self {
        Self {
            customer_service,
            order_service,
            db,
        }
    }
}
