pub mod customers;
pub mod health;
pub mod orders;

pub use customers::{
    add_customer, delete_customer, get_all_customers, get_customer_by_id, update_customer,
};
pub use health::health_check;
pub use orders::{add_order, add_orders, delete_order, get_all_orders, get_order_by_id};
