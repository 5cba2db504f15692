// Persistence module for PostgreSQL integration
pub mod customers;
pub mod db;
pub mod orders;
pub mod schema;

pub use customers::CustomerRepository;
pub use db::Database;
pub use orders::OrderRepository;
