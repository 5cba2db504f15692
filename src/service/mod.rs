// Service layer: business operations over the repositories
pub mod customer;
pub mod error;
pub mod order;

pub use customer::CustomerService;
pub use error::ServiceError;
pub use order::OrderService;
