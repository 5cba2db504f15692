//! customer_order - Customer and Order record management backend
//!
//! HTTP CRUD over PostgreSQL. One direction per request:
//! gateway handler → service → repository → store, result or error back
//! unchanged.
//!
//! # Modules
//!
//! - [`models`] - Customer and Order record types
//! - [`persistence`] - PostgreSQL repositories, schema, connection pool
//! - [`service`] - Business operations and NotFound semantics
//! - [`gateway`] - HTTP surface (axum router, handlers, error translation)
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing setup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod persistence;
pub mod service;

// Convenient re-exports at crate root
pub use models::{Customer, Order};
pub use persistence::{CustomerRepository, Database, OrderRepository};
pub use service::{CustomerService, OrderService, ServiceError};
