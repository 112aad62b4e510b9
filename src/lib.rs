//! # orders-service: read-only order listing over HTTP
//!
//! Serves `GET /orders` from a PostgreSQL store holding two tables:
//!
//! - `order_statuses (id, name)`: shared lifecycle stages
//! - `orders (id, "userId", "totalAmount", "statusId", "createdAt", "updatedAt")`
//!
//! Each listed order carries its status resolved through an inner join, so a
//! listing is one statement against the store.
//!
//! ## Example
//!
//! ```ignore
//! use orders_service::{AppState, Database, DatabaseConfig, DieselOrderRepository};
//!
//! let db = Database::connect_lazy("postgres://localhost/orders", &DatabaseConfig::default());
//! let app = orders_service::server::router(AppState::new(DieselOrderRepository::new(db)));
//! ```

// Records and table definitions
pub mod model;
pub mod schema;

// Pooling, row mapping and the order query
pub mod storage;

// HTTP surface
pub mod server;

pub mod config;
pub mod telemetry;

// Re-export key types
pub use config::{ConfigError, ServiceConfig};
pub use model::{Order, OrderStatus};
pub use server::{AppError, AppState};
pub use storage::{
    Database, DatabaseConfig, DieselOrderRepository, InMemoryOrderRepository, OrderRepository,
    OrderRow, OrderStatusRow, QueryError,
};
