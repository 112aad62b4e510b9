//! Storage layer: connection pooling, row mapping and order queries.

pub mod database;
pub mod error;
pub mod memory;
pub mod migrations;
pub mod repository;
pub mod rows;

pub use database::{Database, DatabaseConfig, DbConnection, Pool, PooledConnection};
pub use error::QueryError;
pub use memory::InMemoryOrderRepository;
pub use repository::{DieselOrderRepository, OrderRepository};
pub use rows::{OrderRow, OrderStatusRow};
