//! Order query access.
//!
//! `OrderRepository` is the seam between the HTTP layer and the store. The
//! PostgreSQL implementation resolves every order's status with one inner
//! join, so a listing is always a single statement.

use diesel::prelude::*;

use super::database::Database;
use super::error::QueryError;
use super::rows::{OrderRow, OrderStatusRow};
use crate::model::Order;
use crate::schema::{order_statuses, orders};

/// Read access to orders.
///
/// Implementations are synchronous and hold no per-call state, so one
/// instance can serve any number of concurrent callers.
pub trait OrderRepository: Send + Sync {
    /// Every order present at call time, each with its status resolved.
    ///
    /// Ordering is whatever the store returns. An empty store yields an empty vector.
    fn list_all_orders(&self) -> Result<Vec<Order>, QueryError>;

    /// Check that the store is reachable
    fn ping(&self) -> Result<(), QueryError>;
}

/// PostgreSQL-backed repository using a pooled Diesel connection per call
#[derive(Clone)]
pub struct DieselOrderRepository {
    db: Database,
}

impl DieselOrderRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn list_all_orders(&self) -> Result<Vec<Order>, QueryError> {
        let mut conn = self.db.get_connection()?;

        let rows = orders::table
            .inner_join(order_statuses::table)
            .select((OrderRow::as_select(), OrderStatusRow::as_select()))
            .load::<(OrderRow, OrderStatusRow)>(&mut conn)?;

        tracing::debug!("Loaded {} order rows", rows.len());

        rows.into_iter()
            .map(|(order, status)| order.into_order(status))
            .collect()
    }

    fn ping(&self) -> Result<(), QueryError> {
        self.db.test_connection()
    }
}
