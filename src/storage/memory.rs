//! In-memory order repository.
//!
//! Holds fixed status and order rows and resolves the status join in memory.
//! Used by the HTTP tests and for running the server without a database.

use bigdecimal::BigDecimal;
use chrono::Utc;
use std::collections::HashMap;

use super::error::QueryError;
use super::repository::OrderRepository;
use super::rows::{OrderRow, OrderStatusRow};
use crate::model::Order;

#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    statuses: HashMap<i32, OrderStatusRow>,
    orders: Vec<OrderRow>,
}

impl InMemoryOrderRepository {
    pub fn new(statuses: Vec<OrderStatusRow>, orders: Vec<OrderRow>) -> Self {
        Self {
            statuses: statuses.into_iter().map(|s| (s.id, s)).collect(),
            orders,
        }
    }

    /// Sample catalog: the standard status list and three pending orders for one customer
    pub fn demo() -> Self {
        let statuses = [
            "Pending",
            "Confirmed",
            "Payment Pending",
            "Payment Received",
            "Delivered",
            "Canceled",
        ]
        .iter()
        .zip(1..)
        .map(|(name, id)| OrderStatusRow {
            id,
            name: name.to_string(),
        })
        .collect();

        let now = Utc::now().naive_utc();
        let orders = [(1, 119_998_i64), (2, 99_999), (3, 19_999)]
            .into_iter()
            .map(|(id, cents)| OrderRow {
                id,
                user_id: 2,
                total_amount: BigDecimal::new(cents.into(), 2),
                status_id: 1,
                created_at: now,
                updated_at: now,
            })
            .collect();

        Self::new(statuses, orders)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn list_all_orders(&self) -> Result<Vec<Order>, QueryError> {
        self.orders
            .iter()
            .map(|row| {
                let Some(status) = self.statuses.get(&row.status_id) else {
                    return Err(QueryError::StorageError(format!(
                        "order {} references missing status {}",
                        row.id, row.status_id
                    )));
                };
                row.clone().into_order(status.clone())
            })
            .collect()
    }

    fn ping(&self) -> Result<(), QueryError> {
        Ok(())
    }
}
