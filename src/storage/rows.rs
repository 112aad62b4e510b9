//! Diesel row structs for the orders tables.
//!
//! Rows mirror the stored columns one to one; `OrderRow::into_order` pairs an
//! order row with its joined status row to build the domain record.

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::error::QueryError;
use crate::model::{Order, OrderStatus};
use crate::schema::{order_statuses, orders};

/// Row of the `order_statuses` table
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = order_statuses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderStatusRow {
    pub id: i32,
    pub name: String,
}

/// Row of the `orders` table, with the status still a foreign key
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
    pub user_id: i32,
    pub total_amount: BigDecimal,
    pub status_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<OrderStatusRow> for OrderStatus {
    fn from(row: OrderStatusRow) -> Self {
        OrderStatus {
            id: row.id,
            name: row.name,
        }
    }
}

impl OrderRow {
    /// Resolve the status reference. The joined row must be the one `status_id` points at.
    pub fn into_order(self, status: OrderStatusRow) -> Result<Order, QueryError> {
        if status.id != self.status_id {
            return Err(QueryError::StorageError(format!(
                "order {} references status {} but was joined with status {}",
                self.id, self.status_id, status.id
            )));
        }

        Ok(Order {
            id: self.id,
            user_id: self.user_id,
            total_amount: self.total_amount,
            status: status.into(),
            created_at: self.created_at.and_utc(),
            updated_at: self.updated_at.and_utc(),
        })
    }
}
