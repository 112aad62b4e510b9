//! Order and order status records.
//!
//! These are the records returned by the query layer and serialized by the
//! HTTP endpoint. They carry no behavior; storage enforces the non-null and
//! foreign-key constraints at write time.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named lifecycle stage shared by many orders (e.g. "Pending", "Shipped").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatus {
    pub id: i32,
    pub name: String,
}

/// A purchase record with its status resolved.
///
/// Timestamps are stored without a time zone and are always interpreted as UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    /// Exact decimal amount, serialized as a JSON number (`19.99`) without a float round trip.
    #[serde(with = "bigdecimal::serde::json_num")]
    pub total_amount: BigDecimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
