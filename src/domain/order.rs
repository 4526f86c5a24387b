use std::fmt;

use serde::{Deserialize, Serialize};

use super::field_text;

/// Lifecycle states the orders service knows about.
///
/// The form never interprets transitions; this only supplies the value a
/// cleared form falls back to and the choices offered in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Placed,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Placed,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "PLACED",
            OrderStatus::Paid => "PAID",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order as returned by the service, rendered as form text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderRecord {
    #[serde(default, deserialize_with = "field_text")]
    pub id: String,
    #[serde(default, deserialize_with = "field_text")]
    pub customer_id: String,
    #[serde(default, deserialize_with = "field_text")]
    pub tracking_id: String,
    #[serde(default, deserialize_with = "field_text")]
    pub status: String,
    #[serde(default, deserialize_with = "field_text")]
    pub created_time: String,
}

/// Payload for `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCreate {
    pub customer_id: String,
    pub tracking_id: String,
    pub status: String,
}

/// Payload for `PUT /orders/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderUpdate {
    pub id: String,
    pub customer_id: String,
    pub tracking_id: String,
    pub status: String,
}

/// Which attribute an order search filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderQueryKind {
    CustomerId,
    Status,
    ProductId,
}

impl OrderQueryKind {
    /// Name of the query-string parameter the service expects.
    pub fn param(&self) -> &'static str {
        match self {
            OrderQueryKind::CustomerId => "customer_id",
            OrderQueryKind::Status => "status",
            OrderQueryKind::ProductId => "product_id",
        }
    }

    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "customer_id" => Some(OrderQueryKind::CustomerId),
            "status" => Some(OrderQueryKind::Status),
            "product_id" => Some(OrderQueryKind::ProductId),
            _ => None,
        }
    }
}
