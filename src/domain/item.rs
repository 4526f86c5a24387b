use serde::{Deserialize, Serialize};

use super::field_text;

/// A line item as returned by the service, rendered as form text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemRecord {
    #[serde(default, deserialize_with = "field_text")]
    pub id: String,
    #[serde(default, deserialize_with = "field_text")]
    pub order_id: String,
    #[serde(default, deserialize_with = "field_text")]
    pub product_id: String,
    #[serde(default, deserialize_with = "field_text")]
    pub quantity: String,
    #[serde(default, deserialize_with = "field_text")]
    pub price: String,
}

/// Payload for `POST /orders/{order_id}/items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemCreate {
    pub order_id: String,
    pub product_id: String,
    pub quantity: String,
    pub price: String,
}

/// Payload for `PUT /orders/{order_id}/items/{item_id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemUpdate {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub quantity: String,
    pub price: String,
}
