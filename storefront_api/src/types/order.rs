//! Order placement types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProductId;

/// Contact details supplied with an order.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: String,
}

/// One ordered line: a product reference and a quantity.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body for `POST /orders/place`. Sent atomically; there is no client-side
/// order state machine.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub contact: ContactInfo,
    pub items: Vec<OrderLine>,
    pub delivery_zone_id: Option<i64>,
}

/// Order record as returned by the server. The id is opaque.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub status: String,
    /// Order total in minor currency units, when the server reports one.
    #[serde(rename = "total")]
    pub total_cents: Option<i64>,
    pub placed_at: Option<DateTime<Utc>>,
}
