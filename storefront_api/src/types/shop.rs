//! Shop, category, and delivery zone types.

use serde::{Deserialize, Serialize};

use super::{CategoryId, ShopId};

/// A storefront shop as listed by `/shops/list-frontend`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
}

/// A product category.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A delivery zone offered to the client at checkout.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryZone {
    pub id: i64,
    pub name: String,
    /// Delivery fee in minor currency units.
    #[serde(rename = "fee")]
    pub fee_cents: i64,
}
