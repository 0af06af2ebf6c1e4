//! Cart types and request shapes for the cart endpoints.

use serde::{Deserialize, Serialize};

use super::{CategoryId, ProductId, ShopId};

/// Server-side cart snapshot. The id is assigned by the server when the cart
/// is created and persisted client-side; items are always taken wholesale
/// from the last fetch.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Total number of units across all lines: the sum of quantities.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Cart total in minor currency units: the sum of unit price times
    /// quantity over all lines. Recomputed from the snapshot, never stored.
    pub fn total_cents(&self) -> i64 {
        self.items
            .iter()
            .map(|item| item.product.price_cents * i64::from(item.quantity))
            .sum()
    }
}

/// A single cart line. Owned by its cart; has no lifecycle of its own.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    /// Number of units. Always positive.
    pub quantity: u32,
    /// Snapshot of the product at the time the server built the cart.
    pub product: ProductSnapshot,
}

/// The product fields the server embeds in each cart line.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    /// Unit price in minor currency units.
    #[serde(rename = "price")]
    pub price_cents: i64,
    pub stock: i64,
    pub category_id: Option<CategoryId>,
    pub shop_id: Option<ShopId>,
}

/// Body for `POST /carts`: creates a cart seeded with one product.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateCartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body for `POST /carts/{id}/items`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body for `PUT /carts/{id}/items/{itemId}`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub quantity: u32,
}
