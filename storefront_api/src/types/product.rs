//! Product catalog types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric identifier for a product.
pub type ProductId = i64;
/// Numeric identifier for a shop.
pub type ShopId = i64;
/// Numeric identifier for a category.
pub type CategoryId = i64;

/// Full product record returned by the catalog endpoints.
///
/// Products are immutable from the client's perspective: every response
/// replaces the whole record, nothing is patched locally.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    pub description: Option<String>,

    /// Unit price in minor currency units (cents).
    #[serde(rename = "price")]
    pub price_cents: i64,

    /// URL of the primary product image.
    #[serde(rename = "image")]
    pub image_url: Option<String>,

    /// Units currently in stock. Enforced server-side, reported here for display.
    pub stock: i64,

    /// Average customer rating, when the product has been rated.
    pub rating: Option<f64>,

    pub category_id: Option<CategoryId>,

    pub shop_id: Option<ShopId>,

    pub created_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,
}
