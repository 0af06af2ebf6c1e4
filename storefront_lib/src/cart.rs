//! Cart session: composes client calls into a locally tracked cart.
//!
//! The session has three logical states: no cart (no stored identifier), an
//! active cart with a fetched snapshot, and an active cart whose last fetch
//! failed (stale identifier suspected). Item counts and totals are pure
//! functions of the last snapshot, never stored independently.

use storefront_api::types::{AddItemRequest, Cart, CreateCartRequest, ProductId, UpdateItemRequest};
use storefront_api::Client;

use crate::error::SessionError;
use crate::store::{StateStore, CART_ID_KEY};

/// Stateful cart wrapper over the API client.
///
/// Every successful mutation is followed by a full re-read of the cart; one
/// extra round trip buys a snapshot that never diverges from the server.
/// Concurrent mutations are not coordinated; the last re-read wins.
pub struct CartSession<'a, S: StateStore> {
    client: &'a Client,
    store: S,
    snapshot: Option<Cart>,
}

impl<'a, S: StateStore> CartSession<'a, S> {
    pub fn new(client: &'a Client, store: S) -> Self {
        Self {
            client,
            store,
            snapshot: None,
        }
    }

    /// The locally persisted cart identifier, if a cart is active.
    pub fn cart_id(&self) -> Option<String> {
        self.store.get(CART_ID_KEY)
    }

    /// The last fetched snapshot, if any.
    pub fn cart(&self) -> Option<&Cart> {
        self.snapshot.as_ref()
    }

    /// Number of units in the cart: the sum of line quantities.
    pub fn item_count(&self) -> u32 {
        self.snapshot.as_ref().map_or(0, Cart::item_count)
    }

    /// Cart total in minor currency units, derived from the last snapshot.
    pub fn total_cents(&self) -> i64 {
        self.snapshot.as_ref().map_or(0, Cart::total_cents)
    }

    /// Fetches the active cart. When no identifier is stored the fetch is
    /// skipped entirely and `Ok(None)` is returned without touching the
    /// network.
    pub async fn fetch(&mut self) -> Result<Option<&Cart>, SessionError> {
        let Some(id) = self.cart_id() else {
            self.snapshot = None;
            return Ok(None);
        };
        let cart = self.client.get_cart(&id).await?;
        self.snapshot = Some(cart);
        Ok(self.snapshot.as_ref())
    }

    /// Adds a product to the cart.
    ///
    /// With no active cart, creates one seeded with the product and persists
    /// the server-assigned identifier; the identifier is only written once
    /// the server has confirmed. With an active cart, issues the add call and
    /// re-reads the authoritative snapshot.
    pub async fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), SessionError> {
        if quantity == 0 {
            return Err(SessionError::InvalidQuantity);
        }
        match self.cart_id() {
            None => {
                let cart = self
                    .client
                    .create_cart(&CreateCartRequest {
                        product_id,
                        quantity,
                    })
                    .await?;
                self.store.set(CART_ID_KEY, &cart.id);
                self.snapshot = Some(cart);
            }
            Some(id) => {
                self.client
                    .add_cart_item(
                        &id,
                        &AddItemRequest {
                            product_id,
                            quantity,
                        },
                    )
                    .await?;
                self.refresh(&id).await?;
            }
        }
        Ok(())
    }

    /// Changes the quantity of one cart line. Fails fast with
    /// [`SessionError::NoActiveCart`] when no identifier is stored.
    pub async fn update_quantity(
        &mut self,
        item_id: &str,
        quantity: u32,
    ) -> Result<(), SessionError> {
        if quantity == 0 {
            return Err(SessionError::InvalidQuantity);
        }
        let id = self.require_cart_id()?;
        self.client
            .update_cart_item(&id, item_id, &UpdateItemRequest { quantity })
            .await?;
        self.refresh(&id).await
    }

    /// Removes one cart line. Fails fast with
    /// [`SessionError::NoActiveCart`] when no identifier is stored.
    pub async fn remove_item(&mut self, item_id: &str) -> Result<(), SessionError> {
        let id = self.require_cart_id()?;
        self.client.remove_cart_item(&id, item_id).await?;
        self.refresh(&id).await
    }

    /// Drops the cart. The server-side clear is best-effort: failure is
    /// logged, and the local identifier is removed regardless so that the
    /// next fetch performs no network call.
    pub async fn clear(&mut self) {
        if let Some(id) = self.cart_id() {
            if let Err(err) = self.client.clear_cart(&id).await {
                tracing::warn!("server-side clear of cart {} failed: {}", id, err);
            }
        }
        self.store.remove(CART_ID_KEY);
        self.snapshot = None;
    }

    fn require_cart_id(&self) -> Result<String, SessionError> {
        self.cart_id().ok_or(SessionError::NoActiveCart)
    }

    async fn refresh(&mut self, cart_id: &str) -> Result<(), SessionError> {
        let cart = self.client.get_cart(cart_id).await?;
        self.snapshot = Some(cart);
        Ok(())
    }
}
