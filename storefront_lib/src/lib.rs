//! Session layer for the storefront client: cart and auth state over the API crate.
//!
//! Wraps `storefront_api` with durable client-side state (the cart identifier
//! and bearer token), the cart state machine, and the token refresh
//! transition. UI code talks to sessions, never to the state store directly.

pub mod auth;
pub mod cart;
pub mod error;
pub mod store;

pub use storefront_api;
pub use storefront_api::types;
pub use storefront_api::{Client, Error as ApiError, PageQuery};

pub use auth::AuthSession;
pub use cart::CartSession;
pub use error::SessionError;
pub use store::{FileStore, MemoryStore, StateStore, AUTH_TOKEN_KEY, CART_ID_KEY};
