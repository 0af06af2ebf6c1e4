//! Error types for the session layer.

/// Errors produced by the session layer, wrapping upstream API errors and
/// adding precondition failures.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// An error from the underlying API client.
    #[error(transparent)]
    Api(#[from] storefront_api::Error),
    /// A cart mutation was attempted with no active cart identifier stored.
    #[error("no active cart")]
    NoActiveCart,
    /// Quantities must be positive integers.
    #[error("quantity must be at least 1")]
    InvalidQuantity,
}
