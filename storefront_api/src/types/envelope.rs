//! Response envelope types.
//!
//! The backend's nominal wrapper is `{message, data, statusCode}`, with
//! paginated endpoints adding `content`/`totalPages`/`totalElements`. A
//! handful of endpoints return the payload bare, without any wrapper, so
//! single-object responses are deserialized through the [`Payload`] union
//! and resolved at the client boundary.

use serde::{Deserialize, Serialize};

/// The standard `{message, data, statusCode}` wrapper.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub message: Option<String>,
    pub status_code: Option<i64>,
    pub data: Option<T>,
}

/// Wrapper for paginated list responses.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub message: Option<String>,
    pub status_code: Option<i64>,
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    pub total_pages: Option<i64>,
    pub total_elements: Option<i64>,
}

/// A response that may arrive enveloped or bare, depending on the endpoint.
///
/// `Bare` must come first: every envelope field is optional, so `Envelope`
/// would otherwise swallow any JSON object, bare payloads included.
#[derive(Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum Payload<T> {
    /// The payload returned directly, without a wrapper.
    Bare(T),
    /// The payload wrapped in the standard envelope.
    Enveloped(Envelope<T>),
}

impl<T> Payload<T> {
    /// Collapses both arms into the inner payload. `None` when an envelope
    /// arrived without a `data` field.
    pub fn into_data(self) -> Option<T> {
        match self {
            Payload::Bare(data) => Some(data),
            Payload::Enveloped(envelope) => envelope.data,
        }
    }
}
