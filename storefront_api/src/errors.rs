//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Required configuration (base URL) was missing or unusable.
    #[error("configuration error: {0}")]
    Config(String),
    /// An HTTP request failed before a response was received (network error,
    /// timeout, or client construction failure).
    #[error("request failed")]
    RequestFailed,
    /// The API returned a non-success status. `message` carries the server's
    /// envelope message when the body supplied one, otherwise `HTTP <status>`.
    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },
    /// The API returned 401. The session layer uses this to drive token refresh.
    #[error("authentication required")]
    Unauthorized,
    /// The response body could not be parsed, or the envelope carried no data.
    #[error("invalid response body")]
    InvalidBody,
}
