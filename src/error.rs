use thiserror::Error;

/// Unified error type for the chatbot client.
///
/// Every failure a call can produce is classified into exactly one variant
/// before it reaches the caller; nothing is swallowed or logged-and-dropped
/// internally. All variants are terminal — the client never retries.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured base URL plus the operation's path suffix does not
    /// form a well-formed URL. Raised before any network I/O.
    #[error("Invalid server URL")]
    InvalidUrl,

    /// Request body encoding or response body decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network-level failure below the HTTP semantic layer: DNS resolution,
    /// connection refused, timeout expiry, TLS.
    #[error("Network transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// A response arrived but was not a well-formed HTTP response.
    #[error("Invalid server response")]
    InvalidResponse,

    /// The backend answered HTTP 200 with an empty body.
    #[error("No data received from server")]
    NoData,

    /// The backend answered with a non-200 status. Carries the status code
    /// and the response body as plain text ("Unknown error" when the body
    /// is not valid UTF-8).
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The health probe got a non-200 status or a malformed response.
    #[error("Server is currently unavailable")]
    ServerUnavailable,
}
