use reqwest::StatusCode;

use super::builder::ChatClientBuilder;
use super::interpret;
use crate::transport::{HttpTransport, DEFAULT_CHAT_TIMEOUT};
use crate::types::ChatRequest;
use crate::{Error, Result};

/// Client for one chatbot backend.
///
/// Holds the immutable base URL and a shared connection pool; cloning is
/// cheap and clones can be used from concurrent tasks. Calls are fully
/// independent: each performs exactly one network round trip and resolves
/// exactly once, with no retries and no state carried between calls.
#[derive(Clone)]
pub struct ChatClient {
    transport: HttpTransport,
}

impl ChatClient {
    /// Create a client with default configuration (30 second chat timeout).
    ///
    /// The base URL is stored as given; well-formedness is checked per call,
    /// before any network I/O.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            transport: HttpTransport::new(
                reqwest::Client::new(),
                base_url.into(),
                DEFAULT_CHAT_TIMEOUT,
            ),
        }
    }

    /// Create a builder for custom configuration.
    pub fn builder() -> ChatClientBuilder {
        ChatClientBuilder::new()
    }

    pub(crate) fn from_transport(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Send a prompt to `POST {base_url}/chat` and return the backend's
    /// textual reply.
    ///
    /// The prompt is sent as-is; empty prompts are permitted and rejection,
    /// if any, comes from the backend.
    pub async fn send_message(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(prompt);
        let raw = self.transport.post_json("/chat", &request).await?;
        interpret::chat_reply(raw)
    }

    /// Probe `GET {base_url}/health` for liveness.
    ///
    /// Returns `Ok(true)` iff the backend answered HTTP 200; the body is
    /// ignored. Any other status, or a malformed response, is
    /// [`Error::ServerUnavailable`]; transport failures and URL errors
    /// surface unchanged.
    pub async fn health_check(&self) -> Result<bool> {
        match self.transport.get("/health").await {
            Ok(raw) if raw.status == StatusCode::OK => Ok(true),
            Ok(_) => Err(Error::ServerUnavailable),
            Err(err @ (Error::Transport(_) | Error::InvalidUrl)) => Err(err),
            Err(_) => Err(Error::ServerUnavailable),
        }
    }
}
