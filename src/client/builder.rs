use std::time::Duration;

use super::core::ChatClient;
use crate::transport::{HttpTransport, DEFAULT_CHAT_TIMEOUT};
use crate::{Error, Result};

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable: the base URL is the only
/// required input, and the chat timeout is overridable mainly so tests can
/// exercise expiry without waiting out the 30 second default.
pub struct ChatClientBuilder {
    base_url: Option<String>,
    chat_timeout: Duration,
}

impl ChatClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            chat_timeout: DEFAULT_CHAT_TIMEOUT,
        }
    }

    /// Set the backend base URL (primarily useful for injecting a mock
    /// server in tests). Well-formedness is checked per call.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the per-request timeout for chat calls. Defaults to 30
    /// seconds. Health probes are unaffected.
    pub fn chat_timeout(mut self, timeout: Duration) -> Self {
        self.chat_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ChatClient> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(Error::Transport)?;
        // An unset base URL behaves like any other malformed one: the first
        // call fails with InvalidUrl before any network I/O.
        let base_url = self.base_url.unwrap_or_default();
        Ok(ChatClient::from_transport(HttpTransport::new(
            client,
            base_url,
            self.chat_timeout,
        )))
    }
}

impl Default for ChatClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
