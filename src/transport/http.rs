use std::time::Duration;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::{Error, Result};

/// Per-request timeout for chat calls. Health probes use the underlying
/// client's default instead.
pub const DEFAULT_CHAT_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw outcome of one HTTP exchange, before interpretation.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Issues a single outbound HTTP exchange per call.
///
/// Holds the immutable base URL and the shared connection pool; cloning is
/// cheap and clones share the pool. No state is kept between calls.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    chat_timeout: Duration,
}

impl HttpTransport {
    pub(crate) fn new(client: reqwest::Client, base_url: String, chat_timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            chat_timeout,
        }
    }

    /// Resolve `base_url + suffix` into an absolute URL, or fail with
    /// `InvalidUrl` before any network I/O happens.
    fn endpoint(&self, suffix: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.base_url, suffix)).map_err(|_| Error::InvalidUrl)
    }

    /// POST a JSON body to `base_url + suffix` under the chat timeout.
    ///
    /// Serialization happens before dispatch, so an encode failure never
    /// issues network I/O.
    pub(crate) async fn post_json<T: Serialize>(
        &self,
        suffix: &str,
        body: &T,
    ) -> Result<RawResponse> {
        let url = self.endpoint(suffix)?;
        let payload = serde_json::to_vec(body)?;

        debug!(%url, "dispatching chat request");
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.chat_timeout)
            .body(payload)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let body = response.bytes().await.map_err(classify)?;
        Ok(RawResponse { status, body })
    }

    /// GET `base_url + suffix` under the client's default timeout.
    pub(crate) async fn get(&self, suffix: &str) -> Result<RawResponse> {
        let url = self.endpoint(suffix)?;

        debug!(%url, "dispatching health probe");
        let response = self.client.get(url).send().await.map_err(classify)?;

        let status = response.status();
        let body = response.bytes().await.map_err(classify)?;
        Ok(RawResponse { status, body })
    }
}

/// Split reqwest failures along the error taxonomy: failures below the HTTP
/// semantic layer (DNS, connect, timeout, TLS) are `Transport`; a response
/// whose framing or body could not be read back as well-formed HTTP is
/// `InvalidResponse`.
fn classify(err: reqwest::Error) -> Error {
    if err.is_timeout() || err.is_connect() || err.is_request() {
        Error::Transport(err)
    } else if err.is_body() || err.is_decode() {
        Error::InvalidResponse
    } else {
        Error::Transport(err)
    }
}
