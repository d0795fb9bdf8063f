//! HTTP dispatch: URL construction, timeouts, raw exchange.

mod http;

pub use http::{HttpTransport, DEFAULT_CHAT_TIMEOUT};

pub(crate) use http::RawResponse;
