//! # chatbot-client
//!
//! Async HTTP client for a chatbot backend. It exposes exactly two
//! operations: send a text prompt and get the backend's reply, and probe
//! the backend for liveness.
//!
//! ## Overview
//!
//! The crate is a thin façade over one HTTP contract:
//!
//! - `POST {base_url}/chat` with body `{"prompt": "<string>"}` returning
//!   `{"response": "<string>", "timestamp": "<optional string>"}`
//! - `GET {base_url}/health` where any `200` means alive
//!
//! Every call performs exactly one network round trip and resolves exactly
//! once, either with the typed payload or with one of the [`Error`]
//! variants. There is no retry, caching, or shared state between calls.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatbot_client::ChatClient;
//!
//! #[tokio::main]
//! async fn main() -> chatbot_client::Result<()> {
//!     let client = ChatClient::new("http://localhost:8080");
//!
//!     if client.health_check().await? {
//!         let reply = client.send_message("Hello, how are you?").await?;
//!         println!("{reply}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`ChatClient`] operations and response interpretation |
//! | [`transport`] | HTTP dispatch, URL construction, timeouts |
//! | [`types`] | Wire types ([`ChatRequest`], [`ChatResponse`]) |
//! | [`error`] | Error taxonomy for both operations |

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ChatClient, ChatClientBuilder};
pub use error::Error;
pub use types::{ChatRequest, ChatResponse};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
