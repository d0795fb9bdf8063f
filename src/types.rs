//! Wire types for the chatbot backend contract.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat`. Built fresh per call and consumed by
/// serialization; never reused across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
}

impl ChatRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Response body for `POST /chat`.
///
/// `timestamp` is part of the backend contract but optional; a missing or
/// null field decodes to `None` without erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_prompt_only() {
        let body = serde_json::to_value(ChatRequest::new("hello")).unwrap();
        assert_eq!(body, serde_json::json!({"prompt": "hello"}));
    }

    #[test]
    fn chat_response_timestamp_is_optional() {
        let resp: ChatResponse = serde_json::from_str(r#"{"response":"hi"}"#).unwrap();
        assert_eq!(resp.response, "hi");
        assert!(resp.timestamp.is_none());

        let resp: ChatResponse =
            serde_json::from_str(r#"{"response":"hi","timestamp":null}"#).unwrap();
        assert!(resp.timestamp.is_none());

        let resp: ChatResponse =
            serde_json::from_str(r#"{"response":"hi","timestamp":"t"}"#).unwrap();
        assert_eq!(resp.timestamp.as_deref(), Some("t"));
    }
}
