//! Classification of completed chat exchanges.
//!
//! The checks form a strict priority chain. Reordering them changes which
//! error gets reported when several conditions hold at once: a non-200
//! status with an unparsable body must report `Server`, never
//! `Serialization`. Transport-level failures and malformed responses never
//! reach this point; the transport classifies those first.

use reqwest::StatusCode;

use crate::transport::RawResponse;
use crate::types::ChatResponse;
use crate::{Error, Result};

/// Interpret the raw outcome of a `POST /chat` exchange.
pub(crate) fn chat_reply(raw: RawResponse) -> Result<String> {
    if raw.status != StatusCode::OK {
        let message = std::str::from_utf8(&raw.body)
            .map(str::to_owned)
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(Error::Server {
            status: raw.status.as_u16(),
            message,
        });
    }

    if raw.body.is_empty() {
        return Err(Error::NoData);
    }

    let response: ChatResponse = serde_json::from_slice(&raw.body)?;
    Ok(response.response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn raw(status: u16, body: &'static [u8]) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: Bytes::from_static(body),
        }
    }

    #[test]
    fn ok_body_yields_reply() {
        let reply = chat_reply(raw(200, br#"{"response":"hi","timestamp":"t"}"#)).unwrap();
        assert_eq!(reply, "hi");
    }

    #[test]
    fn missing_timestamp_is_accepted() {
        let reply = chat_reply(raw(200, br#"{"response":"hi"}"#)).unwrap();
        assert_eq!(reply, "hi");
    }

    #[test]
    fn non_200_reports_status_and_body_text() {
        let err = chat_reply(raw(500, b"boom")).unwrap_err();
        assert!(matches!(
            err,
            Error::Server { status: 500, ref message } if message == "boom"
        ));
    }

    #[test]
    fn non_200_wins_over_unparsable_body() {
        // "boom" is not valid JSON; the status check must come first.
        let err = chat_reply(raw(503, b"boom")).unwrap_err();
        assert!(matches!(err, Error::Server { status: 503, .. }));
    }

    #[test]
    fn non_utf8_error_body_falls_back_to_unknown() {
        let err = chat_reply(raw(500, &[0xff, 0xfe])).unwrap_err();
        assert!(matches!(
            err,
            Error::Server { status: 500, ref message } if message == "Unknown error"
        ));
    }

    #[test]
    fn empty_error_body_decodes_to_empty_message() {
        let err = chat_reply(raw(404, b"")).unwrap_err();
        assert!(matches!(
            err,
            Error::Server { status: 404, ref message } if message.is_empty()
        ));
    }

    #[test]
    fn empty_200_body_is_no_data() {
        assert!(matches!(chat_reply(raw(200, b"")).unwrap_err(), Error::NoData));
    }

    #[test]
    fn wrong_shape_is_serialization_error() {
        let err = chat_reply(raw(200, br#"{"bad":"shape"}"#)).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
