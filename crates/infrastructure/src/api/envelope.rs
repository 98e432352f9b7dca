//! Response envelope decoding.
//!
//! Every auth endpoint answers with the same envelope:
//! `{success, data|message, error?}`. Failure messages are extracted in
//! order of preference: the `error` field, then `message`, then a fixed
//! generic fallback. The extracted string is what the UI will show, so
//! it passes through unshaped.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use keystone_application::ApiError;

/// Shown when the server gave no usable failure message.
pub(crate) const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// The `{success, data|message, error?}` wire envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) data: Option<T>,
    #[serde(default)]
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) error: Option<String>,
}

impl<T> Envelope<T> {
    /// The user-facing message for a failed envelope.
    pub(crate) fn failure_message(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string())
    }
}

/// Decodes a response body into a successful envelope.
///
/// Returns `Rejected` for structured failures (envelope-level or HTTP
/// status), and `Malformed` only for a 2xx body that does not parse.
pub(crate) fn parse<T: DeserializeOwned>(status: u16, bytes: &[u8]) -> Result<Envelope<T>, ApiError> {
    let http_ok = (200..300).contains(&status);

    let envelope: Envelope<T> = match serde_json::from_slice(bytes) {
        Ok(envelope) => envelope,
        Err(err) if http_ok => return Err(ApiError::Malformed(err.to_string())),
        Err(_) => {
            return Err(ApiError::Rejected {
                message: GENERIC_FAILURE.to_string(),
                status: Some(status),
            });
        }
    };

    if envelope.success && http_ok {
        Ok(envelope)
    } else {
        Err(ApiError::Rejected {
            message: envelope.failure_message(),
            status: Some(status),
        })
    }
}

/// Decodes a response body, requiring a `data` payload.
pub(crate) fn expect_data<T: DeserializeOwned>(status: u16, bytes: &[u8]) -> Result<T, ApiError> {
    parse::<T>(status, bytes)?
        .data
        .ok_or_else(|| ApiError::Malformed("response envelope has no data".to_string()))
}

/// Decodes a response body where only `success` matters.
pub(crate) fn expect_ok(status: u16, bytes: &[u8]) -> Result<(), ApiError> {
    parse::<serde_json::Value>(status, bytes).map(|_| ())
}
