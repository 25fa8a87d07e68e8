//! Response envelope interpretation.
//!
//! Every resolver endpoint answers with the same JSON envelope:
//! `{"status": bool, "result": {...}}` on success, or
//! `{"status": false, "message": "..."}` when nothing was resolvable.

use serde::Deserialize;

use crate::error::{Result, SpotifyError};

/// Fallback shown when the service rejects a request without a message.
const DEFAULT_REJECTION_MESSAGE: &str = "No result found!";

/// The `{status, result|message}` envelope around every response body.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Whether the service resolved the request.
    #[serde(default)]
    pub status: bool,

    /// The resolved payload, present when `status` is true.
    pub result: Option<T>,

    /// Human-readable rejection reason, present when `status` is false.
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Interpret the envelope: a truthy `status` with a present `result`
    /// yields the payload, anything else is a business rejection carrying the
    /// service's message.
    pub fn into_result(self) -> Result<T> {
        match (self.status, self.result) {
            (true, Some(result)) => Ok(result),
            (_, _) => Err(SpotifyError::NoResult(
                self.message
                    .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_truthy_status_with_result_yields_payload() {
        let envelope: Envelope<Value> =
            serde_json::from_str(r#"{"status": true, "result": {"x": 1}}"#).unwrap();
        let payload = envelope.into_result().unwrap();
        assert_eq!(payload["x"], 1);
    }

    #[test]
    fn test_falsy_status_yields_rejection_with_message() {
        let envelope: Envelope<Value> =
            serde_json::from_str(r#"{"status": false, "message": "not found"}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert!(matches!(err, SpotifyError::NoResult(ref m) if m == "not found"));
    }

    #[test]
    fn test_truthy_status_without_result_is_still_a_rejection() {
        let envelope: Envelope<Value> = serde_json::from_str(r#"{"status": true}"#).unwrap();
        assert!(envelope.into_result().is_err());
    }

    #[test]
    fn test_missing_message_falls_back_to_default() {
        let envelope: Envelope<Value> = serde_json::from_str(r#"{"status": false}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert!(matches!(err, SpotifyError::NoResult(ref m) if m == DEFAULT_REJECTION_MESSAGE));
    }

    #[test]
    fn test_missing_status_defaults_to_falsy() {
        let envelope: Envelope<Value> = serde_json::from_str(r#"{"result": {"x": 1}}"#).unwrap();
        assert!(envelope.into_result().is_err());
    }
}
