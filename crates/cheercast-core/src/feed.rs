//! Broker feed payloads.
//!
//! The CheerLights bridge publishes one JSON object per tagged post:
//! `{"colour": int, "text": str, "name": str, "screen": str, "sent":
//! epoch-millis}`. The broker client itself is an external collaborator;
//! this module owns the payload shape so every adapter parses it the same
//! way. Parse failures are recoverable: adapters log and drop, the same
//! policy the multicast listener applies to malformed datagrams.

use serde::Deserialize;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::colour::Colour;

/// Unusable feed payload, logged and dropped by adapters.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("bad feed payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// One event from the bridge topic.
///
/// # Examples
/// ```
/// use cheercast_core::feed::FeedEvent;
///
/// let event = FeedEvent::parse(
///     r#"{"colour": 16711680, "text": "red skies", "name": "Jim",
///         "screen": "jim", "sent": 1500000000000}"#,
/// )?;
/// assert_eq!(event.colour.packed(), 0xFF0000);
/// assert_eq!(event.sent_rfc3339().unwrap(), "2017-07-14T02:40:00Z");
/// # Ok::<(), cheercast_core::feed::FeedError>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEvent {
    /// Resolved colour; range-checked during deserialization.
    pub colour: Colour,
    /// The post text the colour was found in.
    pub text: String,
    /// Display name of the author.
    pub name: String,
    /// Account handle of the author.
    pub screen: String,
    /// Publish time, milliseconds since the Unix epoch.
    pub sent: i64,
}

impl FeedEvent {
    /// Parses one payload, validating the colour range.
    pub fn parse(payload: &str) -> Result<Self, FeedError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Publish time formatted for logs, or `None` if out of range.
    pub fn sent_rfc3339(&self) -> Option<String> {
        let nanos = i128::from(self.sent) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .ok()
            .and_then(|stamp| stamp.format(&Rfc3339).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::{FeedError, FeedEvent};

    const PAYLOAD: &str = r#"{
        "colour": 32768,
        "text": "turn everything green",
        "name": "Jim",
        "screen": "jim",
        "sent": 1500000000000
    }"#;

    #[test]
    fn parse_valid_payload() {
        let event = FeedEvent::parse(PAYLOAD).unwrap();
        assert_eq!(event.colour.packed(), 0x008000);
        assert_eq!(event.screen, "jim");
        assert_eq!(event.sent_rfc3339().unwrap(), "2017-07-14T02:40:00Z");
    }

    #[test]
    fn parse_rejects_out_of_range_colour() {
        let payload = PAYLOAD.replace("32768", "16777216");
        let err = FeedEvent::parse(&payload).unwrap_err();
        assert!(matches!(err, FeedError::Json(_)));
        assert!(err.to_string().contains("colour out of range"));
    }

    #[test]
    fn parse_rejects_missing_fields() {
        assert!(FeedEvent::parse(r#"{"colour": 1}"#).is_err());
    }

    #[test]
    fn parse_rejects_non_json() {
        assert!(FeedEvent::parse("turn everything green").is_err());
    }
}
