//! Webhook payload parsing.

use serde_json::{Map, Value};

use super::{EventType, WebhookEvent};
use crate::{Error, Result};

/// Decode a raw webhook payload.
///
/// The `event` field selects the payload type from the fixed table of
/// known events. A payload without a string `event` fails with
/// [`Error::MissingDiscriminator`]; an unknown discriminator fails with
/// [`Error::UnsupportedEvent`] instead of decoding into an empty struct.
///
/// # Example
///
/// ```
/// use tapd_rs::webhook::{parse_webhook_event, EventType, WebhookEvent};
///
/// let payload = br#"{"event":"bug::create","workspace_id":"111222333","id":"1"}"#;
/// let (event_type, event) = parse_webhook_event(payload)?;
///
/// assert_eq!(event_type, EventType::BugCreate);
/// match event {
///     WebhookEvent::BugCreate(bug) => assert_eq!(bug.meta.workspace_id, "111222333"),
///     other => panic!("unexpected event {:?}", other.event_type()),
/// }
/// # Ok::<(), tapd_rs::Error>(())
/// ```
pub fn parse_webhook_event(payload: &[u8]) -> Result<(EventType, WebhookEvent)> {
    let raw: Map<String, Value> = serde_json::from_slice(payload).map_err(Error::Decode)?;

    let event_type: EventType = raw
        .get("event")
        .and_then(Value::as_str)
        .ok_or(Error::MissingDiscriminator)?
        .parse()?;

    let event = WebhookEvent::decode(event_type, Value::Object(raw))?;
    Ok((event_type, event))
}
