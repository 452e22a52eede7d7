//! Payload Extraction
//!
//! Pulls the first message out of a webhook envelope:
//!
//! ```text
//! { "entry": [ { "changes": [ { "value": {
//!     "metadata": { "phone_number_id": "..." },
//!     "messages": [ { "id", "from", "type", "text": { "body" } } ]
//! } } ] } ] }
//! ```
//!
//! Only the first element of each array is looked at. Status callbacks and
//! other events without `messages` are normal deliveries and yield `None`.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::types::{ExtractedMessage, InboundMessage};

/// Extract the first message and its routing phone-number id.
///
/// Returns `None` when any field on the path is missing, has the wrong type,
/// or an array is empty.
pub fn extract_message(envelope: &Value) -> Option<ExtractedMessage> {
    let value = envelope.pointer("/entry/0/changes/0/value")?;

    let first = value.get("messages")?.as_array()?.first()?;
    let message = match InboundMessage::deserialize(first) {
        Ok(message) => message,
        Err(e) => {
            debug!(error = %e, "Skipping malformed message object");
            return None;
        }
    };

    let phone_number_id = value
        .get("metadata")?
        .get("phone_number_id")?
        .as_str()?
        .to_string();

    Some(ExtractedMessage {
        phone_number_id,
        message,
    })
}
