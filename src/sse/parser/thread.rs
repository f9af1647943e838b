//! Thread-related event parsers

use crate::sse::events::{StreamEvent, SseParseError};
use crate::sse::payloads::ThreadCreatedPayload;

use super::invalid_json;

/// Parse a `thread_created` record.
///
/// The thread id must be a string; anything else is rejected so a bogus id
/// never replaces a good one.
pub(super) fn parse_thread_created_event(
    value: serde_json::Value,
) -> Result<StreamEvent, SseParseError> {
    let raw = value.to_string();
    let payload: ThreadCreatedPayload =
        serde_json::from_value(value).map_err(|e| invalid_json(&raw, &e))?;

    match payload.thread_id {
        Some(serde_json::Value::String(thread_id)) => Ok(StreamEvent::ThreadCreated { thread_id }),
        _ => Err(SseParseError::MissingField {
            event_type: "thread_created".to_string(),
            field: "thread_id",
        }),
    }
}
