//! Content-bearing event parsers (thinking, final, error)

use crate::sse::events::{value_to_text, FinalContent, StreamEvent, SseParseError};
use crate::sse::payloads::ContentPayload;

use super::invalid_json;

fn parse_content_payload(value: serde_json::Value) -> Result<ContentPayload, SseParseError> {
    let raw = value.to_string();
    serde_json::from_value(value).map_err(|e| invalid_json(&raw, &e))
}

/// Parse a `thinking` record
pub(super) fn parse_thinking_event(value: serde_json::Value) -> Result<StreamEvent, SseParseError> {
    let payload = parse_content_payload(value)?;
    Ok(StreamEvent::Thinking {
        content: value_to_text(&payload.content),
    })
}

/// Parse a `final` record, resolving the string-or-object content once
pub(super) fn parse_final_event(value: serde_json::Value) -> Result<StreamEvent, SseParseError> {
    let payload = parse_content_payload(value)?;
    Ok(StreamEvent::Final {
        content: FinalContent::from_value(&payload.content),
    })
}

/// Parse an `error` record
pub(super) fn parse_error_event(value: serde_json::Value) -> Result<StreamEvent, SseParseError> {
    let payload = parse_content_payload(value)?;
    Ok(StreamEvent::Error {
        content: value_to_text(&payload.content),
    })
}
