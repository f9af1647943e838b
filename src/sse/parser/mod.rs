//! Stream record parsing logic
//!
//! Contains the stateful SseParser that accumulates decoded text, splits it
//! into `data:` records on blank-line boundaries, and emits typed events.

mod content;
mod thread;

use crate::sse::events::{SseParseError, StreamEvent};
use crate::sse::payloads::RecordEnvelope;

use content::{parse_error_event, parse_final_event, parse_thinking_event};
use thread::parse_thread_created_event;

/// Record separator on the wire
const RECORD_SEPARATOR: &str = "\n\n";
/// Required prefix of every record
const DATA_PREFIX: &str = "data:";

pub(crate) fn invalid_json(payload: &str, err: &serde_json::Error) -> SseParseError {
    SseParseError::InvalidJson {
        payload: payload.to_string(),
        reason: err.to_string(),
    }
}

/// Parse one complete record segment (the text between two separators).
///
/// Returns:
/// - `None` - the segment is not a data record, its payload is empty, or the
///   event type is absent or unknown
/// - `Some(Ok(event))` - a recognized event
/// - `Some(Err(error))` - the payload could not be decoded
pub fn parse_sse_record(segment: &str) -> Option<Result<StreamEvent, SseParseError>> {
    let payload = segment.strip_prefix(DATA_PREFIX)?.trim();
    if payload.is_empty() {
        return None;
    }

    let value: serde_json::Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(e) => return Some(Err(invalid_json(payload, &e))),
    };

    parse_sse_event(value)
}

/// Dispatch a decoded JSON payload on its `type` field.
///
/// Unknown or missing types are ignored rather than treated as errors.
pub fn parse_sse_event(value: serde_json::Value) -> Option<Result<StreamEvent, SseParseError>> {
    if !value.is_object() {
        return None;
    }
    let envelope: RecordEnvelope = serde_json::from_value(value.clone()).ok()?;

    match envelope.type_name()? {
        "thinking" => Some(parse_thinking_event(value)),
        "thread_created" => Some(parse_thread_created_event(value)),
        "final" => Some(parse_final_event(value)),
        "error" => Some(parse_error_event(value)),
        other => {
            tracing::debug!(event_type = other, "Ignoring unknown stream event type");
            None
        }
    }
}

/// Stateful parser that accumulates text and emits complete events
#[derive(Debug, Default)]
pub struct SseParser {
    /// Text received after the last complete separator
    buffer: String,
}

impl SseParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Append decoded text and return the events of every record it completes.
    ///
    /// The trailing segment after the last separator is retained until more
    /// text arrives. Results are returned in wire order; a failed record does
    /// not stop the records after it.
    pub fn feed(&mut self, text: &str) -> Vec<Result<StreamEvent, SseParseError>> {
        self.buffer.push_str(text);

        // Same left-to-right, non-overlapping scan as the split below, so a
        // run of three or more newlines cuts the same way in every chunking
        let Some((last_sep, _)) = self.buffer.match_indices(RECORD_SEPARATOR).last() else {
            return Vec::new();
        };

        let remainder = self.buffer.split_off(last_sep + RECORD_SEPARATOR.len());
        let complete = std::mem::replace(&mut self.buffer, remainder);

        complete
            .split(RECORD_SEPARATOR)
            .filter_map(parse_sse_record)
            .collect()
    }

    /// End of stream: discard any unterminated trailing record.
    ///
    /// Returns the discarded fragment, if any, so the caller can log it.
    pub fn finish(&mut self) -> Option<String> {
        let tail = std::mem::take(&mut self.buffer);
        if tail.trim().is_empty() {
            None
        } else {
            Some(tail)
        }
    }
}
