//! Stream event types and definitions
//!
//! Contains the StreamEvent enum with every event the assistant backend
//! emits on the `/chat` stream, plus the parse error type.

use thiserror::Error;

/// Body of a `final` event, resolved once when the event is parsed.
///
/// The backend sends either a bare string or an object of the form
/// `{"format": "markdown", "text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalContent {
    /// Text to display verbatim
    PlainText(String),
    /// Text to render as markdown
    Markdown(String),
}

impl FinalContent {
    /// Resolve the dynamic `content` field of a `final` payload.
    ///
    /// - a JSON string is plain text
    /// - an object with `format == "markdown"` and a string `text` is markdown
    /// - any other object with a string `text` is plain text
    /// - anything else is shown as its JSON rendering
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => FinalContent::PlainText(s.clone()),
            serde_json::Value::Object(map) => {
                let text = map.get("text").and_then(|t| t.as_str());
                let format = map.get("format").and_then(|f| f.as_str());
                match (format, text) {
                    (Some("markdown"), Some(text)) => FinalContent::Markdown(text.to_string()),
                    (_, Some(text)) => FinalContent::PlainText(text.to_string()),
                    _ => FinalContent::PlainText(value.to_string()),
                }
            }
            other => FinalContent::PlainText(value_to_text(other)),
        }
    }

    /// The raw text regardless of format.
    pub fn text(&self) -> &str {
        match self {
            FinalContent::PlainText(text) | FinalContent::Markdown(text) => text,
        }
    }

    /// Whether this content should go through the markdown renderer.
    pub fn is_markdown(&self) -> bool {
        matches!(self, FinalContent::Markdown(_))
    }
}

/// Typed events from the assistant `/chat` stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// Intermediate progress step while the assistant works
    Thinking { content: String },
    /// Backend conversation thread created or re-bound
    ThreadCreated { thread_id: String },
    /// The assistant's answer
    Final { content: FinalContent },
    /// Backend-reported failure for this request
    Error { content: String },
}

impl StreamEvent {
    /// Returns the wire name of the event type.
    pub fn event_type_name(&self) -> &'static str {
        match self {
            StreamEvent::Thinking { .. } => "thinking",
            StreamEvent::ThreadCreated { .. } => "thread_created",
            StreamEvent::Final { .. } => "final",
            StreamEvent::Error { .. } => "error",
        }
    }
}

/// Errors that can occur while parsing a single record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SseParseError {
    /// Record payload is not valid JSON
    #[error("Invalid JSON in stream record: {reason} (payload: {payload})")]
    InvalidJson { payload: String, reason: String },
    /// A field required by the event type is missing or has the wrong type
    #[error("Missing field '{field}' for event type: {event_type}")]
    MissingField {
        event_type: String,
        field: &'static str,
    },
}

/// Render a loosely-typed JSON field as display text.
///
/// Strings are taken verbatim, `null` becomes empty, everything else is
/// rendered as JSON.
pub(crate) fn value_to_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
