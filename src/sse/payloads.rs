//! Stream payload deserialization structs
//!
//! Internal structs used to deserialize the JSON carried by `data:` records.
//! Unknown fields are ignored so newer backends stay compatible.

use serde::Deserialize;

/// Envelope shared by every record: only the discriminator is read here.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RecordEnvelope {
    /// Event discriminator; non-string values are treated as absent
    #[serde(rename = "type", default)]
    pub event_type: Option<serde_json::Value>,
}

impl RecordEnvelope {
    pub fn type_name(&self) -> Option<&str> {
        self.event_type.as_ref().and_then(|t| t.as_str())
    }
}

/// Payload for `thinking`, `final` and `error` records
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ContentPayload {
    #[serde(default)]
    pub content: serde_json::Value,
}

/// Payload for `thread_created` records
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ThreadCreatedPayload {
    #[serde(default)]
    pub thread_id: Option<serde_json::Value>,
}
