//! Streaming chat response parser
//!
//! The `/chat` endpoint answers with a chunked body of records:
//! - `data: <json>` - one record, the JSON carries a `type` discriminator
//! - a blank line (`\n\n`) ends the record
//! - anything not starting with `data:` is ignored
//!
//! # Module structure
//! - `decoder` - Incremental UTF-8 decoding (Utf8StreamDecoder)
//! - `reader` - Byte stream to text fragments (TransportReader)
//! - `events` - Event type definitions (StreamEvent, FinalContent, SseParseError)
//! - `payloads` - Internal payload deserialization structs
//! - `parser` - Record splitting and parsing (SseParser, parse_sse_record)

mod decoder;
mod events;
mod parser;
mod payloads;
mod reader;

// Re-export public types
pub use decoder::Utf8StreamDecoder;
pub use events::{FinalContent, SseParseError, StreamEvent};
pub use parser::{parse_sse_event, parse_sse_record, SseParser};
pub use reader::{ByteStream, TransportReader};
