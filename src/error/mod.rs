//! Error types shared across the client.
//!
//! Library errors are plain enums (`thiserror` where a derive is enough);
//! the binary wraps everything in `color_eyre::Report`.
//!
//! | Type | Raised by |
//! |------|-----------|
//! | [`StreamError`] | `/chat` read loop |
//! | [`crate::api::ApiError`] | building or sending API calls |
//! | [`crate::api::LoginError`] | `/login` outcome |
//! | [`crate::sse::SseParseError`] | one malformed record |

mod stream;

pub use stream::StreamError;
