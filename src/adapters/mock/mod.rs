//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with canned responses and streams

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
