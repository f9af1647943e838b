//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP POST, buffered and streaming

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
