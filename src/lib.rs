//! kbchat - a terminal client for a streaming knowledge-base assistant
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod models;
pub mod sse;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
