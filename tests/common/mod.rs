//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::time::Duration;

use kbchat::app::{App, AppMessage};
use kbchat::config::ClientConfig;
use kbchat::sse::{SseParser, StreamEvent, Utf8StreamDecoder};
use wiremock::MockServer;

/// One complete stream record for `json`
pub fn record(json: &str) -> String {
    format!("data: {}\n\n", json)
}

/// A typical answer: thread binding, two thinking steps and a markdown final.
pub fn sample_stream() -> String {
    [
        record(r#"{"type":"thread_created","content":"","thread_id":"thread_abc"}"#),
        record(r#"{"type":"thinking","content":"Searching the índice"}"#),
        record(r#"{"type":"thinking","content":"Reading chapter 3 · 日本語 🎉"}"#),
        record(r#"{"type":"final","content":{"format":"markdown","text":"**Über** the answer"}}"#),
    ]
    .concat()
}

/// Decode and parse `chunks` as they would arrive from the network.
///
/// Malformed records are skipped and the unterminated tail is discarded.
pub fn parse_chunks<C: AsRef<[u8]>>(chunks: &[C]) -> Vec<StreamEvent> {
    let mut decoder = Utf8StreamDecoder::new();
    let mut parser = SseParser::new();
    let mut events = Vec::new();

    for chunk in chunks {
        let text = decoder.decode(chunk.as_ref());
        events.extend(parser.feed(&text).into_iter().filter_map(Result::ok));
    }
    let tail = decoder.finish();
    events.extend(parser.feed(&tail).into_iter().filter_map(Result::ok));
    parser.finish();
    events
}

/// App pointed at the mock server's `/api`
pub fn app_for(server: &MockServer) -> App {
    let config = ClientConfig::default().with_api_base(format!("{}/api", server.uri()));
    App::from_config(&config).expect("app")
}

/// Apply messages until `done` returns true for one of them.
pub async fn pump_until(app: &mut App, done: impl Fn(&AppMessage) -> bool) {
    let mut rx = app.message_rx.take().expect("receiver");
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for the app")
            .expect("channel closed");
        let finished = done(&msg);
        app.handle_message(msg);
        if finished {
            break;
        }
    }
    app.message_rx = Some(rx);
}

/// True for the message that ends a chat request
pub fn is_stream_end(msg: &AppMessage) -> bool {
    matches!(
        msg,
        AppMessage::StreamFinished { .. }
            | AppMessage::StreamFailed { .. }
            | AppMessage::StreamCancelled { .. }
    )
}
