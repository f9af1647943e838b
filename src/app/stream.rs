//! Chat submission and the per-request read loop.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::api::ApiError;
use crate::error::StreamError;
use crate::sse::{SseParser, TransportReader};

use super::{App, AppMessage};

impl App {
    /// Submit the input line as a chat request.
    ///
    /// Refused (with a notice, input kept) while another request is in
    /// flight. Otherwise the user message is shown at once and a task is
    /// spawned to run the request; its results come back as [`AppMessage`]s.
    pub fn submit_input(&mut self) {
        let pending = match self.conversation.begin_send() {
            Ok(pending) => pending,
            Err(e) => {
                tracing::debug!(reason = %e, "Send refused");
                if self.conversation.is_pending() {
                    self.notice = Some(e.to_string());
                }
                return;
            }
        };

        self.notice = None;
        self.scroll_offset = 0;
        self.mark_dirty();

        // A completed request may still hold its body open
        if let Some(previous) = self.active_cancel.take() {
            previous.cancel();
        }
        let cancel = CancellationToken::new();
        self.active_cancel = Some(cancel.clone());

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        let request_id = pending.id;
        let body = pending.body;

        tokio::spawn(async move {
            let opened = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    let _ = message_tx.send(AppMessage::StreamCancelled { request_id });
                    return;
                }
                opened = client.chat(&body) => opened,
            };

            match opened {
                Ok(reader) => {
                    Self::process_stream(reader, &message_tx, request_id, &cancel).await;
                }
                Err(e) => {
                    let error = match e {
                        ApiError::Http(http) => StreamError::from(http),
                        ApiError::Encode(err) => StreamError::InvalidRequest {
                            message: err.to_string(),
                        },
                    };
                    let _ = message_tx.send(AppMessage::StreamFailed { request_id, error });
                }
            }
        });
    }

    /// Read the body to the end, forwarding every parsed event in order.
    ///
    /// Malformed records are logged and skipped. A trailing record that was
    /// never terminated is discarded when the body ends. Dropping `reader`
    /// on cancellation closes the connection.
    pub(crate) async fn process_stream(
        mut reader: TransportReader,
        message_tx: &mpsc::UnboundedSender<AppMessage>,
        request_id: u64,
        cancel: &CancellationToken,
    ) {
        let mut parser = SseParser::new();
        let mut started = false;

        loop {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::info!(request_id, "Chat stream cancelled");
                    let _ = message_tx.send(AppMessage::StreamCancelled { request_id });
                    return;
                }
                next = reader.next_text() => next,
            };

            match next {
                Some(Ok(text)) => {
                    if !started {
                        started = true;
                        let _ = message_tx.send(AppMessage::StreamStarted { request_id });
                    }

                    for result in parser.feed(&text) {
                        match result {
                            Ok(event) => {
                                tracing::debug!(
                                    request_id,
                                    event_type = event.event_type_name(),
                                    "Stream event"
                                );
                                let _ = message_tx.send(AppMessage::StreamEvent { request_id, event });
                            }
                            Err(e) => {
                                tracing::warn!(request_id, error = %e, "Skipping malformed stream record");
                            }
                        }
                    }
                }
                Some(Err(e)) => {
                    let error = StreamError::from(e);
                    tracing::error!(request_id, code = error.error_code(), error = %error, "Chat stream failed");
                    let _ = message_tx.send(AppMessage::StreamFailed { request_id, error });
                    return;
                }
                None => {
                    if let Some(tail) = parser.finish() {
                        tracing::debug!(request_id, bytes = tail.len(), "Discarding unterminated record at end of stream");
                    }
                    tracing::info!(request_id, chunks = reader.chunks_read(), "Chat stream finished");
                    let _ = message_tx.send(AppMessage::StreamFinished { request_id });
                    return;
                }
            }
        }
    }
}
