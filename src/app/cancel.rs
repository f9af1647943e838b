//! Stream cancellation and "new chat" for the App.
//!
//! Cancelling fires the request's token; the request task notices it at its
//! next await point, drops the response body and reports `StreamCancelled`.

use super::App;

impl App {
    /// Cancel the chat request in flight, if any.
    ///
    /// Returns whether a pending request was cancelled.
    pub fn cancel_active_stream(&mut self) -> bool {
        if let Some(token) = self.active_cancel.take() {
            token.cancel();
        }

        if self.conversation.cancel() {
            tracing::info!(
                request_id = self.conversation.current_request(),
                "User cancelled chat request"
            );
            self.notice = Some("Request cancelled.".to_string());
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    /// Start a fresh conversation.
    ///
    /// Cancels the request in flight first so nothing it still sends can
    /// reach the new conversation.
    pub fn new_chat(&mut self) {
        self.cancel_active_stream();
        self.conversation.reset();
        self.notice = None;
        self.scroll_offset = 0;
        self.mark_dirty();
        tracing::info!("Started new chat");
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::mock::MockResponse;
    use crate::app::test_support::{app_with_mock, drain, step};
    use crate::app::AppMessage;
    use crate::state::RequestPhase;
    use bytes::Bytes;

    #[test]
    fn test_cancel_without_request_is_noop() {
        let (mut app, _) = app_with_mock();
        assert!(!app.cancel_active_stream());
        assert!(app.notice.is_none());
    }

    #[tokio::test]
    async fn test_cancel_hanging_stream() {
        let (mut app, mock) = app_with_mock();
        mock.set_default_response(MockResponse::StreamThenHang(vec![Bytes::from(
            "data: {\"type\":\"thinking\",\"content\":\"working\"}\n\n",
        )]));

        app.conversation.input = "long question".to_string();
        app.submit_input();

        // Started + thinking
        step(&mut app).await;
        step(&mut app).await;
        assert_eq!(app.conversation.thinking_steps(), ["working"]);

        assert!(app.cancel_active_stream());
        assert_eq!(app.conversation.phase(), RequestPhase::Cancelled);
        assert!(!app.conversation.show_thinking());
        assert!(app.active_cancel.is_none());

        let msg = step(&mut app).await;
        assert!(matches!(msg, AppMessage::StreamCancelled { .. }));
        assert_eq!(app.conversation.phase(), RequestPhase::Cancelled);
    }

    #[tokio::test]
    async fn test_new_chat_resets_and_drops_stale_messages() {
        let (mut app, mock) = app_with_mock();
        mock.set_default_response(MockResponse::StreamThenHang(vec![Bytes::from(
            "data: {\"type\":\"thread_created\",\"content\":\"\",\"thread_id\":\"t1\"}\n\n",
        )]));

        app.conversation.input = "hi".to_string();
        app.submit_input();
        step(&mut app).await;
        step(&mut app).await;
        assert_eq!(app.conversation.thread_id(), Some("t1"));

        app.conversation.input = "draft".to_string();
        app.new_chat();
        app.new_chat();

        assert!(app.conversation.messages().is_empty());
        assert!(app.conversation.thinking_steps().is_empty());
        assert_eq!(app.conversation.thread_id(), None);
        assert!(app.conversation.input.is_empty());
        assert_eq!(app.conversation.phase(), RequestPhase::Idle);

        // The cancelled task's last message must not touch the new state
        step(&mut app).await;
        drain(&mut app);
        assert!(app.conversation.messages().is_empty());
    }
}
