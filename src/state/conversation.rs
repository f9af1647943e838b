//! Conversation state and the per-request state machine
//!
//! `ConversationState` is the single owner of everything the chat screen
//! shows. It is mutated only from the UI loop: by local input, and by the
//! stream events forwarded from the request task.

use thiserror::Error;

use crate::models::{ChatRequest, Message, MessageContent};
use crate::sse::StreamEvent;

/// Synthetic assistant message for a request that never got through
pub const CONNECTION_ERROR_MESSAGE: &str =
    "A connection error occurred. Is the backend server running?";

/// Lifecycle of one chat request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    /// Nothing sent yet (or after a reset)
    #[default]
    Idle,
    /// Submitted, no bytes received yet
    Sending,
    /// At least one chunk received
    Streaming,
    /// `final` received or the stream ended normally
    Completed,
    /// Transport failure or `error` record
    Failed,
    /// Aborted by the user
    Cancelled,
}

impl RequestPhase {
    /// Whether a request is in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestPhase::Sending | RequestPhase::Streaming)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequestPhase::Completed | RequestPhase::Failed | RequestPhase::Cancelled
        )
    }
}

/// Why a send was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("Nothing to send")]
    EmptyInput,
    #[error("Wait for the current answer or press Esc to cancel it")]
    Busy,
}

/// A request accepted by [`ConversationState::begin_send`]
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    /// Identifies the request in messages coming back from its task
    pub id: u64,
    pub body: ChatRequest,
}

/// The conversation shown on the chat screen
#[derive(Debug, Default)]
pub struct ConversationState {
    messages: Vec<Message>,
    thinking_steps: Vec<String>,
    thread_id: Option<String>,
    /// Text in the input line
    pub input: String,
    phase: RequestPhase,
    /// Id of the request the state currently belongs to
    current_request: u64,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn thinking_steps(&self) -> &[String] {
        &self.thinking_steps
    }

    pub fn thread_id(&self) -> Option<&str> {
        self.thread_id.as_deref()
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase.is_pending()
    }

    /// Whether the "thinking" bubble should be visible
    pub fn show_thinking(&self) -> bool {
        self.is_pending()
    }

    pub fn current_request(&self) -> u64 {
        self.current_request
    }

    /// Whether a message tagged with `request_id` may still change this state.
    ///
    /// False for earlier requests, and for the current one once cancelled.
    pub fn is_current(&self, request_id: u64) -> bool {
        request_id == self.current_request
            && !matches!(self.phase, RequestPhase::Idle | RequestPhase::Cancelled)
    }

    /// Submit the input line.
    ///
    /// Pushes the user message, clears the input and the thinking steps, and
    /// moves to `Sending`. The input is left untouched when refused.
    pub fn begin_send(&mut self) -> Result<PendingRequest, SendError> {
        if self.is_pending() {
            return Err(SendError::Busy);
        }
        if self.input.trim().is_empty() {
            return Err(SendError::EmptyInput);
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(Message::user(text.clone()));
        self.thinking_steps.clear();
        self.phase = RequestPhase::Sending;
        self.current_request += 1;

        Ok(PendingRequest {
            id: self.current_request,
            body: ChatRequest::new(text, self.thread_id.clone()),
        })
    }

    /// First chunk arrived
    pub fn mark_streaming(&mut self) {
        if self.phase == RequestPhase::Sending {
            self.phase = RequestPhase::Streaming;
        }
    }

    /// Apply one parsed stream event.
    pub fn apply(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::Thinking { content } => {
                self.thinking_steps.push(content);
            }
            StreamEvent::ThreadCreated { thread_id } => {
                if self.thread_id.as_deref() != Some(thread_id.as_str()) {
                    tracing::info!(thread_id = %thread_id, "Conversation bound to thread");
                }
                self.thread_id = Some(thread_id);
            }
            StreamEvent::Final { content } => {
                self.messages.push(Message::assistant(content));
                self.settle(RequestPhase::Completed);
            }
            StreamEvent::Error { content } => {
                self.messages.push(Message::assistant_error(&content));
                self.settle(RequestPhase::Failed);
            }
        }
    }

    /// The body ended without a transport error
    pub fn finish_stream(&mut self) {
        self.settle(RequestPhase::Completed);
    }

    /// The request failed at the transport level.
    ///
    /// Adds the connection error message unless the request already ended.
    pub fn fail_transport(&mut self) {
        if self.is_pending() {
            self.messages.push(Message::assistant(MessageContent::PlainText(
                CONNECTION_ERROR_MESSAGE.to_string(),
            )));
            self.phase = RequestPhase::Failed;
        }
    }

    /// Mark the in-flight request cancelled. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        if self.is_pending() {
            self.phase = RequestPhase::Cancelled;
            true
        } else {
            false
        }
    }

    /// Start over: empty conversation, no thread, empty input.
    ///
    /// Messages from any earlier request become stale.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.thinking_steps.clear();
        self.thread_id = None;
        self.input.clear();
        self.phase = RequestPhase::Idle;
        self.current_request += 1;
    }

    // Terminal phases are never downgraded
    fn settle(&mut self, phase: RequestPhase) {
        if !self.phase.is_terminal() {
            self.phase = phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageRole;
    use crate::sse::FinalContent;

    fn sent(state: &mut ConversationState, text: &str) -> PendingRequest {
        state.input = text.to_string();
        state.begin_send().unwrap()
    }

    fn thinking(s: &str) -> StreamEvent {
        StreamEvent::Thinking {
            content: s.to_string(),
        }
    }

    fn final_text(s: &str) -> StreamEvent {
        StreamEvent::Final {
            content: FinalContent::PlainText(s.to_string()),
        }
    }

    #[test]
    fn test_begin_send_transitions_and_clears() {
        let mut state = ConversationState::new();
        let request = sent(&mut state, "What is RAG?");

        assert_eq!(request.body.message, "What is RAG?");
        assert_eq!(request.body.thread_id, None);
        assert_eq!(state.phase(), RequestPhase::Sending);
        assert!(state.input.is_empty());
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].role, MessageRole::User);
        assert!(state.show_thinking());
    }

    #[test]
    fn test_begin_send_rejects_empty_input() {
        let mut state = ConversationState::new();
        state.input = "   ".to_string();
        assert_eq!(state.begin_send(), Err(SendError::EmptyInput));
        assert_eq!(state.phase(), RequestPhase::Idle);
        assert!(state.messages().is_empty());
    }

    #[test]
    fn test_concurrent_send_rejected_and_input_kept() {
        let mut state = ConversationState::new();
        sent(&mut state, "first");
        state.input = "second".to_string();

        assert_eq!(state.begin_send(), Err(SendError::Busy));
        assert_eq!(state.input, "second");
        assert_eq!(state.messages().len(), 1);
    }

    #[test]
    fn test_full_request_lifecycle() {
        let mut state = ConversationState::new();
        sent(&mut state, "q");
        state.mark_streaming();
        assert_eq!(state.phase(), RequestPhase::Streaming);

        state.apply(StreamEvent::ThreadCreated {
            thread_id: "thread_1".to_string(),
        });
        state.apply(thinking("step1"));
        state.apply(thinking("step2"));
        assert_eq!(state.thinking_steps(), ["step1", "step2"]);

        state.apply(final_text("Answer"));
        assert_eq!(state.phase(), RequestPhase::Completed);
        assert!(!state.show_thinking());
        assert_eq!(state.thread_id(), Some("thread_1"));
        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.messages()[1].role, MessageRole::Assistant);
    }

    #[test]
    fn test_thinking_steps_cleared_on_next_send() {
        let mut state = ConversationState::new();
        sent(&mut state, "one");
        state.apply(thinking("old step"));
        state.apply(final_text("done"));

        let request = sent(&mut state, "two");
        assert!(state.thinking_steps().is_empty());
        assert_eq!(request.id, state.current_request());
    }

    #[test]
    fn test_thread_id_carried_into_next_request() {
        let mut state = ConversationState::new();
        sent(&mut state, "one");
        state.apply(StreamEvent::ThreadCreated {
            thread_id: "thread_abc".to_string(),
        });
        state.finish_stream();

        let request = sent(&mut state, "two");
        assert_eq!(request.body.thread_id.as_deref(), Some("thread_abc"));
    }

    #[test]
    fn test_duplicate_final_appends_again() {
        let mut state = ConversationState::new();
        sent(&mut state, "q");
        state.apply(final_text("a"));
        state.apply(final_text("a again"));
        assert_eq!(state.messages().len(), 3);
        assert_eq!(state.phase(), RequestPhase::Completed);
    }

    #[test]
    fn test_error_event_formats_and_fails() {
        let mut state = ConversationState::new();
        sent(&mut state, "q");
        state.apply(StreamEvent::Error {
            content: "Vector store offline".to_string(),
        });
        assert_eq!(state.phase(), RequestPhase::Failed);
        assert_eq!(
            state.messages()[1].content.text(),
            "[ERROR]: Vector store offline"
        );

        // Later records are still applied, but the phase stays Failed
        state.apply(final_text("late"));
        assert_eq!(state.messages().len(), 3);
        assert_eq!(state.phase(), RequestPhase::Failed);
    }

    #[test]
    fn test_natural_end_completes() {
        let mut state = ConversationState::new();
        sent(&mut state, "q");
        state.mark_streaming();
        state.finish_stream();
        assert_eq!(state.phase(), RequestPhase::Completed);
        assert_eq!(state.messages().len(), 1);
    }

    #[test]
    fn test_transport_failure_adds_single_message() {
        let mut state = ConversationState::new();
        sent(&mut state, "q");
        state.fail_transport();
        state.fail_transport();
        assert_eq!(state.phase(), RequestPhase::Failed);
        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.messages()[1].content.text(), CONNECTION_ERROR_MESSAGE);
        assert!(!state.show_thinking());
    }

    #[test]
    fn test_transport_failure_after_final_ignored() {
        let mut state = ConversationState::new();
        sent(&mut state, "q");
        state.apply(final_text("ok"));
        state.fail_transport();
        assert_eq!(state.phase(), RequestPhase::Completed);
        assert_eq!(state.messages().len(), 2);
    }

    #[test]
    fn test_cancel_only_when_pending() {
        let mut state = ConversationState::new();
        assert!(!state.cancel());
        sent(&mut state, "q");
        let id = state.current_request();
        assert!(state.cancel());
        assert_eq!(state.phase(), RequestPhase::Cancelled);
        assert!(!state.is_current(id));
        state.finish_stream();
        assert_eq!(state.phase(), RequestPhase::Cancelled);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = ConversationState::new();
        let request = sent(&mut state, "q");
        state.apply(StreamEvent::ThreadCreated {
            thread_id: "t".to_string(),
        });
        state.apply(thinking("s"));
        state.input = "draft".to_string();

        for _ in 0..2 {
            state.reset();
            assert!(state.messages().is_empty());
            assert!(state.thinking_steps().is_empty());
            assert_eq!(state.thread_id(), None);
            assert!(state.input.is_empty());
            assert_eq!(state.phase(), RequestPhase::Idle);
        }
        assert!(!state.is_current(request.id));
    }

    #[test]
    fn test_is_current_tracks_latest_request() {
        let mut state = ConversationState::new();
        let first = sent(&mut state, "one");
        state.finish_stream();
        let second = sent(&mut state, "two");
        assert!(!state.is_current(first.id));
        assert!(state.is_current(second.id));
    }
}
