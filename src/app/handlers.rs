//! Message and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, AppMessage, Screen};

impl App {
    /// Handle an incoming async message.
    ///
    /// Stream messages for a request that is no longer current (cancelled or
    /// replaced by a new chat) are dropped.
    pub fn handle_message(&mut self, msg: AppMessage) {
        if let Some(request_id) = msg.request_id() {
            if !self.conversation.is_current(request_id) {
                tracing::debug!(request_id, "Dropping message from stale request");
                return;
            }
        }

        self.mark_dirty();
        match msg {
            AppMessage::StreamStarted { .. } => {
                self.conversation.mark_streaming();
            }
            AppMessage::StreamEvent { event, .. } => {
                self.conversation.apply(event);
                self.scroll_offset = 0;
            }
            AppMessage::StreamFinished { .. } => {
                self.conversation.finish_stream();
                self.active_cancel = None;
            }
            AppMessage::StreamFailed { error, .. } => {
                // A failure after the final answer only ends the task
                if self.conversation.is_pending() {
                    self.notice = Some(error.user_message());
                }
                self.conversation.fail_transport();
                self.active_cancel = None;
                self.scroll_offset = 0;
            }
            AppMessage::StreamCancelled { request_id } => {
                // Only reachable if the token fired without going through the UI
                tracing::debug!(request_id, "Request task stopped");
                self.conversation.cancel();
                self.active_cancel = None;
            }
            AppMessage::LoginFinished { attempt, result } => {
                self.finish_login(attempt, result);
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Instructions => self.handle_instructions_key(key),
            Screen::Login => self.handle_login_key(key),
            Screen::Chat => self.handle_chat_key(key),
        }
    }

    /// Insert bracketed-paste text into the focused field. Line breaks
    /// become spaces since both fields are single-line.
    pub fn handle_paste(&mut self, text: &str) {
        let text: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        match self.screen {
            Screen::Login if !self.login.verifying => self.login.password.push_str(text.trim()),
            Screen::Chat => self.conversation.input.push_str(&text),
            _ => return,
        }
        self.mark_dirty();
    }

    fn handle_instructions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.go_to_chat(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_login(),
            KeyCode::Esc => self.show_instructions(),
            KeyCode::Backspace if !self.login.verifying => {
                self.login.password.pop();
            }
            KeyCode::Char(c)
                if !self.login.verifying && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.login.password.push(c);
            }
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('n') if ctrl => self.new_chat(),
            KeyCode::Char('o') if ctrl => self.show_instructions(),
            KeyCode::Esc => {
                self.cancel_active_stream();
            }
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.conversation.input.pop();
            }
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::Char(c) if !ctrl => {
                self.conversation.input.push(c);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_with_mock;
    use crate::error::StreamError;
    use crate::sse::StreamEvent;
    use crate::state::RequestPhase;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        for screen in [Screen::Instructions, Screen::Login, Screen::Chat] {
            let (mut app, _) = app_with_mock();
            app.screen = screen;
            app.handle_key(ctrl('c'));
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_login_typing_and_backspace() {
        let (mut app, _) = app_with_mock();
        app.screen = Screen::Login;
        type_text(&mut app, "pass");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.login.password, "pas");
    }

    #[test]
    fn test_chat_typing_goes_to_input() {
        let (mut app, _) = app_with_mock();
        app.screen = Screen::Chat;
        type_text(&mut app, "hi there");
        assert_eq!(app.conversation.input, "hi there");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let (mut app, _) = app_with_mock();
        app.screen = Screen::Chat;
        app.handle_paste("first line\nsecond");
        assert_eq!(app.conversation.input, "first line second");

        app.screen = Screen::Instructions;
        app.handle_paste("ignored");
        assert_eq!(app.conversation.input, "first line second");
    }

    #[test]
    fn test_ctrl_o_opens_instructions() {
        let (mut app, _) = app_with_mock();
        app.screen = Screen::Chat;
        app.handle_key(ctrl('o'));
        assert_eq!(app.screen, Screen::Instructions);
    }

    #[test]
    fn test_q_on_instructions_quits() {
        let (mut app, _) = app_with_mock();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_stale_stream_event_dropped() {
        let (mut app, _) = app_with_mock();
        app.conversation.input = "q".to_string();
        let old = app.conversation.begin_send().unwrap();
        app.conversation.reset();

        app.handle_message(AppMessage::StreamEvent {
            request_id: old.id,
            event: StreamEvent::Thinking {
                content: "late".to_string(),
            },
        });
        assert!(app.conversation.thinking_steps().is_empty());
    }

    #[test]
    fn test_stream_failed_sets_notice() {
        let (mut app, _) = app_with_mock();
        app.conversation.input = "q".to_string();
        let pending = app.conversation.begin_send().unwrap();

        app.handle_message(AppMessage::StreamFailed {
            request_id: pending.id,
            error: StreamError::Unreachable {
                message: "refused".to_string(),
            },
        });
        assert_eq!(app.conversation.phase(), RequestPhase::Failed);
        assert_eq!(
            app.notice.as_deref(),
            Some("Could not reach the assistant backend. Is it running?")
        );
    }

    #[test]
    fn test_stream_event_resets_scroll() {
        let (mut app, _) = app_with_mock();
        app.conversation.input = "q".to_string();
        let pending = app.conversation.begin_send().unwrap();
        app.scroll_offset = 12;

        app.handle_message(AppMessage::StreamEvent {
            request_id: pending.id,
            event: StreamEvent::Thinking {
                content: "step".to_string(),
            },
        });
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_password_locked_while_verifying() {
        let (mut app, _) = app_with_mock();
        app.screen = Screen::Login;
        type_text(&mut app, "secret");
        app.login.verifying = true;

        type_text(&mut app, "xy");
        app.handle_key(key(KeyCode::Backspace));
        app.handle_paste("pasted");
        assert_eq!(app.login.password, "secret");
    }
}
