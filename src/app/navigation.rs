//! Navigation methods for the App.

use super::{App, Screen};

impl App {
    /// "Go to Chat": straight to the chat if the session is authenticated,
    /// otherwise to the login screen.
    pub fn go_to_chat(&mut self) {
        self.screen = if self.session.is_authenticated() {
            Screen::Chat
        } else {
            Screen::Login
        };
        self.mark_dirty();
    }

    /// Back to the instructions. The conversation is kept.
    pub fn show_instructions(&mut self) {
        if self.screen == Screen::Login {
            self.abandon_login();
        }
        self.screen = Screen::Instructions;
        self.mark_dirty();
    }

    /// Scroll the conversation towards older messages
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
        self.mark_dirty();
    }

    /// Scroll towards the newest message; 0 means follow new content
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        self.mark_dirty();
    }
}
