//! UI rendering for kbchat.
//!
//! One render function per [`Screen`]:
//! - Instructions: welcome text, intended use and the security notice
//! - Login: masked password field with inline errors
//! - Chat: conversation, "Thinking..." bubble and the input line

mod chat;
mod components;
mod conversation;
mod helpers;
mod instructions;
mod login;
mod theme;
mod wrap;

pub use chat::INPUT_PLACEHOLDER;
pub use conversation::conversation_lines;
pub use helpers::SPINNER_FRAMES;
pub use wrap::wrap_line_with_prefix;

use ratatui::Frame;

use crate::app::{App, Screen};
use chat::render_chat_screen;
use instructions::render_instructions_screen;
use login::render_login_screen;

/// Render the UI for the current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::Instructions => render_instructions_screen(frame),
        Screen::Login => render_login_screen(frame, app),
        Screen::Chat => render_chat_screen(frame, app),
    }
}
