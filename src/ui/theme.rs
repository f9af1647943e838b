//! Color theme constants for the kbchat UI

use ratatui::style::Color;

/// Borders and separators
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Titles and the header bar
pub const COLOR_HEADER: Color = Color::White;

/// Key hints, placeholders and timestamps
pub const COLOR_DIM: Color = Color::DarkGray;

/// Label in front of the user's messages
pub const COLOR_USER: Color = Color::LightBlue;

/// Label in front of the assistant's messages
pub const COLOR_ASSISTANT: Color = Color::LightGreen;

/// The "Thinking..." bubble
pub const COLOR_THINKING: Color = Color::Magenta;

/// Errors in the conversation and on the login form
pub const COLOR_ERROR: Color = Color::Red;

/// Security notice on the instructions screen
pub const COLOR_WARNING: Color = Color::Yellow;

/// Background of input boxes
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);
