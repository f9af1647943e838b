//! Styles used by the markdown renderer

use ratatui::style::{Color, Modifier, Style};

/// Fenced and indented code blocks
pub const STYLE_CODE_BLOCK: Style = Style::new().fg(Color::DarkGray);

/// Inline `code`
pub const STYLE_INLINE_CODE: Style = Style::new().fg(Color::Cyan);

/// Headings of every level
pub const STYLE_HEADING: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Link text
pub const STYLE_LINK: Style = Style::new()
    .fg(Color::Blue)
    .add_modifier(Modifier::UNDERLINED);

/// Link target shown after the link text
pub const STYLE_LINK_TARGET: Style = Style::new().fg(Color::DarkGray);

/// Block quote text
pub const STYLE_QUOTE: Style = Style::new().fg(Color::Gray).add_modifier(Modifier::ITALIC);

/// Table borders
pub const STYLE_TABLE_BORDER: Style = Style::new().fg(Color::DarkGray);

/// Table header cells
pub const STYLE_TABLE_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
