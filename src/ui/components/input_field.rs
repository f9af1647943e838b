//! Input field component
//!
//! A single-line text input with a label, password masking, a placeholder
//! and an inline error line.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

const MASK_CHAR: char = '\u{2022}';
const CURSOR: char = '\u{2588}';

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label above the box; empty for none
    pub label: &'a str,
    pub value: &'a str,
    /// Focused fields are drawn bright with a block cursor
    pub focused: bool,
    pub is_password: bool,
    pub error: Option<&'a str>,
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Text shown inside the box, without the cursor
    fn display_value(&self) -> String {
        if self.is_password {
            MASK_CHAR.to_string().repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        }
    }
}

/// Rows needed: label, three for the box, one for the error
pub fn input_field_height(config: &InputFieldConfig) -> u16 {
    let label = u16::from(!config.label.is_empty());
    let error = u16::from(config.error.is_some());
    label + 3 + error
}

/// Render the field at the top of `area` and return the rows used.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let mut y = area.y;
    let bottom = area.y + area.height;

    if !config.label.is_empty() && y < bottom {
        let style = if config.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(config.label, style)),
            Rect::new(area.x, y, area.width, 1),
        );
        y += 1;
    }

    let box_height = 3.min(bottom.saturating_sub(y));
    let box_area = Rect::new(area.x, y, area.width, box_height);
    let border_color = if config.focused { Color::White } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let line = if config.value.is_empty() {
        let mut spans = Vec::new();
        if config.focused {
            spans.push(Span::styled(CURSOR.to_string(), Style::default().fg(Color::White)));
        }
        if let Some(placeholder) = config.placeholder {
            spans.push(Span::styled(placeholder, Style::default().fg(COLOR_DIM)));
        }
        Line::from(spans)
    } else {
        let text = config.display_value();
        // Keep the end of long input visible
        let inner_width = area.width.saturating_sub(3) as usize;
        let visible = tail_fitting(&text, inner_width);
        let style = if config.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let mut spans = vec![Span::styled(visible.to_string(), style)];
        if config.focused {
            spans.push(Span::styled(CURSOR.to_string(), style));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line).block(block), box_area);
    y += box_height;

    if let Some(error) = config.error {
        if y < bottom {
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                    Span::styled(error, Style::default().fg(COLOR_ERROR)),
                ])),
                Rect::new(area.x, y, area.width, 1),
            );
            y += 1;
        }
    }

    y - area.y
}

/// Longest suffix of `text` that is at most `width` columns wide
fn tail_fitting(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut start = text.len();
    let mut used = 0;
    for (index, c) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = index;
    }
    &text[start..]
}
