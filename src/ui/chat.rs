//! Chat screen: header, conversation, status line and input.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;

use super::components::{render_input_field, InputFieldConfig};
use super::conversation::conversation_lines;
use super::helpers::spinner_frame;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_WARNING};

pub const INPUT_PLACEHOLDER: &str = "Ask a question about the book...";

const TITLE: &str = "Knowledge Base Assistant";

const HINTS: [(&str, &str); 4] = [
    ("^O", "Instructions"),
    ("^N", "New Chat"),
    ("Esc", "Cancel"),
    ("^C", "Quit"),
];

pub fn render_chat_screen(frame: &mut Frame, app: &mut App) {
    let [header, body, status, input] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    render_header(frame, header);
    render_conversation(frame, body, app);
    render_status(frame, status, app);

    let config = InputFieldConfig::new("", &app.conversation.input)
        .focused(true)
        .placeholder(INPUT_PLACEHOLDER);
    render_input_field(frame, input, &config);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let mut hints = Vec::new();
    for (key, label) in HINTS {
        hints.push(Span::styled(key, Style::default().fg(COLOR_HEADER)));
        hints.push(Span::styled(format!(" {}  ", label), Style::default().fg(COLOR_DIM)));
    }
    let hints = Line::from(hints);
    let hints_width = hints.width() as u16;

    let [title_area, hints_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", TITLE),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        title_area,
    );
    frame.render_widget(Paragraph::new(hints), hints_area);
}

fn render_conversation(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = conversation_lines(&app.conversation, inner.width as usize, app.tick_count);
    if lines.is_empty() {
        let hint = Paragraph::new(Span::styled(
            "Ask anything about the book to get started.",
            Style::default().fg(COLOR_DIM),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, inner);
        return;
    }

    // scroll_offset counts rows up from the bottom
    let max_top = lines.len().saturating_sub(inner.height as usize);
    app.scroll_offset = app.scroll_offset.min(max_top);
    let top = max_top - app.scroll_offset;

    let top = u16::try_from(top).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((top, 0)), inner);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(notice) = &app.notice {
        Line::from(Span::styled(
            format!(" {}", notice),
            Style::default().fg(COLOR_WARNING),
        ))
    } else if app.conversation.is_pending() {
        Line::from(Span::styled(
            format!(" {} Waiting for the answer (Esc to cancel)", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_DIM),
        ))
    } else if app.scroll_offset > 0 {
        Line::from(Span::styled(
            format!(" ↑ {} lines above the latest message", app.scroll_offset),
            Style::default().fg(COLOR_DIM),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}
