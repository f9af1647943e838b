//! Password gate in front of the chat.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;

use super::components::{input_field_height, render_input_field, InputFieldConfig};
use super::helpers::{centered_rect, spinner_frame};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

const DIALOG_WIDTH: u16 = 50;

pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let form = &app.login;
    let field = InputFieldConfig::new("Password", &form.password)
        .password(true)
        .focused(!form.verifying)
        .placeholder("Enter password...")
        .error(form.error.as_deref());

    // intro, blank, field, blank, status
    let content_height = 2 + input_field_height(&field) + 2;
    let area = centered_rect(frame.area(), DIALOG_WIDTH, content_height + 2);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Login ", Style::default().fg(COLOR_HEADER)));
    let inner = block.inner(area).inner(Margin::new(1, 0));
    frame.render_widget(block, area);

    let [intro, field_area, status] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(input_field_height(&field) + 1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new("Enter the access password to continue."),
        intro,
    );
    render_input_field(frame, field_area, &field);

    let status_line = if form.verifying {
        Line::from(Span::styled(
            format!("{} Verifying...", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_DIM),
        ))
    } else {
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(COLOR_HEADER)),
            Span::styled(" Log in   ", Style::default().fg(COLOR_DIM)),
            Span::styled("[Esc]", Style::default().fg(COLOR_HEADER)),
            Span::styled(" Back", Style::default().fg(COLOR_DIM)),
        ])
    };
    frame.render_widget(Paragraph::new(status_line).alignment(Alignment::Center), status);
}
