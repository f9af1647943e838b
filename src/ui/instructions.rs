//! Start screen: what the assistant is for and what not to type into it.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::centered_rect;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_WARNING};

const BOX_WIDTH: u16 = 76;
const BOX_HEIGHT: u16 = 24;

fn instruction_lines() -> Vec<Line<'static>> {
    let heading = Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let warning = Style::default().fg(COLOR_WARNING).add_modifier(Modifier::BOLD);

    vec![
        Line::from(Span::styled("Welcome to the Knowledge Base Assistant", heading)),
        Line::default(),
        Line::from(
            "Here you can interact with the entire knowledge base contained in the book, \
             including its flow charts, images and all text.",
        ),
        Line::default(),
        Line::from(Span::styled("Intended Use", heading)),
        Line::from(vec![
            Span::styled("1. Learning tool: ", bold),
            Span::raw("an alternate way of working through the text to learn its methodology."),
        ]),
        Line::from(vec![
            Span::styled("2. Prompt engineering: ", bold),
            Span::raw("build detailed, project-specific prompts to use elsewhere with your real project data."),
        ]),
        Line::default(),
        Line::from(Span::styled("! Important Security Notice", warning)),
        Line::from(vec![
            Span::raw("Do not put actual project data in this chat. "),
            Span::styled(
                "Anything you type here is sent to the assistant's language model provider.",
                bold,
            ),
        ]),
        Line::from(
            "This is a prompt builder and learning tool only. Take the prompts you develop, \
             together with your project data, to an approved environment to produce project outputs.",
        ),
    ]
}

pub fn render_instructions_screen(frame: &mut Frame) {
    let area = centered_rect(frame.area(), BOX_WIDTH, BOX_HEIGHT);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Instructions ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [text_area, hint_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner.inner(Margin::new(2, 1)));

    frame.render_widget(
        Paragraph::new(instruction_lines()).wrap(Wrap { trim: true }),
        text_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(COLOR_HEADER)),
            Span::styled(" Go to Chat   ", Style::default().fg(COLOR_DIM)),
            Span::styled("[q]", Style::default().fg(COLOR_HEADER)),
            Span::styled(" Quit", Style::default().fg(COLOR_DIM)),
        ]))
        .alignment(Alignment::Center),
        hint_area,
    );
}
