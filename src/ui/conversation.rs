//! Conversation lines for the chat screen.
//!
//! Everything is wrapped to the view width up front so the caller knows the
//! exact row count when scrolling to the newest message.

use chrono::Local;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::markdown::render_markdown;
use crate::models::{Message, MessageRole, ERROR_PREFIX};
use crate::state::{ConversationState, CONNECTION_ERROR_MESSAGE};

use super::helpers::spinner_frame;
use super::theme::{COLOR_ASSISTANT, COLOR_DIM, COLOR_ERROR, COLOR_THINKING, COLOR_USER};
use super::wrap::wrap_line_with_prefix;

const BODY_INDENT: &str = "  ";
const STEP_INDENT: &str = "    ";

/// All rows of the conversation at `width` columns, oldest first.
pub fn conversation_lines(
    conversation: &ConversationState,
    width: usize,
    tick_count: u64,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for message in conversation.messages() {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.extend(message_lines(message, width));
    }

    if conversation.show_thinking() {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.extend(thinking_lines(conversation.thinking_steps(), width, tick_count));
    }

    lines
}

fn message_lines(message: &Message, width: usize) -> Vec<Line<'static>> {
    let (label_color, body) = match message.role {
        MessageRole::User => (COLOR_USER, plain_lines(message.content.text(), Style::default())),
        MessageRole::Assistant if is_error(message) => (
            COLOR_ASSISTANT,
            plain_lines(message.content.text(), Style::default().fg(COLOR_ERROR)),
        ),
        MessageRole::Assistant if message.content.is_markdown() => {
            (COLOR_ASSISTANT, render_markdown(message.content.text()))
        }
        MessageRole::Assistant => (
            COLOR_ASSISTANT,
            plain_lines(message.content.text(), Style::default()),
        ),
    };

    let time = message.created_at.with_timezone(&Local).format("%H:%M");
    let mut lines = vec![Line::from(vec![
        Span::styled(
            message.role.label(),
            Style::default().fg(label_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", time), Style::default().fg(COLOR_DIM)),
    ])];

    for line in &body {
        lines.extend(wrap_line_with_prefix(line, BODY_INDENT, Style::default(), width));
    }
    lines
}

fn thinking_lines(steps: &[String], width: usize, tick_count: u64) -> Vec<Line<'static>> {
    let style = Style::default().fg(COLOR_THINKING);
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} ", spinner_frame(tick_count)), style),
        Span::styled("Thinking...", style.add_modifier(Modifier::BOLD)),
    ])];

    for step in steps {
        let line = Line::from(vec![
            Span::styled("• ", style),
            Span::styled(step.clone(), Style::default().fg(COLOR_DIM)),
        ]);
        lines.extend(wrap_line_with_prefix(&line, STEP_INDENT, Style::default(), width));
    }
    lines
}

/// Backend `error` records and the transport failure message
fn is_error(message: &Message) -> bool {
    let text = message.content.text();
    text.starts_with(ERROR_PREFIX) || text == CONNECTION_ERROR_MESSAGE
}

fn plain_lines(text: &str, style: Style) -> Vec<Line<'static>> {
    text.split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sse::{FinalContent, StreamEvent};
    use crate::state::ConversationState;
    use ratatui::style::Color;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn sent(question: &str) -> ConversationState {
        let mut state = ConversationState::new();
        state.input = question.to_string();
        state.begin_send().unwrap();
        state
    }

    #[test]
    fn test_empty_conversation_has_no_lines() {
        assert!(conversation_lines(&ConversationState::new(), 80, 0).is_empty());
    }

    #[test]
    fn test_thinking_bubble_lists_steps_while_pending() {
        let mut state = sent("What is chapter 2 about?");
        state.apply(StreamEvent::Thinking {
            content: "Searching chapter 2".to_string(),
        });

        let rendered = text_of(&conversation_lines(&state, 80, 0));
        assert!(rendered[0].starts_with("You"));
        assert_eq!(rendered[1], "  What is chapter 2 about?");
        assert!(rendered.iter().any(|l| l.ends_with("Thinking...")));
        assert!(rendered.contains(&"    • Searching chapter 2".to_string()));
    }

    #[test]
    fn test_thinking_bubble_gone_after_final() {
        let mut state = sent("q");
        state.apply(StreamEvent::Thinking {
            content: "step".to_string(),
        });
        state.apply(StreamEvent::Final {
            content: FinalContent::Markdown("**Answer**".to_string()),
        });

        let lines = conversation_lines(&state, 80, 0);
        let rendered = text_of(&lines);
        assert!(!rendered.iter().any(|l| l.contains("Thinking...")));
        assert!(rendered.contains(&"  Answer".to_string()));

        let answer = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.content == "Answer")
            .unwrap();
        assert!(answer.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_error_record_rendered_red() {
        let mut state = sent("q");
        state.apply(StreamEvent::Error {
            content: "index unavailable".to_string(),
        });

        let lines = conversation_lines(&state, 80, 0);
        let error = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.content.contains("index unavailable"))
            .unwrap();
        assert_eq!(error.content, "[ERROR]: index unavailable");
        assert_eq!(error.style.fg, Some(Color::Red));
    }

    #[test]
    fn test_plain_final_keeps_markdown_syntax() {
        let mut state = sent("q");
        state.apply(StreamEvent::Final {
            content: FinalContent::PlainText("**not bold**".to_string()),
        });
        let rendered = text_of(&conversation_lines(&state, 80, 0));
        assert!(rendered.contains(&"  **not bold**".to_string()));
    }

    #[test]
    fn test_long_user_message_wraps() {
        let state = sent("one two three four five six");
        let rendered = text_of(&conversation_lines(&state, 12, 0));
        assert_eq!(
            &rendered[1..],
            ["  one two", "  three four", "  five six"]
        );
    }
}
