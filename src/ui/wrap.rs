//! Pre-wrapping of styled lines.
//!
//! The conversation view needs to know its height in rows to keep the newest
//! message in view, so lines are wrapped here instead of by `Paragraph`.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `line` to `max_width` columns, putting `prefix` in front of every row.
///
/// Breaks at spaces where possible and inside words that are wider than a
/// whole row. Span styles are kept.
pub fn wrap_line_with_prefix(
    line: &Line<'static>,
    prefix: &'static str,
    prefix_style: Style,
    max_width: usize,
) -> Vec<Line<'static>> {
    let content_width = max_width.saturating_sub(prefix.width()).max(1);
    let mut rows = RowBuilder::new(prefix, prefix_style, content_width);

    for span in &line.spans {
        for word in split_keep_spaces(&span.content) {
            rows.push_word(word, span.style);
        }
    }

    rows.finish()
}

struct RowBuilder {
    prefix: &'static str,
    prefix_style: Style,
    width: usize,
    rows: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    used: usize,
}

impl RowBuilder {
    fn new(prefix: &'static str, prefix_style: Style, width: usize) -> Self {
        Self {
            prefix,
            prefix_style,
            width,
            rows: Vec::new(),
            current: Vec::new(),
            used: 0,
        }
    }

    fn break_row(&mut self) {
        if let Some(last) = self.current.last_mut() {
            let trimmed = last.content.trim_end_matches(' ').to_string();
            last.content = trimmed.into();
        }
        self.current.retain(|span| !span.content.is_empty());

        let mut spans = Vec::with_capacity(self.current.len() + 1);
        spans.push(Span::styled(self.prefix, self.prefix_style));
        spans.append(&mut self.current);
        self.rows.push(Line::from(spans));
        self.used = 0;
    }

    fn append(&mut self, text: &str, style: Style) {
        self.used += text.width();
        // Merge with the previous span when the style matches
        if let Some(last) = self.current.last_mut() {
            if last.style == style {
                last.content.to_mut().push_str(text);
                return;
            }
        }
        self.current.push(Span::styled(text.to_string(), style));
    }

    fn push_word(&mut self, word: &str, style: Style) {
        let width = word.width();
        let is_space = word.starts_with(' ');

        if self.used + width <= self.width {
            self.append(word, style);
            return;
        }

        if is_space {
            // Spaces at a break are dropped
            if self.used > 0 {
                self.break_row();
            }
            return;
        }

        if width <= self.width {
            self.break_row();
            self.append(word, style);
            return;
        }

        // Hard-break a word wider than a row
        let mut chunk = String::new();
        for c in word.chars() {
            let cw = c.width().unwrap_or(0);
            if self.used + chunk.width() + cw > self.width && (self.used > 0 || !chunk.is_empty()) {
                let piece = std::mem::take(&mut chunk);
                if !piece.is_empty() {
                    self.append(&piece, style);
                }
                self.break_row();
            }
            chunk.push(c);
        }
        if !chunk.is_empty() {
            self.append(&chunk, style);
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        if !self.current.is_empty() || self.rows.is_empty() {
            self.break_row();
        }
        self.rows
    }
}

/// Split into runs of spaces and runs of non-spaces
fn split_keep_spaces(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (index, c) in text.char_indices() {
        let space = c == ' ';
        if in_space.is_some_and(|s| s != space) {
            parts.push(&text[start..index]);
            start = index;
        }
        in_space = Some(space);
    }
    if start < text.len() {
        parts.push(&text[start..]);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn rows(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_short_line_unchanged() {
        let wrapped = wrap_line_with_prefix(&Line::from("hello"), "  ", Style::default(), 20);
        assert_eq!(rows(&wrapped), vec!["  hello"]);
    }

    #[test]
    fn test_empty_line_keeps_prefix() {
        let wrapped = wrap_line_with_prefix(&Line::default(), "| ", Style::default(), 20);
        assert_eq!(rows(&wrapped), vec!["| "]);
    }

    #[test]
    fn test_wraps_at_spaces() {
        let wrapped =
            wrap_line_with_prefix(&Line::from("the quick brown fox"), "> ", Style::default(), 12);
        assert_eq!(rows(&wrapped), vec!["> the quick", "> brown fox"]);
    }

    #[test]
    fn test_long_word_is_broken() {
        let wrapped = wrap_line_with_prefix(&Line::from("abcdefghij"), "", Style::default(), 4);
        assert_eq!(rows(&wrapped), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wide_chars_counted_by_width() {
        let wrapped = wrap_line_with_prefix(&Line::from("日本語です"), "", Style::default(), 4);
        assert_eq!(rows(&wrapped), vec!["日本", "語で", "す"]);
    }

    #[test]
    fn test_styles_survive_wrapping() {
        let red = Style::default().fg(Color::Red);
        let line = Line::from(vec![Span::raw("plain "), Span::styled("colored", red)]);
        let wrapped = wrap_line_with_prefix(&line, "", Style::default(), 8);
        assert_eq!(rows(&wrapped), vec!["plain", "colored"]);
        assert_eq!(wrapped[1].spans[1].style, red);
    }

    #[test]
    fn test_split_keep_spaces() {
        assert_eq!(split_keep_spaces("a  bc d"), vec!["a", "  ", "bc", " ", "d"]);
        assert!(split_keep_spaces("").is_empty());
    }
}
