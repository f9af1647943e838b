//! Markdown rendering for assistant answers.
//!
//! Converts markdown text to styled ratatui `Line`s. Handles headings,
//! emphasis, inline code, code blocks, lists, block quotes, links and tables.
//! Unterminated constructs (an open code fence, a dangling `**`) render as
//! far as they parse.

mod styles;
mod table;

pub use styles::{STYLE_CODE_BLOCK, STYLE_HEADING, STYLE_INLINE_CODE, STYLE_LINK};

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use styles::{STYLE_LINK_TARGET, STYLE_QUOTE};

/// Render markdown text to styled lines.
///
/// Blocks are separated by one blank line. Always returns at least one line.
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut renderer = Renderer::default();
    for event in Parser::new_ext(text, options) {
        renderer.handle(event);
    }
    renderer.finish()
}

/// `#` and `##` headings are underlined as well
fn is_major(level: HeadingLevel) -> bool {
    matches!(level, HeadingLevel::H1 | HeadingLevel::H2)
}

/// List nesting entry: `Some(n)` for an ordered list at item `n`
type ListKind = Option<u64>;

#[derive(Default)]
struct Renderer {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    styles: Vec<Style>,
    lists: Vec<ListKind>,
    quote_depth: usize,
    in_code_block: bool,
    link_target: Option<String>,
    table: Option<TableBuilder>,
}

#[derive(Default)]
struct TableBuilder {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
}

impl Renderer {
    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or_default()
    }

    fn push_style(&mut self, f: impl FnOnce(Style) -> Style) {
        let next = f(self.style());
        self.styles.push(next);
    }

    fn flush_line(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let mut spans = Vec::with_capacity(self.spans.len() + 1);
        if self.quote_depth > 0 {
            spans.push(Span::styled("│ ".repeat(self.quote_depth), STYLE_QUOTE));
        }
        spans.append(&mut self.spans);
        self.lines.push(Line::from(spans));
    }

    /// Start a new block, leaving one blank line after the previous one
    fn begin_block(&mut self) {
        self.flush_line();
        if self.lists.is_empty()
            && self
                .lines
                .last()
                .is_some_and(|line| line.width() > 0)
        {
            self.lines.push(Line::default());
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(table) = self.table.as_mut() {
            table.cell.push_str(text);
            return;
        }

        let style = self.style();
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                if self.in_code_block {
                    // Keep blank lines inside code blocks
                    let spans = std::mem::take(&mut self.spans);
                    self.lines.push(Line::from(spans));
                } else {
                    self.flush_line();
                }
            }
            if !part.is_empty() {
                self.spans.push(Span::styled(part.to_string(), style));
            }
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => match self.table.as_mut() {
                Some(table) => table.cell.push_str(&code),
                None => self
                    .spans
                    .push(Span::styled(code.to_string(), STYLE_INLINE_CODE)),
            },
            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => match self.table.as_mut() {
                Some(table) => table.cell.push(' '),
                None => self.flush_line(),
            },
            Event::Rule => {
                self.begin_block();
                self.lines
                    .push(Line::from(Span::styled("─".repeat(24), STYLE_LINK_TARGET)));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if self.spans.is_empty() {
                    self.begin_block();
                }
            }
            Tag::Heading { level, .. } => {
                self.begin_block();
                self.push_style(|_| STYLE_HEADING);
                if is_major(level) {
                    self.push_style(|s| s.add_modifier(Modifier::UNDERLINED));
                }
            }
            Tag::CodeBlock(_) => {
                self.begin_block();
                self.in_code_block = true;
                self.push_style(|_| STYLE_CODE_BLOCK);
            }
            Tag::BlockQuote(_) => {
                self.begin_block();
                self.quote_depth += 1;
                self.push_style(|_| STYLE_QUOTE);
            }
            Tag::List(first) => {
                if self.lists.is_empty() {
                    self.begin_block();
                } else {
                    self.flush_line();
                }
                self.lists.push(first);
            }
            Tag::Item => {
                self.flush_line();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                let style = self.style();
                self.spans
                    .push(Span::styled(format!("{}{}", "  ".repeat(depth), marker), style));
            }
            Tag::Emphasis => self.push_style(|s| s.add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(|s| s.add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => self.push_style(|s| s.add_modifier(Modifier::CROSSED_OUT)),
            Tag::Link { dest_url, .. } => {
                self.link_target = Some(dest_url.to_string());
                self.push_style(|s| s.patch(STYLE_LINK));
            }
            Tag::Table(_) => {
                self.begin_block();
                self.table = Some(TableBuilder::default());
            }
            Tag::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    table.cell.clear();
                }
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if self.lists.is_empty() {
                    self.flush_line();
                }
            }
            TagEnd::Heading(level) => {
                self.flush_line();
                self.styles.pop();
                if is_major(level) {
                    self.styles.pop();
                }
            }
            TagEnd::CodeBlock => {
                self.flush_line();
                self.in_code_block = false;
                self.styles.pop();
            }
            TagEnd::BlockQuote(_) => {
                self.flush_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.styles.pop();
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.lists.pop();
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                self.styles.pop();
            }
            TagEnd::Link => {
                self.styles.pop();
                if let Some(target) = self.link_target.take() {
                    let shown = self.spans.last().map(|s| s.content.as_ref()) == Some(target.as_str());
                    if !shown && self.table.is_none() {
                        self.spans
                            .push(Span::styled(format!(" ({})", target), STYLE_LINK_TARGET));
                    }
                }
            }
            TagEnd::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    let cell = std::mem::take(&mut table.cell);
                    table.row.push(cell);
                }
            }
            TagEnd::TableHead | TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    let row = std::mem::take(&mut table.row);
                    table.rows.push(row);
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    table::render_table(&table.rows, &mut self.lines);
                }
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        while self.lines.last().is_some_and(|line| line.width() == 0) && self.lines.len() > 1 {
            self.lines.pop();
        }
        if self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        self.lines
    }
}
