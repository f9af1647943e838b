//! Box-drawn tables.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::styles::{STYLE_TABLE_BORDER, STYLE_TABLE_HEADER};

const MIN_COLUMN_WIDTH: usize = 3;

/// Render collected rows; the first row is the header.
pub(super) fn render_table(rows: &[Vec<String>], lines: &mut Vec<Line<'static>>) {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return;
    }

    let mut widths = vec![MIN_COLUMN_WIDTH; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.trim().width());
        }
    }

    lines.push(border(&widths, '┌', '┬', '┐'));
    for (index, row) in rows.iter().enumerate() {
        let style = if index == 0 {
            STYLE_TABLE_HEADER
        } else {
            Style::default()
        };

        let mut spans = vec![Span::styled("│", STYLE_TABLE_BORDER)];
        for (col, width) in widths.iter().enumerate() {
            let content = row.get(col).map(|c| c.trim()).unwrap_or("");
            let padding = width.saturating_sub(content.width());
            spans.push(Span::styled(
                format!(" {}{} ", content, " ".repeat(padding)),
                style,
            ));
            spans.push(Span::styled("│", STYLE_TABLE_BORDER));
        }
        lines.push(Line::from(spans));

        if index == 0 && rows.len() > 1 {
            lines.push(border(&widths, '├', '┼', '┤'));
        }
    }
    lines.push(border(&widths, '└', '┴', '┘'));
}

fn border(widths: &[usize], left: char, middle: char, right: char) -> Line<'static> {
    let inner: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    let text = format!("{}{}{}", left, inner.join(&middle.to_string()), right);
    Line::from(Span::styled(text, STYLE_TABLE_BORDER))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_columns_are_aligned() {
        let rows = vec![
            vec!["Chapter".to_string(), "Pages".to_string()],
            vec!["Intro".to_string(), "12".to_string()],
        ];
        let mut lines = Vec::new();
        render_table(&rows, &mut lines);

        // top, header, separator, row, bottom
        assert_eq!(lines.len(), 5);
        let widths: Vec<usize> = lines.iter().map(|l| text(l).width()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(text(&lines[1]).contains("Chapter"));
    }

    #[test]
    fn test_short_row_is_padded() {
        let rows = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["only".to_string()],
        ];
        let mut lines = Vec::new();
        render_table(&rows, &mut lines);
        assert_eq!(text(&lines[1]).width(), text(&lines[3]).width());
    }

    #[test]
    fn test_empty_rows_render_nothing() {
        let mut lines = Vec::new();
        render_table(&[], &mut lines);
        assert!(lines.is_empty());
    }
}
