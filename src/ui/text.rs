//! Text wrapping utilities for section rendering.
//!
//! Sections pre-wrap their copy to the content width so every visual row is
//! its own [`Line`]. That keeps row counts exact, which the reveal tracker
//! and scrolling depend on.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap of `text` into rows at most `width` columns wide.
///
/// Runs of whitespace collapse to one space. Words wider than `width` are
/// broken at character boundaries. Empty input yields no rows.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Break an overlong word into width-sized chunks.
        for c in word.chars() {
            let c_width = c.width().unwrap_or(1);
            if current_width + c_width > width && current_width > 0 {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += c_width;
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Wrap `text` and style every row, prefixing the first row with `first`
/// and continuation rows with spaces of the same width.
pub fn wrap_styled(text: &str, width: usize, style: Style, first: Span<'static>) -> Vec<Line<'static>> {
    let prefix_width = first.content.width();
    let indent = " ".repeat(prefix_width);
    let available = width.saturating_sub(prefix_width).max(1);

    wrap_text(text, available)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let prefix = if i == 0 {
                first.clone()
            } else {
                Span::styled(indent.clone(), first.style)
            };
            Line::from(vec![prefix, Span::styled(row, style)])
        })
        .collect()
}

/// Wrap `text` as plain styled rows.
pub fn paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect()
}

/// Display width of a line.
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|span| span.content.width()).sum()
}

/// Truncate `text` to `width` columns, ending with `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let c_width = c.width().unwrap_or(1);
        if used + c_width + 1 > width {
            break;
        }
        out.push(c);
        used += c_width;
    }
    out.push('…');
    out
}
