//! Stateless section renderers.
//!
//! Each section is a function from its slice of the bundle plus a
//! [`SectionContext`] to styled rows. Rows are already wrapped to the
//! content width, so the row count of the result is the section's height.

pub mod about;
pub mod certifications;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod footprint;
pub mod hero;
pub mod projects;
pub mod skills;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::text::{paragraph, wrap_styled};
use super::theme::Palette;
use crate::i18n::Lang;

/// Ambient inputs shared by all sections.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext {
    pub palette: Palette,
    /// Content column width in columns
    pub width: usize,
    pub lang: Lang,
    /// Calendar year for the footer
    pub year: i32,
}

impl SectionContext {
    pub fn new(palette: Palette, width: usize, lang: Lang, year: i32) -> Self {
        Self {
            palette,
            width: width.max(1),
            lang,
            year,
        }
    }
}

pub(crate) fn blank() -> Line<'static> {
    Line::default()
}

/// Horizontal rule separating sections.
pub(crate) fn rule(ctx: &SectionContext) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(ctx.width),
        Style::default().fg(ctx.palette.border),
    ))
}

/// Section heading: the title in bold, with a blank row after it.
pub(crate) fn title(text: &str, ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut lines = paragraph(text, ctx.width, ctx.palette.heading_style());
    lines.push(blank());
    lines
}

/// Card or sub-block heading.
pub(crate) fn subheading(text: &str, ctx: &SectionContext) -> Vec<Line<'static>> {
    paragraph(text, ctx.width, ctx.palette.heading_style())
}

/// Uppercase label above a paragraph.
pub(crate) fn label(text: &str, ctx: &SectionContext) -> Line<'static> {
    Line::from(Span::styled(
        text.to_uppercase(),
        Style::default()
            .fg(ctx.palette.heading)
            .add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn body(text: &str, ctx: &SectionContext) -> Vec<Line<'static>> {
    paragraph(text, ctx.width, ctx.palette.body_style())
}

pub(crate) fn muted(text: &str, ctx: &SectionContext) -> Vec<Line<'static>> {
    paragraph(text, ctx.width, ctx.palette.muted_style())
}

/// Bulleted item with hanging indent.
pub(crate) fn bullet(text: &str, ctx: &SectionContext) -> Vec<Line<'static>> {
    wrap_styled(
        text,
        ctx.width,
        ctx.palette.body_style(),
        Span::styled("• ", ctx.palette.muted_style()),
    )
}

/// `label → target` row for an external link.
pub(crate) fn link(label: &str, target: &str, ctx: &SectionContext) -> Vec<Line<'static>> {
    wrap_styled(
        target,
        ctx.width,
        ctx.palette.link_style(),
        Span::styled(format!("{label} → "), ctx.palette.muted_style()),
    )
}

/// Technology chips laid out in rows, wrapping between chips.
pub(crate) fn chips<'a>(items: impl IntoIterator<Item = &'a str>, ctx: &SectionContext) -> Vec<Line<'static>> {
    let style = Style::default().fg(ctx.palette.chip);
    let sep = Style::default().fg(ctx.palette.border);
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for item in items {
        let chip = format!("[{item}]");
        let chip_width = unicode_width::UnicodeWidthStr::width(chip.as_str());
        if used > 0 && used + 1 + chip_width > ctx.width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::styled(" ", sep));
            used += 1;
        }
        spans.push(Span::styled(chip, style));
        used += chip_width;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Split a comma-separated technology summary.
pub(crate) fn split_technologies(text: &str) -> Vec<&str> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Common section frame: rule, blank, title, content, trailing blank.
pub(crate) fn framed(title_text: &str, content: Vec<Line<'static>>, ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut lines = vec![rule(ctx), blank()];
    lines.extend(title(title_text, ctx));
    lines.extend(content);
    lines.push(blank());
    lines
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::i18n::{LocalizationTable, Translations};

    pub fn ctx(width: usize) -> SectionContext {
        SectionContext::new(Palette::LIGHT, width, Lang::En, 2026)
    }

    pub fn bundle(lang: Lang) -> Translations {
        LocalizationTable::load().unwrap().get(lang).clone()
    }

    pub fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Row text with wrapping undone, for substring checks across rows.
    pub fn flat_text(lines: &[Line<'_>]) -> String {
        text_of(lines).split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
