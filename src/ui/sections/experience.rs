//! Work history, newest first as authored.

use ratatui::text::{Line, Span};

use super::{blank, bullet, framed, subheading, SectionContext};
use crate::i18n::{ExperienceEntry, ExperienceText};

pub fn render(text: &ExperienceText, ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut content = Vec::new();
    for (i, entry) in text.items.iter().enumerate() {
        if i > 0 {
            content.push(blank());
        }
        content.extend(entry_lines(entry, ctx));
    }
    framed(&text.title, content, ctx)
}

fn entry_lines(entry: &ExperienceEntry, ctx: &SectionContext) -> Vec<Line<'static>> {
    let p = &ctx.palette;
    let mut lines = subheading(&entry.role, ctx);
    lines.push(Line::from(vec![
        Span::styled(entry.company.clone(), p.body_style()),
        Span::styled(format!("  ·  {}  ·  {}", entry.period, entry.location), p.muted_style()),
    ]));
    for item in &entry.bullets {
        lines.extend(bullet(item, ctx));
    }
    lines
}
