//! Hero: availability badge, name, role, pitch and calls to action.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{blank, body, link, muted, SectionContext};
use crate::i18n::{HeroText, Lang};
use crate::ui::text::paragraph;

/// CV document offered by the secondary call to action.
pub fn cv_path(lang: Lang) -> &'static str {
    match lang {
        Lang::Tr => "/Mustafa-Erhan-Portakal-CV-TR.pdf",
        Lang::En => "/Mustafa-Erhan-Portakal-CV.pdf",
    }
}

pub fn render(text: &HeroText, ctx: &SectionContext) -> Vec<Line<'static>> {
    let p = &ctx.palette;
    let mut lines = vec![blank()];

    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(p.success)),
        Span::styled(text.badge.clone(), p.muted_style()),
    ]));
    lines.push(blank());

    lines.extend(paragraph(
        &text.title,
        ctx.width,
        p.heading_style().add_modifier(Modifier::UNDERLINED),
    ));
    lines.extend(paragraph(&text.role, ctx.width, p.heading_style()));
    lines.push(blank());
    lines.extend(body(&text.subtitle, ctx));
    lines.push(blank());

    lines.extend(link(&text.cta_primary, "#projects  [3]", ctx));
    lines.extend(link(&text.cta_secondary, cv_path(ctx.lang), ctx));
    lines.push(blank());

    lines.extend(muted(&format!("⌖ {}   ✉ {}", text.location, text.email), ctx));
    lines.push(blank());
    lines
}
