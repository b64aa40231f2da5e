//! Page footer with the copyright year.

use ratatui::text::Line;

use super::{blank, muted, rule, SectionContext};
use crate::i18n::FooterText;

pub fn render(text: &FooterText, brand: &str, ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut lines = vec![rule(ctx)];
    lines.extend(muted(&format!("© {} {}. {}", ctx.year, brand, text.rights), ctx));
    lines.extend(muted(&text.built_with, ctx));
    lines.push(blank());
    lines
}
