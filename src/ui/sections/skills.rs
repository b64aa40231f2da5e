use ratatui::text::Line;

use super::{blank, chips, framed, subheading, SectionContext};
use crate::i18n::SkillsText;

pub fn render(text: &SkillsText, ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut content = Vec::new();
    for (i, domain) in text.domains.iter().enumerate() {
        if i > 0 {
            content.push(blank());
        }
        content.extend(subheading(&domain.category, ctx));
        content.extend(chips(domain.skills.iter().map(String::as_str), ctx));
    }
    framed(&text.title, content, ctx)
}
