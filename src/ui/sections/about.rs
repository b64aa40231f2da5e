use ratatui::text::Line;

use super::{body, framed, SectionContext};
use crate::i18n::AboutText;

pub fn render(text: &AboutText, ctx: &SectionContext) -> Vec<Line<'static>> {
    framed(&text.title, body(&text.text, ctx), ctx)
}
