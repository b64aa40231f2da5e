use ratatui::text::Line;

use super::{blank, body, framed, link, SectionContext};
use crate::i18n::ContactText;

pub fn render(text: &ContactText, ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut content = body(&text.text, ctx);
    content.push(blank());
    content.extend(link(&text.cta, &format!("mailto:{}", text.email), ctx));
    content.extend(link("LinkedIn", &text.linkedin, ctx));
    framed(&text.title, content, ctx)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::i18n::Lang;

    #[test]
    fn test_links() {
        let contact = bundle(Lang::Tr).contact;
        let text = flat_text(&render(&contact, &ctx(120)));
        assert!(text.contains("mailto:portakalm11@gmail.com"));
        assert!(text.contains(&contact.linkedin));
        assert!(text.contains(&contact.cta));
    }
}
