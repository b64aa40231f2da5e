//! Professional certificate with a collapsible course list.
//!
//! Whether the list is expanded is local to this section; the controller
//! only stores the flag.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::{blank, body, framed, link, muted, subheading, SectionContext};
use crate::i18n::{CertificateEntry, CertificationsText};
use crate::ui::text::wrap_styled;

pub fn render(text: &CertificationsText, expanded: bool, ctx: &SectionContext) -> Vec<Line<'static>> {
    let cert = &text.professional_certificate;
    let p = &ctx.palette;

    let mut content = subheading(&cert.name, ctx);
    content.extend(muted(&format!("{} · {}", cert.provider, cert.date), ctx));
    content.push(blank());
    content.extend(body(&cert.description, ctx));
    content.extend(link(&text.view_label, &cert.link, ctx));

    if !cert.included_courses.is_empty() {
        content.push(blank());
        let toggle = if expanded {
            &text.hide_courses
        } else {
            &text.show_courses
        };
        content.push(Line::from(vec![
            Span::styled(if expanded { "▾ " } else { "▸ " }, p.muted_style()),
            Span::styled(
                format!("{} ({})", cert.included_courses_label, cert.included_courses.len()),
                p.heading_style(),
            ),
            Span::styled(format!("  [c] {toggle}"), p.muted_style()),
        ]));

        if expanded {
            for course in &cert.included_courses {
                content.extend(course_lines(course, ctx));
            }
            content.push(blank());
            content.extend(wrap_styled(
                &text.courses_note,
                ctx.width,
                p.muted_style().add_modifier(Modifier::ITALIC),
                Span::raw(""),
            ));
        }
    }

    framed(&text.title, content, ctx)
}

fn course_lines(course: &CertificateEntry, ctx: &SectionContext) -> Vec<Line<'static>> {
    let p = &ctx.palette;
    let mut lines = wrap_styled(
        &course.name,
        ctx.width,
        p.body_style(),
        Span::styled("  • ", p.muted_style()),
    );
    lines.extend(wrap_styled(
        &format!("{} · {}  {}", course.provider, course.date, course.link),
        ctx.width,
        p.muted_style(),
        Span::raw("    "),
    ));
    lines
}
