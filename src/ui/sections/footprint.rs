//! Public code-hosting profile with best-effort live counts.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::{blank, body, framed, link, subheading, SectionContext};
use crate::i18n::FootprintText;
use crate::stats::StatsState;

pub fn render(text: &FootprintText, stats: StatsState, ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut content = body(&text.description, ctx);
    content.push(blank());

    content.extend(subheading(&text.github_label, ctx));
    content.extend(link("GitHub", &text.profile_url, ctx));
    content.push(blank());

    content.extend(subheading(&text.stats_label, ctx));
    content.extend(stat_rows(text, stats, ctx));

    framed(&text.title, content, ctx)
}

/// Rows for the counts. Unavailable stats, and counts the profile did not
/// report, are left out rather than shown as placeholders.
fn stat_rows(text: &FootprintText, stats: StatsState, ctx: &SectionContext) -> Vec<Line<'static>> {
    match stats {
        StatsState::Loading => vec![Line::from(Span::styled(
            text.loading_label.clone(),
            ctx.palette.muted_style().add_modifier(Modifier::ITALIC),
        ))],
        StatsState::Unavailable => Vec::new(),
        StatsState::Ready(stats) => [
            (&text.repos_label, stats.public_repos),
            (&text.followers_label, stats.followers),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| stat_row(label, v, ctx)))
        .collect(),
    }
}

fn stat_row(label: &str, value: u64, ctx: &SectionContext) -> Line<'static> {
    let value = value.to_string();
    let used = unicode_width::UnicodeWidthStr::width(label) + value.len();
    let gap = ctx.width.saturating_sub(used).max(1);
    Line::from(vec![
        Span::styled(label.to_string(), ctx.palette.body_style()),
        Span::raw(" ".repeat(gap)),
        Span::styled(value, ctx.palette.heading_style()),
    ])
}
