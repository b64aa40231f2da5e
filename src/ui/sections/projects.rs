//! Projects in three tiers: active, featured and other.
//!
//! Empty tiers are omitted entirely, as are missing optional fields.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{
    blank, body, bullet, chips, framed, label, link, muted, split_technologies, subheading,
    SectionContext,
};
use crate::i18n::{ActiveProject, FeaturedProject, OtherProject, ProjectLabels, ProjectsText};
use crate::ui::text::paragraph;

pub fn render(text: &ProjectsText, ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut content = Vec::new();

    if !text.active.is_empty() {
        content.extend(paragraph(&text.active_title, ctx.width, ctx.palette.heading_style()));
        content.extend(muted(&text.active_subtitle, ctx));
        for project in &text.active {
            content.push(blank());
            content.extend(active_card(project, &text.labels, ctx));
        }
        content.push(blank());
    }

    for (i, project) in text.featured.iter().enumerate() {
        if i > 0 {
            content.push(blank());
        }
        content.extend(featured_card(project, &text.labels, ctx));
    }

    if !text.other.is_empty() {
        if !content.is_empty() {
            content.push(blank());
        }
        content.extend(paragraph(&text.other_title, ctx.width, ctx.palette.heading_style()));
        for project in &text.other {
            content.push(blank());
            content.extend(other_card(project, ctx));
        }
    }

    framed(&text.title, content, ctx)
}

fn active_card(project: &ActiveProject, labels: &ProjectLabels, ctx: &SectionContext) -> Vec<Line<'static>> {
    let p = &ctx.palette;
    let mut lines = vec![Line::from(vec![
        Span::styled(project.name.clone(), p.heading_style()),
        Span::styled("  ", p.body_style()),
        Span::styled(
            project.status.clone(),
            Style::default().fg(p.success).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", labels.in_progress.to_uppercase()), p.muted_style()),
    ])];
    lines.extend(body(&project.description, ctx));
    lines.extend(chips(project.tech_chips(), ctx));
    lines.extend(link(&labels.live_site, &project.live_url, ctx));
    lines.extend(link(&labels.github, &project.github_url, ctx));
    lines
}

fn featured_card(project: &FeaturedProject, labels: &ProjectLabels, ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut lines = subheading(&project.name, ctx);
    lines.extend(muted(&project.role, ctx));
    lines.extend(paragraph(&project.tagline, ctx.width, ctx.palette.body_style().add_modifier(Modifier::ITALIC)));

    lines.push(label(&labels.problem, ctx));
    lines.extend(body(&project.problem, ctx));
    lines.push(label(&labels.solution, ctx));
    lines.extend(body(&project.solution, ctx));
    if let Some(outcome) = &project.outcome {
        lines.push(label(&labels.outcome, ctx));
        lines.extend(body(outcome, ctx));
    }

    if !project.highlights.is_empty() {
        lines.push(label(&labels.highlights, ctx));
        for highlight in &project.highlights {
            lines.extend(bullet(highlight, ctx));
        }
    }

    lines.extend(chips(split_technologies(&project.technologies), ctx));
    if let Some(url) = &project.link {
        lines.extend(link(&labels.github, url, ctx));
    }
    lines
}

fn other_card(project: &OtherProject, ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut lines = subheading(&project.name, ctx);
    lines.extend(muted(&project.role, ctx));
    lines.extend(body(&project.tagline, ctx));
    lines.extend(chips(split_technologies(&project.technologies), ctx));
    if let Some(url) = &project.link {
        lines.extend(link("GitHub", url, ctx));
    }
    lines
}
