//! Composes every section into one scrollable column of rows.
//!
//! The composed [`Page`] also records where each section landed, which is
//! what the reveal observer and section navigation measure against.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::layout::LayoutContext;
use super::sections::{self, SectionContext};
use super::theme::Palette;
use crate::app::{SectionExtent, SectionId, Visibility, FADE_TICKS};
use crate::i18n::{Lang, Translations};
use crate::stats::StatsState;

/// Everything the page body depends on.
#[derive(Debug, Clone, Copy)]
pub struct PageState<'a> {
    pub translations: &'a Translations,
    pub lang: Lang,
    pub palette: Palette,
    pub stats: StatsState,
    pub courses_expanded: bool,
    pub year: i32,
    pub layout: LayoutContext,
}

/// Composed body rows plus section positions.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub extents: Vec<SectionExtent>,
}

impl Page {
    pub fn height(&self) -> u32 {
        u32::try_from(self.lines.len()).unwrap_or(u32::MAX)
    }

    /// Section containing document row `row`.
    pub fn section_at(&self, row: u32) -> Option<SectionId> {
        self.extents
            .iter()
            .find(|e| row >= e.top && row < e.top + e.height)
            .map(|e| e.id)
    }
}

fn section_lines(id: SectionId, state: &PageState<'_>, ctx: &SectionContext) -> Vec<Line<'static>> {
    let t = state.translations;
    match id {
        SectionId::Hero => sections::hero::render(&t.hero, ctx),
        SectionId::About => sections::about::render(&t.about, ctx),
        SectionId::Experience => sections::experience::render(&t.experience, ctx),
        SectionId::Projects => sections::projects::render(&t.projects, ctx),
        SectionId::Skills => sections::skills::render(&t.skills, ctx),
        SectionId::Footprint => sections::footprint::render(&t.footprint, state.stats, ctx),
        SectionId::Certifications => {
            sections::certifications::render(&t.certifications, state.courses_expanded, ctx)
        }
        SectionId::Contact => sections::contact::render(&t.contact, ctx),
        SectionId::Footer => sections::footer::render(&t.footer, &t.navbar.brand, ctx),
    }
}

/// Lay out all sections top to bottom in the centered content column.
pub fn compose(state: &PageState<'_>) -> Page {
    let ctx = SectionContext::new(
        state.palette,
        usize::from(state.layout.content_width()),
        state.lang,
        state.year,
    );
    let indent = " ".repeat(usize::from(state.layout.content_left()));

    let mut page = Page::default();
    for id in SectionId::ALL {
        let lines = section_lines(id, state, &ctx);
        let top = page.height();
        let height = u32::try_from(lines.len()).unwrap_or(u32::MAX);
        page.extents.push(SectionExtent { id, top, height });
        page.lines.extend(lines.into_iter().map(|line| indent_line(line, &indent)));
    }
    page
}

fn indent_line(mut line: Line<'static>, indent: &str) -> Line<'static> {
    if !indent.is_empty() && !line.spans.is_empty() {
        line.spans.insert(0, Span::raw(indent.to_string()));
    }
    line
}

/// Restyle a row for its section's fade state.
///
/// Hidden rows are painted in the background color so they keep their space
/// without showing. Fading rows step from the border color through dim text.
pub fn apply_fade(line: Line<'static>, visibility: Visibility, palette: &Palette) -> Line<'static> {
    let restyle = |style: Style| -> Style {
        match visibility {
            Visibility::Visible => style,
            Visibility::Hidden => style.fg(palette.background),
            Visibility::FadingIn { remaining } if remaining > FADE_TICKS / 2 => {
                style.fg(palette.border)
            }
            Visibility::FadingIn { .. } => style.add_modifier(Modifier::DIM),
        }
    };
    if visibility == Visibility::Visible {
        return line;
    }
    Line::from(
        line.spans
            .into_iter()
            .map(|span| {
                let style = restyle(span.style);
                Span::styled(span.content, style)
            })
            .collect::<Vec<_>>(),
    )
}

/// Rows `[offset, offset + height)` of the page, faded per section.
pub fn visible_rows(
    page: &Page,
    offset: u32,
    height: u16,
    visibility: impl Fn(SectionId) -> Visibility,
    palette: &Palette,
) -> Vec<Line<'static>> {
    page.lines
        .iter()
        .enumerate()
        .skip(offset as usize)
        .take(usize::from(height))
        .map(|(row, line)| {
            let vis = page
                .section_at(row as u32)
                .map(&visibility)
                .unwrap_or(Visibility::Visible);
            apply_fade(line.clone(), vis, palette)
        })
        .collect()
}
