//! One-shot section reveal as sections scroll into view.
//!
//! Geometry is in document rows: a section occupies `[top, top + height)` and
//! the viewport covers `[scroll, scroll + viewport_height)`. The viewport's
//! bottom edge is pulled in by [`REVEAL_MARGIN_ROWS`] so a section reveals
//! slightly after its first rows appear.

use std::collections::HashMap;

use super::document::{Document, Subscription, SubscriptionKind};

/// Fraction of a section that must be visible to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Rows trimmed from the bottom of the viewport before measuring.
pub const REVEAL_MARGIN_ROWS: u32 = 2;

/// Ticks a section spends fading in after it is revealed.
pub const FADE_TICKS: u8 = 18;

/// Every section on the page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Footprint,
    Certifications,
    Contact,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 9] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Footprint,
        SectionId::Certifications,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Sections linked from the navbar, in link order (keys `1`-`6`).
    pub const NAV: [SectionId; 6] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    /// Whether the section fades in on first view.
    pub fn is_animatable(self) -> bool {
        !matches!(self, SectionId::Hero | SectionId::Footer)
    }

    /// Anchor name, as used in navigation links.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Footprint => "footprint",
            SectionId::Certifications => "certifications",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
        }
    }
}

/// Rows occupied by one section in the composed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    pub id: SectionId,
    pub top: u32,
    pub height: u32,
}

impl SectionExtent {
    /// Fraction of the section inside the effective viewport.
    ///
    /// Measured against `min(height, viewport)` so a section taller than the
    /// viewport can still reach the threshold.
    pub fn visible_fraction(&self, scroll: u32, viewport_height: u32) -> f64 {
        let view_top = scroll;
        let view_bottom = scroll + viewport_height.saturating_sub(REVEAL_MARGIN_ROWS);
        let bottom = self.top + self.height;

        let overlap = bottom.min(view_bottom).saturating_sub(self.top.max(view_top));
        let denominator = self.height.min(view_bottom - view_top);
        if denominator == 0 {
            return 0.0;
        }
        f64::from(overlap) / f64::from(denominator)
    }
}

/// Render state of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    /// Revealed; `remaining` ticks until fully visible
    FadingIn { remaining: u8 },
    Visible,
}

impl Visibility {
    pub fn is_revealed(self) -> bool {
        !matches!(self, Visibility::Hidden)
    }
}

/// Tracks which animatable sections have been revealed.
#[derive(Debug)]
pub struct RevealTracker {
    states: HashMap<SectionId, Visibility>,
    reduced_motion: bool,
    observer: Option<Subscription>,
}

impl RevealTracker {
    /// With reduced motion every section starts visible and no observer is
    /// ever attached.
    pub fn new(reduced_motion: bool) -> Self {
        let states = SectionId::ALL
            .into_iter()
            .map(|id| {
                let state = if reduced_motion || !id.is_animatable() {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                };
                (id, state)
            })
            .collect();

        Self {
            states,
            reduced_motion,
            observer: None,
        }
    }

    /// Attach the observer. No-op under reduced motion or when already
    /// observing.
    pub fn start(&mut self, document: &Document) {
        if self.reduced_motion || self.observer.is_some() || self.all_revealed() {
            return;
        }
        self.observer = Some(document.subscribe(SubscriptionKind::SectionObserver));
    }

    /// Detach the observer. Revealed sections stay revealed.
    pub fn stop(&mut self) {
        self.observer = None;
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    /// Reveal every hidden section that now crosses the threshold.
    ///
    /// Returns `true` if anything was revealed. Detaches the observer once
    /// nothing is left to watch.
    pub fn observe(&mut self, extents: &[SectionExtent], scroll: u32, viewport_height: u32) -> bool {
        if self.observer.is_none() {
            return false;
        }

        let mut changed = false;
        for extent in extents {
            let Some(state) = self.states.get_mut(&extent.id) else {
                continue;
            };
            if *state != Visibility::Hidden {
                continue;
            }
            if extent.visible_fraction(scroll, viewport_height) >= REVEAL_THRESHOLD {
                *state = Visibility::FadingIn {
                    remaining: FADE_TICKS,
                };
                tracing::debug!("Revealed section {}", extent.id.anchor());
                changed = true;
            }
        }

        if self.all_revealed() {
            self.stop();
        }
        changed
    }

    /// Advance fade-ins by one tick. Returns `true` if any section changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for state in self.states.values_mut() {
            if let Visibility::FadingIn { remaining } = *state {
                *state = if remaining <= 1 {
                    Visibility::Visible
                } else {
                    Visibility::FadingIn {
                        remaining: remaining - 1,
                    }
                };
                changed = true;
            }
        }
        changed
    }

    pub fn visibility(&self, id: SectionId) -> Visibility {
        self.states.get(&id).copied().unwrap_or(Visibility::Visible)
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.visibility(id).is_revealed()
    }

    fn all_revealed(&self) -> bool {
        self.states.values().all(|state| state.is_revealed())
    }
}
