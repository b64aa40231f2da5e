//! Responsive layout helpers.
//!
//! The screen is split into a fixed navbar, a scrolling body and a one-row
//! keybind bar. Width breakpoints decide between the desktop navbar and the
//! overlay menu, and cap the content column.

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Small terminal (< 60 columns)
    pub const SM_WIDTH: u16 = 60;
    /// Below this the navbar links collapse into the overlay menu
    pub const MD_WIDTH: u16 = 80;
    /// Wide terminal (>= 120 columns)
    pub const LG_WIDTH: u16 = 120;
}

/// Rows taken by the navbar, including its bottom rule.
pub const NAVBAR_HEIGHT: u16 = 2;

/// Rows taken by the keybind bar.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Widest the content column grows.
pub const MAX_CONTENT_WIDTH: u16 = 100;

/// Rows left for the scrolling body on a terminal `height` rows tall.
pub fn body_height(height: u16) -> u16 {
    height.saturating_sub(NAVBAR_HEIGHT + STATUS_BAR_HEIGHT)
}

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// < 60 columns
    Small,
    /// < 80 columns
    Medium,
    /// < 120 columns
    Large,
    /// >= 120 columns
    ExtraLarge,
}

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// let width = ctx.content_width();
/// if ctx.is_mobile() {
///     // Render the menu button instead of the links
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn size_category(&self) -> SizeCategory {
        if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else if self.width < breakpoints::LG_WIDTH {
            SizeCategory::Large
        } else {
            SizeCategory::ExtraLarge
        }
    }

    /// Navbar links collapse into the overlay menu.
    pub fn is_mobile(&self) -> bool {
        self.width < breakpoints::MD_WIDTH
    }

    /// Columns of horizontal padding on each side of the content column.
    pub fn horizontal_padding(&self) -> u16 {
        match self.size_category() {
            SizeCategory::Small => 1,
            SizeCategory::Medium => 2,
            SizeCategory::Large | SizeCategory::ExtraLarge => 4,
        }
    }

    /// Width of the content column, centered with at least the padding on
    /// each side and never wider than [`MAX_CONTENT_WIDTH`].
    pub fn content_width(&self) -> u16 {
        self.width
            .saturating_sub(self.horizontal_padding() * 2)
            .min(MAX_CONTENT_WIDTH)
            .max(1)
    }

    /// Left offset of the centered content column.
    pub fn content_left(&self) -> u16 {
        self.width.saturating_sub(self.content_width()) / 2
    }

    pub fn body_height(&self) -> u16 {
        body_height(self.height)
    }
}
