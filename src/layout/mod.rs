pub mod floating;
pub mod initializer;

pub use initializer::{LayoutTier, initial_layout};

use ratatui::prelude::Rect;

use crate::window::Geometry;

/// Current size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// Unit system for every length the desktop reasons about.
///
/// The window manager never assumes pixels or terminal cells; it only ever
/// reads these numbers. [`DesktopMetrics::pixels`] mirrors a browser desktop,
/// [`DesktopMetrics::cells`] is what the terminal frontend runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopMetrics {
    pub menu_bar_height: u16,
    pub dock_height: u16,
    pub title_bar_height: u16,
    /// Thickness of the resize band around each window edge.
    pub handle: u16,
    pub min_width: u16,
    pub min_height: u16,
    pub wide_breakpoint: u16,
    pub medium_breakpoint: u16,
    /// Viewports narrower than this switch to single-window mobile mode.
    pub narrow_breakpoint: u16,
    /// How much of a window must stay on screen when dragged sideways.
    pub offscreen_margin: u16,
    pub cascade_step: u16,
    /// Offset of the first traffic-light control from the window's left edge.
    pub control_offset: u16,
    pub control_size: u16,
    pub control_spacing: u16,
}

impl DesktopMetrics {
    pub const fn pixels() -> Self {
        Self {
            menu_bar_height: 28,
            dock_height: 80,
            title_bar_height: 28,
            handle: 5,
            min_width: 300,
            min_height: 200,
            wide_breakpoint: 1200,
            medium_breakpoint: 1000,
            narrow_breakpoint: 768,
            offscreen_margin: 100,
            cascade_step: 48,
            control_offset: 12,
            control_size: 12,
            control_spacing: 20,
        }
    }

    pub const fn cells() -> Self {
        Self {
            menu_bar_height: 1,
            dock_height: 3,
            title_bar_height: 1,
            handle: 1,
            min_width: 24,
            min_height: 6,
            wide_breakpoint: 160,
            medium_breakpoint: 120,
            narrow_breakpoint: 80,
            offscreen_margin: 8,
            cascade_step: 3,
            control_offset: 2,
            control_size: 1,
            control_spacing: 2,
        }
    }

    /// Region windows live in: the viewport minus the menu bar and the dock.
    pub fn usable_area(&self, viewport: Viewport) -> Geometry {
        let top = self.menu_bar_height.min(viewport.height);
        let height = viewport
            .height
            .saturating_sub(top)
            .saturating_sub(self.dock_height);
        Geometry::new(0, top as i32, viewport.width, height)
    }

    /// First row covered by the dock.
    pub fn dock_top(&self, viewport: Viewport) -> i32 {
        viewport.height.saturating_sub(self.dock_height) as i32
    }

    pub fn is_mobile(&self, viewport: Viewport) -> bool {
        viewport.width < self.narrow_breakpoint
    }
}

impl Default for DesktopMetrics {
    fn default() -> Self {
        Self::cells()
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}
