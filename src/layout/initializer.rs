//! Starting positions for the desktop windows.
//!
//! The viewport width picks a breakpoint tier and every tier has its own
//! placement formula. All formulas work on percentages of the usable area so
//! they behave the same in pixels and in terminal cells.

use std::collections::BTreeMap;
use std::fmt;

use super::{DesktopMetrics, Viewport};
use crate::window::{Geometry, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,
    Medium,
    Narrow,
    Mobile,
}

impl LayoutTier {
    pub fn for_width(width: u16, metrics: &DesktopMetrics) -> Self {
        if width >= metrics.wide_breakpoint {
            LayoutTier::Wide
        } else if width >= metrics.medium_breakpoint {
            LayoutTier::Medium
        } else if width >= metrics.narrow_breakpoint {
            LayoutTier::Narrow
        } else {
            LayoutTier::Mobile
        }
    }

    /// Window size as (percent of viewport width, percent of usable height).
    fn size_percent(self) -> (u32, u32) {
        match self {
            LayoutTier::Wide => (40, 60),
            LayoutTier::Medium => (55, 62),
            LayoutTier::Narrow => (70, 66),
            LayoutTier::Mobile => (100, 100),
        }
    }
}

impl fmt::Display for LayoutTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LayoutTier::Wide => "wide",
            LayoutTier::Medium => "medium",
            LayoutTier::Narrow => "narrow",
            LayoutTier::Mobile => "mobile",
        };
        f.write_str(s)
    }
}

// Wide tier anchors, as percentages of the free space left around a window.
// Each window drifts toward its own corner of the desktop.
const SPREAD_SLOTS: [(i32, i32); 4] = [(5, 5), (95, 10), (12, 95), (85, 100)];

fn percent(value: u16, pct: u32) -> u16 {
    (value as u32 * pct / 100) as u16
}

/// Compute the starting geometry of every window for `viewport`.
pub fn initial_layout(
    viewport: Viewport,
    metrics: &DesktopMetrics,
) -> (LayoutTier, BTreeMap<WindowId, Geometry>) {
    let tier = LayoutTier::for_width(viewport.width, metrics);
    let usable = metrics.usable_area(viewport);

    if tier == LayoutTier::Mobile {
        let rects = WindowId::ALL.into_iter().map(|id| (id, usable)).collect();
        return (tier, rects);
    }

    let (w_pct, h_pct) = tier.size_percent();
    let width = percent(usable.width, w_pct)
        .max(metrics.min_width)
        .min(usable.width);
    let height = percent(usable.height, h_pct)
        .max(metrics.min_height)
        .min(usable.height);
    let free_w = usable.width.saturating_sub(width) as i32;
    let free_h = usable.height.saturating_sub(height) as i32;

    let step = match tier {
        LayoutTier::Narrow => (metrics.cascade_step / 2).max(1),
        _ => metrics.cascade_step,
    } as i32;

    let mut rects = BTreeMap::new();
    for (idx, id) in WindowId::ALL.into_iter().enumerate() {
        let (x, y) = match tier {
            LayoutTier::Wide => {
                let (px, py) = SPREAD_SLOTS[idx];
                (free_w * px / 100, free_h * py / 100)
            }
            _ => {
                let lead_x = free_w * 8 / 100;
                let lead_y = free_h * 6 / 100;
                (lead_x + idx as i32 * step, lead_y + idx as i32 * step)
            }
        };
        let x = usable.x + x.clamp(0, free_w);
        let y = usable.y + y.clamp(0, free_h);
        rects.insert(id, Geometry::new(x, y, width, height));
    }
    tracing::debug!(%tier, width = viewport.width, height = viewport.height, "computed initial layout");
    (tier, rects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_within_usable(rects: &BTreeMap<WindowId, Geometry>, usable: Geometry) {
        for (id, g) in rects {
            assert!(g.x >= usable.x, "{id} left of usable area");
            assert!(g.y >= usable.y, "{id} above usable area");
            assert!(g.right() <= usable.right(), "{id} right of usable area");
            assert!(g.bottom() <= usable.bottom(), "{id} below usable area");
        }
    }

    fn assert_distinct(rects: &BTreeMap<WindowId, Geometry>) {
        let all: Vec<Geometry> = rects.values().copied().collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn tiers_follow_breakpoints() {
        let m = DesktopMetrics::pixels();
        assert_eq!(LayoutTier::for_width(1400, &m), LayoutTier::Wide);
        assert_eq!(LayoutTier::for_width(1100, &m), LayoutTier::Medium);
        assert_eq!(LayoutTier::for_width(800, &m), LayoutTier::Narrow);
        assert_eq!(LayoutTier::for_width(500, &m), LayoutTier::Mobile);
    }

    #[test]
    fn wide_layout_spreads_windows_inside_bands() {
        let m = DesktopMetrics::pixels();
        let viewport = Viewport::new(1400, 900);
        let (tier, rects) = initial_layout(viewport, &m);
        assert_eq!(tier, LayoutTier::Wide);
        assert_eq!(rects.len(), 4);
        assert_distinct(&rects);
        assert_within_usable(&rects, m.usable_area(viewport));
    }

    #[test]
    fn cascaded_tiers_stay_reachable() {
        let m = DesktopMetrics::pixels();
        for width in [1100u16, 800] {
            let viewport = Viewport::new(width, 700);
            let (_, rects) = initial_layout(viewport, &m);
            assert_distinct(&rects);
            assert_within_usable(&rects, m.usable_area(viewport));
        }
    }

    #[test]
    fn narrower_tiers_use_smaller_windows_in_absolute_terms() {
        let m = DesktopMetrics::cells();
        let (_, wide) = initial_layout(Viewport::new(200, 50), &m);
        let (_, narrow) = initial_layout(Viewport::new(90, 50), &m);
        assert!(narrow[&WindowId::About].width < wide[&WindowId::About].width);
    }

    #[test]
    fn mobile_collapses_to_identical_full_area() {
        let m = DesktopMetrics::cells();
        let viewport = Viewport::new(60, 30);
        let (tier, rects) = initial_layout(viewport, &m);
        assert_eq!(tier, LayoutTier::Mobile);
        let usable = m.usable_area(viewport);
        assert!(rects.values().all(|g| *g == usable));
    }

    #[test]
    fn windows_never_smaller_than_minimum_when_room_allows() {
        let m = DesktopMetrics::cells();
        let (_, rects) = initial_layout(Viewport::new(85, 24), &m);
        for g in rects.values() {
            assert!(g.width >= m.min_width);
            assert!(g.height >= m.min_height);
        }
    }
}
