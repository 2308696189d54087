//! Sidebar widths inside window content, resized by dragging a divider.
//!
//! Unlike window geometry there is no separate view path here: every move
//! writes the clamped width straight into [`PanelWidths`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Names a resizable panel. Distinct from window ids; a window's content may
/// own any number of panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelKey(&'static str);

impl PanelKey {
    pub const FINDER_SIDEBAR: PanelKey = PanelKey("finder.sidebar");

    pub const ALL: [PanelKey; 1] = [PanelKey::FINDER_SIDEBAR];

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn lookup(name: &str) -> Option<PanelKey> {
        PanelKey::ALL.into_iter().find(|key| key.0 == name)
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PanelBounds {
    pub default: u16,
    pub min: u16,
    pub max: u16,
}

impl PanelBounds {
    pub fn clamp(&self, width: i32) -> u16 {
        width.clamp(self.min as i32, self.max.max(self.min) as i32) as u16
    }
}

#[derive(Debug, Clone, Copy)]
struct PanelEntry {
    width: u16,
    bounds: PanelBounds,
}

/// Current width of every registered panel, always inside its bounds.
#[derive(Debug, Clone, Default)]
pub struct PanelWidths {
    panels: BTreeMap<PanelKey, PanelEntry>,
}

impl PanelWidths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` at its default width. Re-registering resets the width.
    pub fn register(&mut self, key: PanelKey, bounds: PanelBounds) {
        let width = bounds.clamp(bounds.default as i32);
        self.panels.insert(key, PanelEntry { width, bounds });
    }

    pub fn width(&self, key: PanelKey) -> Option<u16> {
        self.panels.get(&key).map(|entry| entry.width)
    }

    pub fn bounds(&self, key: PanelKey) -> Option<PanelBounds> {
        self.panels.get(&key).map(|entry| entry.bounds)
    }

    /// Store `width` clamped into the panel's range. Unknown keys are a
    /// programming error and are ignored in release builds.
    pub fn set_width(&mut self, key: PanelKey, width: i32) {
        let entry = self.panels.get_mut(&key);
        debug_assert!(entry.is_some(), "unknown panel {key}");
        if let Some(entry) = entry {
            entry.width = entry.bounds.clamp(width);
        }
    }
}

/// Width for a divider dragged from `press_x` to `x`, starting at `start`.
pub fn dragged_width(start: u16, press_x: i32, x: i32, bounds: PanelBounds) -> u16 {
    bounds.clamp(start as i32 + (x - press_x))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: PanelBounds = PanelBounds {
        default: 18,
        min: 12,
        max: 30,
    };

    #[test]
    fn register_starts_at_default() {
        let mut panels = PanelWidths::new();
        panels.register(PanelKey::FINDER_SIDEBAR, BOUNDS);
        assert_eq!(panels.width(PanelKey::FINDER_SIDEBAR), Some(18));
    }

    #[test]
    fn register_clamps_out_of_range_default() {
        let mut panels = PanelWidths::new();
        panels.register(
            PanelKey::FINDER_SIDEBAR,
            PanelBounds {
                default: 100,
                ..BOUNDS
            },
        );
        assert_eq!(panels.width(PanelKey::FINDER_SIDEBAR), Some(30));
    }

    #[test]
    fn overshooting_drags_stay_in_bounds() {
        let mut panels = PanelWidths::new();
        panels.register(PanelKey::FINDER_SIDEBAR, BOUNDS);
        for x in [-500, -3, 0, 7, 19, 250, 10_000] {
            let w = dragged_width(18, 40, x, BOUNDS);
            panels.set_width(PanelKey::FINDER_SIDEBAR, w as i32);
            let current = panels.width(PanelKey::FINDER_SIDEBAR).unwrap();
            assert!((BOUNDS.min..=BOUNDS.max).contains(&current));
        }
    }

    #[test]
    fn dragged_width_follows_pointer_inside_range() {
        assert_eq!(dragged_width(18, 40, 45, BOUNDS), 23);
        assert_eq!(dragged_width(18, 40, 36, BOUNDS), 14);
        assert_eq!(dragged_width(18, 40, 0, BOUNDS), 12);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(
            PanelKey::lookup("finder.sidebar"),
            Some(PanelKey::FINDER_SIDEBAR)
        );
        assert_eq!(PanelKey::lookup("messages.sidebar"), None);
    }
}
