pub mod decorator;
pub mod store;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use ratatui::prelude::Rect;

pub use store::WindowStore;

/// The fixed set of application windows living on the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindowId {
    About,
    Experience,
    Projects,
    Contact,
}

impl WindowId {
    pub const ALL: [WindowId; 4] = [
        WindowId::About,
        WindowId::Experience,
        WindowId::Projects,
        WindowId::Contact,
    ];

    pub fn key(self) -> &'static str {
        match self {
            WindowId::About => "about",
            WindowId::Experience => "experience",
            WindowId::Projects => "projects",
            WindowId::Contact => "contact",
        }
    }

    /// Name shown in the title bar and menu bar, after the macOS app the
    /// window imitates.
    pub fn app_name(self) -> &'static str {
        match self {
            WindowId::About => "Notes",
            WindowId::Experience => "Messages",
            WindowId::Projects => "Finder",
            WindowId::Contact => "Contacts",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WindowId::About => "About Me",
            WindowId::Experience => "Experience",
            WindowId::Projects => "Side Projects",
            WindowId::Contact => "Get In Touch",
        }
    }

    pub fn dock_glyph(self) -> &'static str {
        match self {
            WindowId::About => "✎",
            WindowId::Experience => "✉",
            WindowId::Projects => "▤",
            WindowId::Contact => "☎",
        }
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WindowId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowId::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown window `{s}`"))
    }
}

/// Signed window origin with unsigned size.
///
/// The origin may go negative so a window can hang partially off the left or
/// top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Geometry {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.width > 0
            && self.height > 0
            && x >= self.x
            && x < self.right()
            && y >= self.y
            && y < self.bottom()
    }

    /// Clip to `bounds`, returning an empty rect when nothing is visible.
    pub fn visible_in(&self, bounds: Rect) -> Rect {
        let x0 = self.x.max(bounds.x as i32);
        let y0 = self.y.max(bounds.y as i32);
        let x1 = self.right().min(bounds.x as i32 + bounds.width as i32);
        let y1 = self.bottom().min(bounds.y as i32 + bounds.height as i32);
        if x1 <= x0 || y1 <= y0 {
            return Rect::default();
        }
        Rect {
            x: x0 as u16,
            y: y0 as u16,
            width: (x1 - x0) as u16,
            height: (y1 - y0) as u16,
        }
    }
}

/// Per-window lifecycle flags. The flags are independent; rendering rules
/// combine them (see [`Lifecycle::is_visible`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lifecycle {
    pub open: bool,
    pub minimized: bool,
    pub maximized: bool,
}

impl Lifecycle {
    pub fn is_visible(&self) -> bool {
        self.open && !self.minimized
    }
}

/// Authoritative record of every window's normal (un-maximized) geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeometryModel {
    rects: BTreeMap<WindowId, Geometry>,
}

impl GeometryModel {
    pub fn new(rects: BTreeMap<WindowId, Geometry>) -> Self {
        Self { rects }
    }

    pub fn get(&self, id: WindowId) -> Geometry {
        let found = self.rects.get(&id).copied();
        debug_assert!(found.is_some(), "no geometry recorded for {id}");
        found.unwrap_or_default()
    }

    pub(crate) fn set(&mut self, id: WindowId, geometry: Geometry) {
        self.rects.insert(id, geometry);
    }
}
