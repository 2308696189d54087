//! Per-window content renderers.
//!
//! Each window wears one skin. A skin draws the window's content payload into
//! the content rectangle and turns clicks inside it into [`SkinResponse`]s.
//! Skins work in window-local coordinates and never touch window geometry.

mod contacts;
mod finder;
mod messages;
mod notes;
mod scroll;

pub use contacts::ContactsSkin;
pub use finder::FinderSkin;
pub use messages::MessagesSkin;
pub use notes::NotesSkin;
pub use scroll::ScrollState;

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::content::WindowContent;
use crate::panel_split::PanelWidths;
use crate::ui::{UiFrame, wrap_words};
use crate::window::WindowId;

/// Desktop state a skin may read while drawing or handling input.
#[derive(Debug, Clone, Copy)]
pub struct SkinContext<'a> {
    active: bool,
    panels: &'a PanelWidths,
    panel_resizing: bool,
}

impl<'a> SkinContext<'a> {
    pub const fn new(active: bool, panels: &'a PanelWidths) -> Self {
        Self {
            active,
            panels,
            panel_resizing: false,
        }
    }

    pub const fn active(&self) -> bool {
        self.active
    }

    pub const fn panels(&self) -> &'a PanelWidths {
        self.panels
    }

    pub const fn panel_resizing(&self) -> bool {
        self.panel_resizing
    }

    pub const fn with_panel_resizing(mut self, resizing: bool) -> Self {
        self.panel_resizing = resizing;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinResponse {
    Ignored,
    Redraw,
    OpenLink(&'static str),
    BeginPanelResize(crate::panel_split::PanelKey),
}

pub trait Skin {
    fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        content: &WindowContent,
        ctx: &SkinContext<'_>,
    );

    /// Left-button press at (`x`, `y`) inside `area`.
    fn press(
        &mut self,
        _area: Rect,
        _x: u16,
        _y: u16,
        _content: &WindowContent,
        _ctx: &SkinContext<'_>,
    ) -> SkinResponse {
        SkinResponse::Ignored
    }

    fn scroll(&mut self, _delta: isize) {}
}

/// The skin each window wears.
#[derive(Debug)]
pub enum WindowSkin {
    Notes(NotesSkin),
    Messages(MessagesSkin),
    Finder(FinderSkin),
    Contacts(ContactsSkin),
}

impl WindowSkin {
    pub fn for_window(id: WindowId) -> Self {
        match id {
            WindowId::About => WindowSkin::Notes(NotesSkin::default()),
            WindowId::Experience => WindowSkin::Messages(MessagesSkin::default()),
            WindowId::Projects => WindowSkin::Finder(FinderSkin::default()),
            WindowId::Contact => WindowSkin::Contacts(ContactsSkin::default()),
        }
    }

    pub fn as_skin_mut(&mut self) -> &mut dyn Skin {
        match self {
            WindowSkin::Notes(skin) => skin,
            WindowSkin::Messages(skin) => skin,
            WindowSkin::Finder(skin) => skin,
            WindowSkin::Contacts(skin) => skin,
        }
    }
}

/// One laid-out row of skin text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SkinLine {
    pub text: String,
    pub style: Style,
    pub link: Option<&'static str>,
}

impl SkinLine {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            link: None,
        }
    }

    pub fn blank() -> Self {
        Self::new(String::new(), Style::default())
    }

    pub fn linked(text: impl Into<String>, style: Style, url: &'static str) -> Self {
        Self {
            link: Some(url),
            ..Self::new(text, style)
        }
    }
}

pub(crate) fn push_wrapped(lines: &mut Vec<SkinLine>, text: &str, width: usize, style: Style) {
    for row in wrap_words(text, width) {
        lines.push(SkinLine::new(row, style));
    }
}

/// Draw `lines` starting at `offset` until `area` is full.
pub(crate) fn render_lines(
    frame: &mut UiFrame<'_>,
    area: Rect,
    lines: &[SkinLine],
    offset: usize,
) {
    let visible = lines.iter().skip(offset).take(area.height as usize);
    for (row, line) in visible.enumerate() {
        let y = area.y + row as u16;
        if line.style.bg.is_some() {
            frame.fill(Rect::new(area.x, y, area.width, 1), line.style);
        }
        frame.set_string(area.x, y, &line.text, line.style);
    }
}

/// Link under row `y` of `area`, if the line drawn there carries one.
pub(crate) fn link_at(
    area: Rect,
    y: u16,
    lines: &[SkinLine],
    offset: usize,
) -> Option<&'static str> {
    let row = y.checked_sub(area.y)?;
    if row >= area.height {
        return None;
    }
    lines.get(offset + row as usize)?.link
}

pub(crate) fn base_style() -> Style {
    Style::default()
        .fg(crate::theme::window_fg())
        .bg(crate::theme::window_bg())
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    pub fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" ").to_string())
            .collect()
    }

    pub fn screen_text(buf: &Buffer, area: Rect) -> String {
        (area.y..area.y + area.height)
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_window_gets_matching_skin() {
        assert!(matches!(
            WindowSkin::for_window(WindowId::About),
            WindowSkin::Notes(_)
        ));
        assert!(matches!(
            WindowSkin::for_window(WindowId::Projects),
            WindowSkin::Finder(_)
        ));
    }

    #[test]
    fn link_at_respects_offset() {
        let lines = vec![
            SkinLine::blank(),
            SkinLine::linked("a", Style::default(), "https://a"),
            SkinLine::blank(),
        ];
        let area = Rect::new(2, 3, 10, 2);
        assert_eq!(link_at(area, 4, &lines, 0), Some("https://a"));
        assert_eq!(link_at(area, 3, &lines, 1), Some("https://a"));
        assert_eq!(link_at(area, 2, &lines, 0), None);
        assert_eq!(link_at(area, 4, &lines, 5), None);
    }
}
