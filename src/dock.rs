//! Menu bar across the top of the desktop and the dock along the bottom.
//!
//! Both bars lay out their clickable items when the viewport changes and keep
//! the resulting rectangles for hit testing until the next layout.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::chrome::shows_open_indicator;
use crate::layout::{DesktopMetrics, Viewport, rect_contains};
use crate::ui::{UiFrame, truncate_to_width};
use crate::window::{WindowId, WindowStore};

const BRAND: &str = "◆";
const RESET_LABEL: &str = " Reset Layout ";
const RESIZE_HINT: &str = "↔ resizing sidebar";
const QUIT_HINT: &str = "q quit";
/// Room reserved for the active app name so the menu items never shift.
const APP_NAME_WIDTH: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarHit {
    ResetLayout,
    Dock(WindowId),
}

#[derive(Debug, Clone, Copy)]
struct DockSlot {
    id: WindowId,
    rect: Rect,
}

#[derive(Debug, Default)]
pub struct DesktopBars {
    menu_area: Rect,
    dock_area: Rect,
    reset_rect: Option<Rect>,
    slots: Vec<DockSlot>,
}

fn dock_label(id: WindowId) -> String {
    format!(" {} {} ", id.dock_glyph(), id.app_name())
}

impl DesktopBars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_area(&self) -> Rect {
        self.menu_area
    }

    pub fn dock_area(&self) -> Rect {
        self.dock_area
    }

    /// Recompute bar areas and item rectangles for `viewport`.
    pub fn arrange(&mut self, viewport: Viewport, metrics: &DesktopMetrics) {
        let full = viewport.rect();
        let menu_h = metrics.menu_bar_height.min(full.height);
        let dock_h = metrics
            .dock_height
            .min(full.height.saturating_sub(menu_h));
        self.menu_area = Rect::new(0, 0, full.width, menu_h);
        self.dock_area = Rect::new(0, full.height - dock_h, full.width, dock_h);

        self.reset_rect = None;
        let reset_x = 3 + APP_NAME_WIDTH;
        let reset_w = RESET_LABEL.chars().count() as u16;
        if menu_h > 0 && reset_x + reset_w <= full.width {
            self.reset_rect = Some(Rect::new(reset_x, 0, reset_w, menu_h));
        }

        self.slots.clear();
        if dock_h == 0 {
            return;
        }
        let widths: Vec<u16> = WindowId::ALL
            .iter()
            .map(|id| dock_label(*id).chars().count() as u16)
            .collect();
        let gap = 1u16;
        let total = widths.iter().sum::<u16>() + gap * (widths.len() as u16 - 1);
        if total > full.width {
            return;
        }
        let mut x = (full.width - total) / 2;
        for (id, width) in WindowId::ALL.into_iter().zip(widths) {
            self.slots.push(DockSlot {
                id,
                rect: Rect::new(x, self.dock_area.y, width, dock_h),
            });
            x += width + gap;
        }
    }

    pub fn hit_test(&self, x: i32, y: i32) -> Option<BarHit> {
        let (Ok(col), Ok(row)) = (u16::try_from(x), u16::try_from(y)) else {
            return None;
        };
        if let Some(rect) = self.reset_rect
            && rect_contains(rect, col, row)
        {
            return Some(BarHit::ResetLayout);
        }
        self.slots
            .iter()
            .find(|slot| rect_contains(slot.rect, col, row))
            .map(|slot| BarHit::Dock(slot.id))
    }

    /// True when the point is on either bar, clickable or not.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (Ok(col), Ok(row)) = (u16::try_from(x), u16::try_from(y)) else {
            return false;
        };
        rect_contains(self.menu_area, col, row) || rect_contains(self.dock_area, col, row)
    }

    pub fn render_menu_bar(
        &self,
        frame: &mut UiFrame<'_>,
        active_app: Option<&str>,
        panel_resizing: bool,
    ) {
        let area = self.menu_area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default()
            .bg(crate::theme::menu_bar_bg())
            .fg(crate::theme::menu_bar_fg());
        frame.fill(area, base);
        frame.set_string(1, area.y, BRAND, base);
        if let Some(app) = active_app {
            let name = truncate_to_width(app, APP_NAME_WIDTH as usize - 1);
            frame.set_string(3, area.y, &name, base.add_modifier(Modifier::BOLD));
        }
        if let Some(rect) = self.reset_rect {
            frame.set_string(rect.x, rect.y, RESET_LABEL, base);
        }
        let hint = if panel_resizing { RESIZE_HINT } else { QUIT_HINT };
        let hint_w = hint.chars().count() as u16;
        let min_x = self.reset_rect.map_or(3 + APP_NAME_WIDTH, |r| r.x + r.width);
        if area.width > hint_w + 1 && area.width - hint_w - 1 >= min_x {
            frame.set_string(
                area.width - hint_w - 1,
                area.y,
                hint,
                base.fg(crate::theme::menu_bar_hint_fg()),
            );
        }
    }

    pub fn render_dock(&self, frame: &mut UiFrame<'_>, store: &WindowStore) {
        let area = self.dock_area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default()
            .bg(crate::theme::dock_bg())
            .fg(crate::theme::dock_fg());
        frame.fill(area, base);
        let label_row = area.y + area.height.saturating_sub(1) / 2;
        for slot in &self.slots {
            let running = shows_open_indicator(store, slot.id);
            let mut style = if running {
                base
            } else {
                base.fg(crate::theme::dock_idle_fg())
            };
            if store.active() == Some(slot.id) {
                style = style.add_modifier(Modifier::BOLD);
            }
            frame.set_string(slot.rect.x, label_row, &dock_label(slot.id), style);
            if !running {
                continue;
            }
            let indicator_row = label_row + 1;
            let centre = slot.rect.x + slot.rect.width / 2;
            if indicator_row < area.y + area.height {
                frame.set_string(
                    centre,
                    indicator_row,
                    "•",
                    base.fg(crate::theme::dock_indicator()),
                );
            } else {
                let underline = style.add_modifier(Modifier::UNDERLINED);
                frame.set_string(slot.rect.x, label_row, &dock_label(slot.id), underline);
            }
        }
    }
}
