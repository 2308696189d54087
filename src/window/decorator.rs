use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};

use crate::layout::DesktopMetrics;
use crate::layout::floating::{ChromeControl, WindowChrome};
use crate::ui::UiFrame;
use crate::window::Geometry;

/// Draws the frame around a window: border, title bar and traffic lights.
///
/// Decorators always draw in window-local coordinates (origin 0,0); the
/// desktop composites the result onto the screen.
pub trait WindowDecorator: std::fmt::Debug {
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        chrome: &WindowChrome,
        title: &str,
        active: bool,
    );
}

#[derive(Debug, Default)]
pub struct TrafficLightDecorator;

impl TrafficLightDecorator {
    fn control_style(control: ChromeControl, active: bool) -> Style {
        if !active {
            return Style::default().fg(crate::theme::muted());
        }
        let color = match control {
            ChromeControl::Close => crate::theme::close_button(),
            ChromeControl::Minimize => crate::theme::minimize_button(),
            ChromeControl::Maximize => crate::theme::maximize_button(),
        };
        Style::default().fg(color)
    }
}

impl WindowDecorator for TrafficLightDecorator {
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        chrome: &WindowChrome,
        title: &str,
        active: bool,
    ) {
        let rect = chrome.rect();
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let border_style = Style::default()
            .fg(if active {
                crate::theme::border_active()
            } else {
                crate::theme::border_inactive()
            })
            .bg(crate::theme::window_bg());
        let header_style = Style::default()
            .bg(if active {
                crate::theme::title_bar_active_bg()
            } else {
                crate::theme::title_bar_inactive_bg()
            })
            .fg(crate::theme::title_fg());

        let left = rect.x as u16;
        let top = rect.y as u16;
        let right = left + rect.width - 1;
        let bottom = top + rect.height - 1;
        let buffer = frame.buffer_mut();

        // Borders
        for x in left..=right {
            let (t, b) = if x == left {
                ("╭", "╰")
            } else if x == right {
                ("╮", "╯")
            } else {
                ("─", "─")
            };
            if let Some(cell) = buffer.cell_mut((x, top)) {
                cell.set_symbol(t);
                cell.set_style(border_style);
            }
            if let Some(cell) = buffer.cell_mut((x, bottom)) {
                cell.set_symbol(b);
                cell.set_style(border_style);
            }
        }
        for y in top.saturating_add(1)..bottom {
            for x in [left, right] {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.set_symbol("│");
                    cell.set_style(border_style);
                }
            }
        }

        // Title bar background
        let bar = to_local_rect(chrome.title_bar());
        frame.fill(bar, header_style);

        // Centered title, skipped when the bar is too narrow to hold it.
        let title_len = title.chars().count() as u16;
        if bar.height > 0 && title_len < bar.width {
            let start_x = bar.x + (bar.width - title_len) / 2;
            let title_y = bar.y + bar.height / 2;
            frame.set_string(
                start_x,
                title_y,
                title,
                header_style.add_modifier(Modifier::BOLD),
            );
        }

        for control in ChromeControl::ALL {
            let g = chrome.control(control);
            if g.width == 0 {
                continue;
            }
            let style =
                Self::control_style(control, active).bg(header_style.bg.unwrap_or_default());
            frame.set_string(g.x as u16, g.y as u16, "●", style);
        }
    }
}

fn to_local_rect(g: Geometry) -> Rect {
    Rect::new(g.x.max(0) as u16, g.y.max(0) as u16, g.width, g.height)
}

/// Chrome for a window drawn at the origin of its own offscreen buffer.
pub fn local_chrome(
    width: u16,
    height: u16,
    metrics: DesktopMetrics,
    resizable: bool,
) -> WindowChrome {
    let rect = Geometry::new(0, 0, width, height);
    if resizable {
        WindowChrome::new(rect, metrics)
    } else {
        WindowChrome::fixed(rect, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    #[test]
    fn draws_border_title_and_controls() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        let chrome = local_chrome(30, 8, DesktopMetrics::cells(), true);
        {
            let mut frame = UiFrame::from_parts(area, &mut buf);
            TrafficLightDecorator.render_window(&mut frame, &chrome, "Notes", true);
        }
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "╭");
        assert_eq!(buf.cell((29, 7)).unwrap().symbol(), "╯");
        assert_eq!(buf.cell((2, 1)).unwrap().symbol(), "●");
        assert_eq!(buf.cell((2, 1)).unwrap().fg, crate::theme::close_button());
        assert_eq!(buf.cell((6, 1)).unwrap().fg, crate::theme::maximize_button());
        let row: String = (0..30)
            .map(|x| buf.cell((x, 1)).unwrap().symbol().to_string())
            .collect();
        assert!(row.contains("Notes"));
    }

    #[test]
    fn inactive_controls_are_muted() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        let chrome = local_chrome(30, 8, DesktopMetrics::cells(), true);
        {
            let mut frame = UiFrame::from_parts(area, &mut buf);
            TrafficLightDecorator.render_window(&mut frame, &chrome, "Notes", false);
        }
        assert_eq!(buf.cell((2, 1)).unwrap().fg, crate::theme::muted());
    }
}
