use ratatui::layout::Rect;
use ratatui::style::Modifier;

use super::{ScrollState, Skin, SkinContext, SkinLine, base_style, push_wrapped, render_lines};
use crate::content::{Profile, WindowContent};
use crate::ui::UiFrame;

/// A single scrolling note holding the profile.
#[derive(Debug, Default)]
pub struct NotesSkin {
    scroll: ScrollState,
}

impl NotesSkin {
    pub fn offset(&self) -> usize {
        self.scroll.offset
    }
}

fn profile_lines(profile: &Profile, width: usize) -> Vec<SkinLine> {
    let base = base_style();
    let heading = base.fg(crate::theme::accent()).add_modifier(Modifier::BOLD);
    let muted = base.fg(crate::theme::muted());
    let mut lines = vec![
        SkinLine::new(profile.name, heading),
        SkinLine::new(profile.headline, base.add_modifier(Modifier::BOLD)),
        SkinLine::new(profile.location, muted),
        SkinLine::blank(),
    ];
    push_wrapped(&mut lines, profile.summary, width, base);
    for paragraph in profile.paragraphs {
        lines.push(SkinLine::blank());
        push_wrapped(&mut lines, paragraph, width, base);
    }

    lines.push(SkinLine::blank());
    lines.push(SkinLine::new("Education", heading));
    lines.push(SkinLine::new(profile.education.school, base));
    lines.push(SkinLine::new(profile.education.degree, base));
    push_wrapped(&mut lines, profile.education.honors, width, muted);

    lines.push(SkinLine::blank());
    lines.push(SkinLine::new("Technical Skills", heading));
    for group in profile.skills {
        let row = format!("{}: {}", group.label, group.items.join(", "));
        push_wrapped(&mut lines, &row, width, base);
    }
    lines
}

impl Skin for NotesSkin {
    fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        content: &WindowContent,
        _ctx: &SkinContext<'_>,
    ) {
        let WindowContent::Notes(profile) = content else {
            return;
        };
        let body = Rect {
            x: area.x.saturating_add(1),
            width: area.width.saturating_sub(2),
            ..area
        };
        let lines = profile_lines(profile, body.width as usize);
        self.scroll.apply(lines.len(), body.height as usize);
        render_lines(frame, body, &lines, self.scroll.offset);
    }

    fn scroll(&mut self, delta: isize) {
        self.scroll.bump(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentProvider, Portfolio};
    use crate::panel_split::PanelWidths;
    use crate::skins::test_support::{row_text, screen_text};
    use crate::window::WindowId;
    use ratatui::buffer::Buffer;

    fn draw(skin: &mut NotesSkin, area: Rect) -> Buffer {
        let portfolio = Portfolio::new();
        let panels = PanelWidths::new();
        let mut buf = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buf);
            skin.render(
                &mut frame,
                area,
                portfolio.content(WindowId::About),
                &SkinContext::new(true, &panels),
            );
        }
        buf
    }

    #[test]
    fn shows_name_first_and_wraps_to_width() {
        let mut skin = NotesSkin::default();
        let area = Rect::new(0, 0, 30, 40);
        let buf = draw(&mut skin, area);
        assert!(row_text(&buf, 0).contains("Tung Nguyen"));
        assert!(screen_text(&buf, area).contains("Education"));
        // the border column stays empty
        assert_eq!(buf.cell((29, 5)).unwrap().symbol(), " ");
    }

    #[test]
    fn wheel_scrolls_and_stops_at_top() {
        let mut skin = NotesSkin::default();
        let area = Rect::new(0, 0, 30, 10);
        skin.scroll(3);
        let buf = draw(&mut skin, area);
        assert_eq!(skin.offset(), 3);
        assert!(!row_text(&buf, 0).contains("Tung Nguyen"));
        skin.scroll(-10);
        draw(&mut skin, area);
        assert_eq!(skin.offset(), 0);
    }
}
