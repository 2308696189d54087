use ratatui::layout::Rect;
use ratatui::style::Modifier;

use super::{
    ScrollState, Skin, SkinContext, SkinLine, SkinResponse, base_style, push_wrapped,
    render_lines,
};
use crate::content::{Job, WindowContent};
use crate::ui::{UiFrame, truncate_to_width};

const LIST_WIDTH: u16 = 24;
const ROWS_PER_JOB: u16 = 2;

/// Conversation list on the left, highlight bubbles for the selected job on
/// the right.
#[derive(Debug, Default)]
pub struct MessagesSkin {
    selected: usize,
    scroll: ScrollState,
}

impl MessagesSkin {
    pub fn selected(&self) -> usize {
        self.selected
    }
}

fn split(area: Rect) -> (Rect, u16, Rect) {
    let list_w = LIST_WIDTH.min(area.width / 2);
    let divider = area.x + list_w;
    let detail_x = divider.saturating_add(2);
    let detail = Rect {
        x: detail_x,
        width: (area.x + area.width).saturating_sub(detail_x + 1),
        ..area
    };
    (Rect { width: list_w, ..area }, divider, detail)
}

fn thread_lines(job: &Job, width: usize) -> Vec<SkinLine> {
    let base = base_style();
    let bubble = base.bg(crate::theme::bubble_bg());
    let mut lines = vec![
        SkinLine::new(job.title, base.add_modifier(Modifier::BOLD)),
        SkinLine::new(
            format!("{} · {}", job.company, job.location),
            base.fg(crate::theme::muted()),
        ),
        SkinLine::blank(),
    ];
    for highlight in job.highlights {
        let start = lines.len();
        push_wrapped(&mut lines, highlight, width.saturating_sub(2), bubble);
        for line in &mut lines[start..] {
            line.text.insert(0, ' ');
        }
        lines.push(SkinLine::blank());
    }
    lines
}

impl Skin for MessagesSkin {
    fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        content: &WindowContent,
        _ctx: &SkinContext<'_>,
    ) {
        let WindowContent::Messages(jobs) = content else {
            return;
        };
        let (list, divider, detail) = split(area);
        let base = base_style();

        for (idx, job) in jobs.iter().enumerate() {
            let y = list.y + idx as u16 * ROWS_PER_JOB;
            if y + 1 >= list.y + list.height {
                break;
            }
            let style = if idx == self.selected {
                base.bg(crate::theme::selection_bg())
            } else {
                base
            };
            frame.fill(Rect::new(list.x, y, list.width, ROWS_PER_JOB), style);
            let title = truncate_to_width(job.title, list.width.saturating_sub(1) as usize);
            frame.set_string(list.x + 1, y, &title, style.add_modifier(Modifier::BOLD));
            frame.set_string(
                list.x + 1,
                y + 1,
                job.period,
                style.fg(crate::theme::muted()),
            );
        }

        let divider_style = base.fg(crate::theme::divider());
        for y in area.y..area.y + area.height {
            frame.set_string(divider, y, "│", divider_style);
        }

        let Some(job) = jobs.get(self.selected) else {
            return;
        };
        let lines = thread_lines(job, detail.width as usize);
        self.scroll.apply(lines.len(), detail.height as usize);
        render_lines(frame, detail, &lines, self.scroll.offset);
    }

    fn press(
        &mut self,
        area: Rect,
        x: u16,
        y: u16,
        content: &WindowContent,
        _ctx: &SkinContext<'_>,
    ) -> SkinResponse {
        let WindowContent::Messages(jobs) = content else {
            return SkinResponse::Ignored;
        };
        let (list, _, _) = split(area);
        if x < list.x || x >= list.x + list.width || y < list.y {
            return SkinResponse::Ignored;
        }
        let idx = ((y - list.y) / ROWS_PER_JOB) as usize;
        if idx >= jobs.len() || idx == self.selected {
            return SkinResponse::Ignored;
        }
        self.selected = idx;
        self.scroll.reset();
        tracing::debug!(job = idx, "selected conversation");
        SkinResponse::Redraw
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
    use crate::skins::test_support::screen_text;
    use crate::window::WindowId;
    use ratatui::buffer::Buffer;

    #[test]
    fn clicking_second_conversation_selects_it() {
        let portfolio = Portfolio::new();
        let content = portfolio.content(WindowId::Experience);
        let panels = PanelWidths::new();
        let ctx = SkinContext::new(true, &panels);
        let area = Rect::new(0, 0, 80, 24);
        let mut skin = MessagesSkin::default();

        assert_eq!(skin.press(area, 3, 2, content, &ctx), SkinResponse::Redraw);
        assert_eq!(skin.selected(), 1);
        assert_eq!(skin.press(area, 3, 3, content, &ctx), SkinResponse::Ignored);
        assert_eq!(skin.press(area, 3, 9, content, &ctx), SkinResponse::Ignored);
        assert_eq!(skin.press(area, 60, 0, content, &ctx), SkinResponse::Ignored);

        let mut buf = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buf);
            skin.render(&mut frame, area, content, &ctx);
        }
        let text = screen_text(&buf, area);
        assert!(text.contains("Mentored junior"));
        assert!(!text.contains("Redis caching"));
    }
}
