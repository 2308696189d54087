use ratatui::layout::Rect;
use ratatui::style::Modifier;

use super::{
    ScrollState, Skin, SkinContext, SkinLine, SkinResponse, base_style, link_at, push_wrapped,
    render_lines,
};
use crate::content::{ContactCard, WindowContent};
use crate::ui::UiFrame;

const LABEL_WIDTH: usize = 10;

#[derive(Debug, Default)]
pub struct ContactsSkin {
    scroll: ScrollState,
}

fn card_lines(card: &ContactCard, width: usize) -> Vec<SkinLine> {
    let base = base_style();
    let mut lines = vec![
        SkinLine::new(
            "Get In Touch",
            base.fg(crate::theme::accent()).add_modifier(Modifier::BOLD),
        ),
        SkinLine::blank(),
    ];
    push_wrapped(&mut lines, card.invitation, width, base);
    lines.push(SkinLine::blank());
    for link in card.links {
        lines.push(SkinLine::linked(
            format!(
                "{:<width$}{}",
                link.label,
                link.display,
                width = LABEL_WIDTH
            ),
            base.fg(crate::theme::link()),
            link.url,
        ));
    }
    lines
}

fn body(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    }
}

impl Skin for ContactsSkin {
    fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        content: &WindowContent,
        _ctx: &SkinContext<'_>,
    ) {
        let WindowContent::Contacts(card) = content else {
            return;
        };
        let body = body(area);
        let lines = card_lines(card, body.width as usize);
        self.scroll.apply(lines.len(), body.height as usize);
        render_lines(frame, body, &lines, self.scroll.offset);
    }

    fn press(
        &mut self,
        area: Rect,
        _x: u16,
        y: u16,
        content: &WindowContent,
        _ctx: &SkinContext<'_>,
    ) -> SkinResponse {
        let WindowContent::Contacts(card) = content else {
            return SkinResponse::Ignored;
        };
        let body = body(area);
        let lines = card_lines(card, body.width as usize);
        // wheel input may still be queued if no frame was drawn since
        self.scroll.apply(lines.len(), body.height as usize);
        match link_at(body, y, &lines, self.scroll.offset) {
            Some(url) => SkinResponse::OpenLink(url),
            None => SkinResponse::Ignored,
        }
    }

    fn scroll(&mut self, delta: isize) {
        self.scroll.bump(delta);
    }
}
