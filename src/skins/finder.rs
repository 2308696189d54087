use ratatui::layout::Rect;
use ratatui::style::Modifier;

use super::{
    ScrollState, Skin, SkinContext, SkinLine, SkinResponse, base_style, link_at, push_wrapped,
    render_lines,
};
use crate::content::{Project, WindowContent};
use crate::panel_split::PanelKey;
use crate::ui::{UiFrame, truncate_to_width};

/// Sidebar width used before the panel is registered.
const FALLBACK_SIDEBAR: u16 = 18;

/// Project browser: a resizable sidebar of project names and a detail pane.
#[derive(Debug, Default)]
pub struct FinderSkin {
    selected: usize,
    scroll: ScrollState,
}

struct FinderLayout {
    sidebar: Rect,
    divider: u16,
    detail: Rect,
}

impl FinderLayout {
    fn new(area: Rect, ctx: &SkinContext<'_>) -> Self {
        let width = ctx
            .panels()
            .width(PanelKey::FINDER_SIDEBAR)
            .unwrap_or(FALLBACK_SIDEBAR)
            .min(area.width.saturating_sub(1));
        let divider = area.x + width;
        let detail_x = divider.saturating_add(2);
        Self {
            sidebar: Rect { width, ..area },
            divider,
            detail: Rect {
                x: detail_x,
                width: (area.x + area.width).saturating_sub(detail_x + 1),
                ..area
            },
        }
    }
}

impl FinderSkin {
    pub fn selected(&self) -> usize {
        self.selected
    }
}

fn detail_lines(project: &Project, width: usize) -> Vec<SkinLine> {
    let base = base_style();
    let mut lines = vec![
        SkinLine::new(project.title, base.add_modifier(Modifier::BOLD)),
        SkinLine::blank(),
    ];
    push_wrapped(&mut lines, project.description, width, base);
    lines.push(SkinLine::blank());
    lines.push(SkinLine::new(
        format!("Tech: {}", project.tech.join(" · ")),
        base.fg(crate::theme::accent()),
    ));
    lines.push(SkinLine::blank());
    let link = truncate_to_width(&format!("↗ {}", project.github), width);
    lines.push(SkinLine::linked(
        link,
        base.fg(crate::theme::link())
            .add_modifier(Modifier::UNDERLINED),
        project.github,
    ));
    lines
}

impl Skin for FinderSkin {
    fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        content: &WindowContent,
        ctx: &SkinContext<'_>,
    ) {
        let WindowContent::Finder(projects) = content else {
            return;
        };
        let layout = FinderLayout::new(area, ctx);
        let base = base_style();
        let sidebar = layout.sidebar;

        frame.set_string(
            sidebar.x + 1,
            sidebar.y,
            "Projects",
            base.fg(crate::theme::muted()),
        );
        for (idx, project) in projects.iter().enumerate() {
            let y = sidebar.y + 1 + idx as u16;
            if y >= sidebar.y + sidebar.height {
                break;
            }
            let style = if idx == self.selected {
                base.bg(crate::theme::selection_bg())
            } else {
                base
            };
            frame.fill(Rect::new(sidebar.x, y, sidebar.width, 1), style);
            let label = truncate_to_width(
                &format!("▸ {}", project.title),
                sidebar.width.saturating_sub(1) as usize,
            );
            frame.set_string(sidebar.x + 1, y, &label, style);
        }

        let divider_style = if ctx.panel_resizing() {
            base.fg(crate::theme::divider_active())
        } else {
            base.fg(crate::theme::divider())
        };
        for y in area.y..area.y + area.height {
            frame.set_string(layout.divider, y, "┃", divider_style);
        }

        let Some(project) = projects.get(self.selected) else {
            return;
        };
        let lines = detail_lines(project, layout.detail.width as usize);
        self.scroll.apply(lines.len(), layout.detail.height as usize);
        render_lines(frame, layout.detail, &lines, self.scroll.offset);
    }

    fn press(
        &mut self,
        area: Rect,
        x: u16,
        y: u16,
        content: &WindowContent,
        ctx: &SkinContext<'_>,
    ) -> SkinResponse {
        let WindowContent::Finder(projects) = content else {
            return SkinResponse::Ignored;
        };
        let layout = FinderLayout::new(area, ctx);
        if x == layout.divider {
            return SkinResponse::BeginPanelResize(PanelKey::FINDER_SIDEBAR);
        }
        if x < layout.divider {
            let Some(row) = y.checked_sub(layout.sidebar.y + 1) else {
                return SkinResponse::Ignored;
            };
            let idx = row as usize;
            if idx >= projects.len() || idx == self.selected {
                return SkinResponse::Ignored;
            }
            self.selected = idx;
            self.scroll.reset();
            tracing::debug!(project = projects[idx].title, "selected project");
            return SkinResponse::Redraw;
        }
        if x < layout.detail.x {
            return SkinResponse::Ignored;
        }
        let Some(project) = projects.get(self.selected) else {
            return SkinResponse::Ignored;
        };
        let lines = detail_lines(project, layout.detail.width as usize);
        self.scroll.apply(lines.len(), layout.detail.height as usize);
        match link_at(layout.detail, y, &lines, self.scroll.offset) {
            Some(url) => SkinResponse::OpenLink(url),
            None => SkinResponse::Ignored,
        }
    }

    fn scroll(&mut self, delta: isize) {
        self.scroll.bump(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentProvider, Portfolio};
    use crate::panel_split::{PanelBounds, PanelWidths};
    use crate::skins::test_support::row_text;
    use crate::window::WindowId;
    use ratatui::buffer::Buffer;

    fn panels(width: u16) -> PanelWidths {
        let mut panels = PanelWidths::new();
        panels.register(
            PanelKey::FINDER_SIDEBAR,
            PanelBounds {
                default: width,
                min: 12,
                max: 30,
            },
        );
        panels
    }

    #[test]
    fn divider_follows_panel_width() {
        let portfolio = Portfolio::new();
        let content = portfolio.content(WindowId::Projects);
        let area = Rect::new(1, 2, 70, 16);
        let mut skin = FinderSkin::default();
        for width in [12, 20] {
            let panels = panels(width);
            let ctx = SkinContext::new(true, &panels);
            assert_eq!(
                skin.press(area, 1 + width, 5, content, &ctx),
                SkinResponse::BeginPanelResize(PanelKey::FINDER_SIDEBAR)
            );
            let mut buf = Buffer::empty(Rect::new(0, 0, 72, 20));
            {
                let mut frame = UiFrame::from_parts(buf.area, &mut buf);
                skin.render(&mut frame, area, content, &ctx);
            }
            assert_eq!(buf.cell((1 + width, 4)).unwrap().symbol(), "┃");
        }
    }

    #[test]
    fn selecting_a_project_and_opening_its_link() {
        let portfolio = Portfolio::new();
        let content = portfolio.content(WindowId::Projects);
        let panels = panels(18);
        let ctx = SkinContext::new(true, &panels);
        let area = Rect::new(0, 0, 70, 16);
        let mut skin = FinderSkin::default();

        assert_eq!(skin.press(area, 3, 3, content, &ctx), SkinResponse::Redraw);
        assert_eq!(skin.selected(), 2);

        let mut buf = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buf);
            skin.render(&mut frame, area, content, &ctx);
        }
        let link_row = (0..area.height)
            .find(|y| row_text(&buf, *y).contains("github.com/tungcodeforfun/TungBot"))
            .unwrap();
        assert_eq!(
            skin.press(area, 30, link_row, content, &ctx),
            SkinResponse::OpenLink("https://github.com/tungcodeforfun/TungBot")
        );
        assert_eq!(
            skin.press(area, 30, 0, content, &ctx),
            SkinResponse::Ignored
        );
    }

    #[test]
    fn queued_scroll_is_applied_before_link_lookup() {
        let portfolio = Portfolio::new();
        let content = portfolio.content(WindowId::Projects);
        let panels = panels(18);
        let ctx = SkinContext::new(true, &panels);
        let area = Rect::new(0, 0, 70, 3);
        let mut skin = FinderSkin::default();
        assert_eq!(
            skin.press(area, 30, 2, content, &ctx),
            SkinResponse::Ignored
        );

        skin.scroll(100);
        let WindowContent::Finder(projects) = content else {
            panic!("projects window carries a list");
        };
        assert_eq!(
            skin.press(area, 30, 2, content, &ctx),
            SkinResponse::OpenLink(projects[0].github)
        );
    }
}
