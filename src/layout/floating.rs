use super::{DesktopMetrics, Viewport};
use crate::window::Geometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::TopLeft,
        ResizeEdge::TopRight,
        ResizeEdge::BottomLeft,
        ResizeEdge::BottomRight,
        ResizeEdge::Top,
        ResizeEdge::Bottom,
        ResizeEdge::Left,
        ResizeEdge::Right,
    ];

    pub fn moves_left(self) -> bool {
        matches!(
            self,
            ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft
        )
    }

    pub fn moves_right(self) -> bool {
        matches!(
            self,
            ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight
        )
    }

    pub fn moves_top(self) -> bool {
        matches!(
            self,
            ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight
        )
    }

    pub fn moves_bottom(self) -> bool {
        matches!(
            self,
            ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
        )
    }
}

/// Traffic-light buttons in a window's title bar, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeControl {
    Close,
    Minimize,
    Maximize,
}

impl ChromeControl {
    pub const ALL: [ChromeControl; 3] = [
        ChromeControl::Close,
        ChromeControl::Minimize,
        ChromeControl::Maximize,
    ];
}

/// Which part of a window a point landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPart {
    Resize(ResizeEdge),
    Control(ChromeControl),
    TitleBar,
    Content,
}

/// Sub-regions of one window frame, derived from its geometry.
#[derive(Debug, Clone, Copy)]
pub struct WindowChrome {
    rect: Geometry,
    metrics: DesktopMetrics,
    resizable: bool,
}

impl WindowChrome {
    pub fn new(rect: Geometry, metrics: DesktopMetrics) -> Self {
        Self {
            rect,
            metrics,
            resizable: true,
        }
    }

    /// Chrome without resize handles, used for maximized and mobile windows.
    pub fn fixed(rect: Geometry, metrics: DesktopMetrics) -> Self {
        Self {
            rect,
            metrics,
            resizable: false,
        }
    }

    pub fn rect(&self) -> Geometry {
        self.rect
    }

    fn inset(&self) -> i32 {
        self.metrics.handle as i32
    }

    fn inner_width(&self) -> u16 {
        self.rect.width.saturating_sub(self.metrics.handle.saturating_mul(2))
    }

    pub fn title_bar(&self) -> Geometry {
        let height = self
            .metrics
            .title_bar_height
            .min(self.rect.height.saturating_sub(self.metrics.handle));
        Geometry::new(
            self.rect.x + self.inset(),
            self.rect.y + self.inset(),
            self.inner_width(),
            height,
        )
    }

    pub fn control(&self, control: ChromeControl) -> Geometry {
        let title = self.title_bar();
        let idx = ChromeControl::ALL
            .iter()
            .position(|c| *c == control)
            .unwrap_or(0) as i32;
        let size = self.metrics.control_size.min(title.height);
        let x = self.rect.x
            + self.metrics.control_offset as i32
            + idx * self.metrics.control_spacing as i32;
        let y = title.y + (title.height.saturating_sub(size) / 2) as i32;
        let geometry = Geometry::new(x, y, size, size);
        if geometry.right() > title.right() {
            return Geometry::new(x, y, 0, 0);
        }
        geometry
    }

    pub fn content(&self) -> Geometry {
        let chrome_h = self
            .metrics
            .handle
            .saturating_mul(2)
            .saturating_add(self.metrics.title_bar_height);
        Geometry::new(
            self.rect.x + self.inset(),
            self.rect.y + self.inset() + self.metrics.title_bar_height as i32,
            self.inner_width(),
            self.rect.height.saturating_sub(chrome_h),
        )
    }

    pub fn handle(&self, edge: ResizeEdge) -> Geometry {
        let r = self.rect;
        let t = self.metrics.handle.min(r.width / 2).min(r.height / 2);
        let ti = t as i32;
        let right = r.right() - ti;
        let bottom = r.bottom() - ti;
        let span_w = r.width.saturating_sub(t.saturating_mul(2));
        let span_h = r.height.saturating_sub(t.saturating_mul(2));
        match edge {
            ResizeEdge::TopLeft => Geometry::new(r.x, r.y, t, t),
            ResizeEdge::TopRight => Geometry::new(right, r.y, t, t),
            ResizeEdge::BottomLeft => Geometry::new(r.x, bottom, t, t),
            ResizeEdge::BottomRight => Geometry::new(right, bottom, t, t),
            ResizeEdge::Top => Geometry::new(r.x + ti, r.y, span_w, t),
            ResizeEdge::Bottom => Geometry::new(r.x + ti, bottom, span_w, t),
            ResizeEdge::Left => Geometry::new(r.x, r.y + ti, t, span_h),
            ResizeEdge::Right => Geometry::new(right, r.y + ti, t, span_h),
        }
    }

    /// Resolve a point to a window part. Handles win over controls, controls
    /// over the title bar; everything else inside the frame is content.
    pub fn part_at(&self, x: i32, y: i32) -> Option<WindowPart> {
        if !self.rect.contains(x, y) {
            return None;
        }
        if self.resizable
            && let Some(edge) = ResizeEdge::ALL
                .into_iter()
                .find(|edge| self.handle(*edge).contains(x, y))
        {
            return Some(WindowPart::Resize(edge));
        }
        if let Some(control) = ChromeControl::ALL
            .into_iter()
            .find(|c| self.control(*c).contains(x, y))
        {
            return Some(WindowPart::Control(control));
        }
        if self.title_bar().contains(x, y) {
            return Some(WindowPart::TitleBar);
        }
        Some(WindowPart::Content)
    }
}

/// Bounds a resize must respect besides the minimum size.
#[derive(Debug, Clone, Copy)]
pub struct ResizeLimits {
    pub min_width: u16,
    pub min_height: u16,
    /// Topmost row a window may occupy (bottom of the menu bar).
    pub top: i32,
    /// First row a window may not occupy (top of the dock).
    pub bottom: i32,
}

impl ResizeLimits {
    pub fn new(viewport: Viewport, metrics: &DesktopMetrics) -> Self {
        Self {
            min_width: metrics.min_width.max(1),
            min_height: metrics.min_height.max(1),
            top: metrics.menu_bar_height as i32,
            bottom: metrics.dock_top(viewport),
        }
    }
}

/// Resize `start` by pointer delta (`dx`, `dy`) grabbed at `edge`.
///
/// Right/bottom edges grow by the raw delta. Left/top edges move the origin
/// so the opposite edge stays where it was, including when the minimum size
/// kicks in.
pub fn apply_resize(
    start: Geometry,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    limits: ResizeLimits,
) -> Geometry {
    let min_w = limits.min_width as i32;
    let min_h = limits.min_height as i32;
    let max_dim = u16::MAX as i32;
    let mut x = start.x;
    let mut y = start.y;
    let mut width = start.width as i32;
    let mut height = start.height as i32;

    if edge.moves_left() {
        width = (width - dx).clamp(min_w, max_dim);
        x = start.right() - width;
    } else if edge.moves_right() {
        width = (width + dx).clamp(min_w, max_dim);
    }

    if edge.moves_top() {
        height = (height - dy).clamp(min_h, max_dim);
        y = start.bottom() - height;
        if y < limits.top {
            height = (start.bottom() - limits.top).max(min_h);
            y = start.bottom() - height;
        }
    } else if edge.moves_bottom() {
        height = (height + dy).clamp(min_h, max_dim);
        if y + height > limits.bottom {
            height = (limits.bottom - y).max(min_h);
        }
    }

    Geometry::new(x, y, width as u16, height as u16)
}

/// New origin for a window dragged from `origin` by the pointer moving from
/// `press` to `pointer`, kept out of the menu-bar and dock bands and at least
/// partially on screen horizontally.
pub fn apply_drag(
    origin: (i32, i32),
    press: (i32, i32),
    pointer: (i32, i32),
    width: u16,
    viewport: Viewport,
    metrics: &DesktopMetrics,
) -> (i32, i32) {
    let x = origin.0 + (pointer.0 - press.0);
    let y = origin.1 + (pointer.1 - press.1);
    let margin = metrics.offscreen_margin.min(width) as i32;
    let min_x = margin - width as i32;
    let max_x = (viewport.width as i32 - margin).max(min_x);
    let min_y = metrics.menu_bar_height as i32;
    let max_y = (metrics.dock_top(viewport)
        - metrics.title_bar_height as i32
        - metrics.handle as i32)
        .max(min_y);
    (x.clamp(min_x, max_x), y.clamp(min_y, max_y))
}
