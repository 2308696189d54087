//! The desktop: window store, geometry, gestures, bars and skins wired
//! together behind one pointer entry point and one render entry point.

use std::collections::BTreeMap;

use crossterm::event::Event;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::chrome::{ChromeAction, apply_chrome_action};
use crate::constants::SCROLL_STEP;
use crate::content::{ContentProvider, Portfolio};
use crate::dock::{BarHit, DesktopBars};
use crate::interaction::{GestureTargets, PointerEngine, PointerEvent, PointerKind, ViewSurface};
use crate::layout::floating::{WindowChrome, WindowPart};
use crate::layout::{DesktopMetrics, LayoutTier, Viewport, initial_layout};
use crate::panel_split::{PanelBounds, PanelKey, PanelWidths};
use crate::skins::{SkinContext, SkinResponse, WindowSkin};
use crate::state::{CursorAffordance, InteractionState};
use crate::ui::UiFrame;
use crate::window::decorator::{TrafficLightDecorator, WindowDecorator, local_chrome};
use crate::window::{Geometry, GeometryModel, Lifecycle, WindowId, WindowStore};

/// Startup settings for a [`Desktop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopOptions {
    pub metrics: DesktopMetrics,
    pub panels: BTreeMap<PanelKey, PanelBounds>,
    /// Windows opened at startup, in order; the last one ends up active.
    pub startup: Vec<WindowId>,
}

impl DesktopOptions {
    pub fn cells() -> Self {
        Self {
            metrics: DesktopMetrics::cells(),
            panels: BTreeMap::from([(
                PanelKey::FINDER_SIDEBAR,
                PanelBounds {
                    default: 18,
                    min: 12,
                    max: 30,
                },
            )]),
            startup: vec![WindowId::About],
        }
    }

    pub fn pixels() -> Self {
        Self {
            metrics: DesktopMetrics::pixels(),
            panels: BTreeMap::from([(
                PanelKey::FINDER_SIDEBAR,
                PanelBounds {
                    default: 180,
                    min: 140,
                    max: 320,
                },
            )]),
            startup: vec![WindowId::About],
        }
    }
}

impl Default for DesktopOptions {
    fn default() -> Self {
        Self::cells()
    }
}

/// Geometry shown on screen ahead of the model while a gesture runs.
#[derive(Debug, Default)]
pub struct ViewProjection {
    overrides: BTreeMap<WindowId, Geometry>,
}

impl ViewProjection {
    pub fn get(&self, id: WindowId) -> Option<Geometry> {
        self.overrides.get(&id).copied()
    }

    pub fn clear(&mut self) {
        self.overrides.clear();
    }
}

impl ViewSurface for ViewProjection {
    fn apply_geometry(&mut self, id: WindowId, geometry: Geometry) {
        self.overrides.insert(id, geometry);
    }

    fn settle(&mut self, id: WindowId) {
        self.overrides.remove(&id);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFrame {
    Normal(Geometry),
    /// Covers the usable area. The stored geometry is left untouched.
    Maximized(Geometry),
}

impl WindowFrame {
    pub fn geometry(&self) -> Geometry {
        match *self {
            WindowFrame::Normal(g) | WindowFrame::Maximized(g) => g,
        }
    }
}

/// Everything a view layer needs to draw one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowView {
    pub id: WindowId,
    pub frame: WindowFrame,
    pub z_index: usize,
    pub active: bool,
    pub lifecycle: Lifecycle,
}

pub struct Desktop<P: ContentProvider = Portfolio> {
    store: WindowStore,
    geometry: GeometryModel,
    engine: PointerEngine,
    panels: PanelWidths,
    interaction: InteractionState,
    projection: ViewProjection,
    bars: DesktopBars,
    skins: BTreeMap<WindowId, WindowSkin>,
    decorator: Box<dyn WindowDecorator>,
    content: P,
    viewport: Viewport,
    metrics: DesktopMetrics,
    tier: LayoutTier,
    link_requests: Vec<&'static str>,
}

impl Desktop<Portfolio> {
    pub fn new(viewport: Viewport, options: DesktopOptions) -> Self {
        Self::with_content(viewport, options, Portfolio::new())
    }
}

impl<P: ContentProvider> Desktop<P> {
    pub fn with_content(viewport: Viewport, options: DesktopOptions, content: P) -> Self {
        let metrics = options.metrics;
        let (tier, rects) = initial_layout(viewport, &metrics);
        let mut panels = PanelWidths::new();
        for (key, bounds) in &options.panels {
            panels.register(*key, *bounds);
        }
        let mut store = WindowStore::new();
        for id in &options.startup {
            store.open(*id);
        }
        let mut bars = DesktopBars::new();
        bars.arrange(viewport, &metrics);
        tracing::info!(
            %tier,
            width = viewport.width,
            height = viewport.height,
            "desktop ready"
        );
        Self {
            store,
            geometry: GeometryModel::new(rects),
            engine: PointerEngine::new(),
            panels,
            interaction: InteractionState::new(),
            projection: ViewProjection::default(),
            bars,
            skins: WindowId::ALL
                .into_iter()
                .map(|id| (id, WindowSkin::for_window(id)))
                .collect(),
            decorator: Box::new(TrafficLightDecorator),
            content,
            viewport,
            metrics,
            tier,
            link_requests: Vec::new(),
        }
    }

    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    pub fn geometry(&self, id: WindowId) -> Geometry {
        self.geometry.get(id)
    }

    pub fn panel_width(&self, key: PanelKey) -> Option<u16> {
        self.panels.width(key)
    }

    /// Breakpoint tier of the current viewport width. Follows
    /// [`Desktop::set_viewport`] even though geometry does not.
    pub fn tier(&self) -> LayoutTier {
        self.tier
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn metrics(&self) -> &DesktopMetrics {
        &self.metrics
    }

    pub fn is_mobile(&self) -> bool {
        self.metrics.is_mobile(self.viewport)
    }

    pub fn gesture_active(&self) -> bool {
        !self.engine.is_idle()
    }

    pub fn apply(&mut self, action: ChromeAction) {
        apply_chrome_action(&mut self.store, action);
    }

    /// Track a new viewport. The tier and bars follow it; window geometry is
    /// kept and only an explicit [`Desktop::reset_layout`] recomputes it.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        let was_mobile = self.is_mobile();
        self.viewport = viewport;
        self.tier = LayoutTier::for_width(viewport.width, &self.metrics);
        self.bars.arrange(viewport, &self.metrics);
        let mobile = self.is_mobile();
        if mobile != was_mobile {
            tracing::info!(mobile, width = viewport.width, "switched rendering mode");
        }
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            tier = %self.tier,
            "viewport changed"
        );
    }

    pub fn reset_layout(&mut self) {
        let (tier, rects) = initial_layout(self.viewport, &self.metrics);
        self.tier = tier;
        self.geometry = GeometryModel::new(rects);
        self.projection.clear();
        tracing::info!(%tier, "layout reset");
    }

    fn displayed_geometry(&self, id: WindowId) -> Geometry {
        self.projection
            .get(id)
            .unwrap_or_else(|| self.geometry.get(id))
    }

    /// Visible windows back to front, with the frame each should be drawn in.
    pub fn render_plan(&self) -> Vec<WindowView> {
        let usable = self.metrics.usable_area(self.viewport);
        let view = |id: WindowId, frame: WindowFrame| WindowView {
            id,
            frame,
            z_index: self.store.z_index(id),
            active: self.store.active() == Some(id),
            lifecycle: self.store.lifecycle(id),
        };
        if self.is_mobile() {
            return self
                .store
                .active()
                .filter(|id| self.store.is_visible(*id))
                .map(|id| view(id, WindowFrame::Maximized(usable)))
                .into_iter()
                .collect();
        }
        self.store
            .visible_in_order()
            .into_iter()
            .map(|id| {
                let frame = if self.store.lifecycle(id).maximized {
                    WindowFrame::Maximized(usable)
                } else {
                    WindowFrame::Normal(self.displayed_geometry(id))
                };
                view(id, frame)
            })
            .collect()
    }

    fn chrome_for(&self, view: &WindowView) -> WindowChrome {
        match view.frame {
            WindowFrame::Normal(g) => WindowChrome::new(g, self.metrics),
            WindowFrame::Maximized(g) => WindowChrome::fixed(g, self.metrics),
        }
    }

    /// Topmost window under the point.
    pub fn window_at(&self, x: i32, y: i32) -> Option<WindowView> {
        self.render_plan()
            .into_iter()
            .rev()
            .find(|view| view.frame.geometry().contains(x, y))
    }

    /// URLs clicked since the last call, oldest first.
    pub fn take_link_requests(&mut self) -> Vec<&'static str> {
        std::mem::take(&mut self.link_requests)
    }

    pub fn take_interaction_change(&mut self) -> Option<(CursorAffordance, bool)> {
        self.interaction.take_change()
    }

    /// Route a terminal event. Returns true when the screen needs a redraw.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => PointerEvent::from_mouse(mouse)
                .map(|pointer| self.handle_pointer(pointer))
                .unwrap_or(false),
            Event::Resize(width, height) => {
                self.set_viewport(Viewport::new(*width, *height));
                true
            }
            _ => false,
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event.kind {
            PointerKind::Press => self.press(event.x, event.y),
            PointerKind::Move => {
                let mut targets = GestureTargets {
                    geometry: &mut self.geometry,
                    panels: &mut self.panels,
                    interaction: &mut self.interaction,
                    surface: &mut self.projection,
                    viewport: self.viewport,
                    metrics: self.metrics,
                };
                self.engine.pointer_move(event.x, event.y, &mut targets)
            }
            PointerKind::Release => {
                let mut targets = GestureTargets {
                    geometry: &mut self.geometry,
                    panels: &mut self.panels,
                    interaction: &mut self.interaction,
                    surface: &mut self.projection,
                    viewport: self.viewport,
                    metrics: self.metrics,
                };
                self.engine.release(&mut targets)
            }
            PointerKind::Scroll(notches) => {
                let Some(view) = self.window_at(event.x, event.y) else {
                    return false;
                };
                if let Some(skin) = self.skins.get_mut(&view.id) {
                    skin.as_skin_mut().scroll(notches as isize * SCROLL_STEP);
                }
                true
            }
        }
    }

    fn press(&mut self, x: i32, y: i32) -> bool {
        if self.gesture_active() {
            return false;
        }
        if let Some(hit) = self.bars.hit_test(x, y) {
            match hit {
                BarHit::ResetLayout => self.reset_layout(),
                BarHit::Dock(id) => self.apply(ChromeAction::DockIcon(id)),
            }
            return true;
        }
        if self.bars.contains(x, y) {
            return false;
        }
        let Some(view) = self.window_at(x, y) else {
            return false;
        };
        let chrome = self.chrome_for(&view);
        let Some(part) = chrome.part_at(x, y) else {
            return false;
        };
        let id = view.id;
        let floating = matches!(view.frame, WindowFrame::Normal(_)) && !self.is_mobile();
        match part {
            WindowPart::Resize(edge) if floating => {
                self.engine
                    .begin_resize(id, edge, (x, y), &mut self.store, &self.geometry);
            }
            WindowPart::TitleBar if floating => {
                self.engine
                    .begin_drag(id, (x, y), &mut self.store, &self.geometry);
            }
            WindowPart::Control(control) => {
                self.apply(ChromeAction::for_control(id, control));
            }
            WindowPart::Content => {
                self.apply(ChromeAction::TitleBar(id));
                self.press_content(view, &chrome, x, y);
            }
            WindowPart::Resize(_) | WindowPart::TitleBar => {
                self.apply(ChromeAction::TitleBar(id));
            }
        }
        true
    }

    fn press_content(&mut self, view: WindowView, chrome: &WindowChrome, x: i32, y: i32) {
        let content = chrome.content();
        if !content.contains(x, y) {
            return;
        }
        let origin = view.frame.geometry();
        let area = local_rect(content, origin);
        let local_x = (x - origin.x) as u16;
        let local_y = (y - origin.y) as u16;
        let Some(skin) = self.skins.get_mut(&view.id) else {
            return;
        };
        let ctx = SkinContext::new(view.active, &self.panels);
        let payload = self.content.content(view.id);
        match skin
            .as_skin_mut()
            .press(area, local_x, local_y, payload, &ctx)
        {
            SkinResponse::OpenLink(url) => {
                tracing::info!(url, "link requested");
                self.link_requests.push(url);
            }
            SkinResponse::BeginPanelResize(key) => {
                self.engine
                    .begin_panel(key, x, &self.panels, &mut self.interaction);
            }
            SkinResponse::Redraw | SkinResponse::Ignored => {}
        }
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        let usable = self.metrics.usable_area(self.viewport);
        frame.fill(
            usable.visible_in(frame.area()),
            Style::default().bg(crate::theme::desktop_bg()),
        );

        let resizing = self.interaction.cursor() == CursorAffordance::ColumnResize;
        for view in self.render_plan() {
            let dest = view.frame.geometry();
            if dest.width == 0 || dest.height == 0 {
                continue;
            }
            if dest.visible_in(frame.area()).is_empty() {
                continue;
            }
            let local = Rect::new(0, 0, dest.width, dest.height);
            let mut buffer = Buffer::empty(local);
            {
                let mut window_frame = UiFrame::from_parts(local, &mut buffer);
                window_frame.fill(local, crate::skins::base_style());
                let resizable = matches!(view.frame, WindowFrame::Normal(_));
                let chrome = local_chrome(dest.width, dest.height, self.metrics, resizable);
                self.decorator
                    .render_window(&mut window_frame, &chrome, view.id.title(), view.active);
                let area = local_rect(chrome.content(), Geometry::default());
                if let Some(skin) = self.skins.get_mut(&view.id) {
                    let ctx = SkinContext::new(view.active, &self.panels)
                        .with_panel_resizing(resizing);
                    skin.as_skin_mut().render(
                        &mut window_frame,
                        area,
                        self.content.content(view.id),
                        &ctx,
                    );
                }
            }
            frame.blit_from_signed(&buffer, dest);
        }

        let active_app = self.store.active().map(WindowId::app_name);
        self.bars.render_menu_bar(frame, active_app, resizing);
        self.bars.render_dock(frame, &self.store);
    }
}

/// `g` relative to `origin`, clipped at zero.
fn local_rect(g: Geometry, origin: Geometry) -> Rect {
    Rect::new(
        (g.x - origin.x).max(0) as u16,
        (g.y - origin.y).max(0) as u16,
        g.width,
        g.height,
    )
}
