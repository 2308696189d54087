//! Pointer gestures: window drag, window resize and sidebar divider drag.
//!
//! Exactly one gesture can be in flight. It starts on a press, follows every
//! move in order, and only ends on release. While a window gesture runs each
//! move goes straight to a [`ViewSurface`] so the frontend can redraw without
//! waiting on the model; the [`GeometryModel`] is reconciled on release.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::layout::floating::{ResizeEdge, ResizeLimits, apply_drag, apply_resize};
use crate::layout::{DesktopMetrics, Viewport};
use crate::panel_split::{PanelKey, PanelWidths, dragged_width};
use crate::state::InteractionState;
use crate::window::{Geometry, GeometryModel, WindowId, WindowStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Move,
    Release,
    /// Wheel notches, negative scrolls up.
    Scroll(i8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: i32,
    pub y: i32,
}

impl PointerEvent {
    pub const fn new(kind: PointerKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    /// Translate a crossterm mouse event. Only the left button drives
    /// gestures; other buttons and bare hover moves are dropped.
    pub fn from_mouse(mouse: &MouseEvent) -> Option<Self> {
        let kind = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerKind::Press,
            MouseEventKind::Drag(MouseButton::Left) => PointerKind::Move,
            MouseEventKind::Up(MouseButton::Left) => PointerKind::Release,
            MouseEventKind::ScrollUp => PointerKind::Scroll(-1),
            MouseEventKind::ScrollDown => PointerKind::Scroll(1),
            _ => return None,
        };
        Some(Self::new(kind, mouse.column as i32, mouse.row as i32))
    }
}

/// Capability to reposition a visible window immediately, ahead of the
/// authoritative model.
pub trait ViewSurface {
    fn apply_geometry(&mut self, id: WindowId, geometry: Geometry);

    /// The model caught up with the view for `id`.
    fn settle(&mut self, _id: WindowId) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub id: WindowId,
    pub press: (i32, i32),
    pub origin: Geometry,
    pub last_applied: Geometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub id: WindowId,
    pub edge: ResizeEdge,
    pub press: (i32, i32),
    pub start: Geometry,
    pub last_applied: Geometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSession {
    pub key: PanelKey,
    pub press_x: i32,
    pub start_width: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Drag(DragSession),
    Resize(ResizeSession),
    Panel(PanelSession),
}

/// Everything a gesture may touch while it runs.
pub struct GestureTargets<'a> {
    pub geometry: &'a mut GeometryModel,
    pub panels: &'a mut PanelWidths,
    pub interaction: &'a mut InteractionState,
    pub surface: &'a mut dyn ViewSurface,
    pub viewport: Viewport,
    pub metrics: DesktopMetrics,
}

#[derive(Debug, Default)]
pub struct PointerEngine {
    gesture: Option<Gesture>,
}

impl PointerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.gesture.is_none()
    }

    pub fn begin_drag(
        &mut self,
        id: WindowId,
        press: (i32, i32),
        store: &mut WindowStore,
        geometry: &GeometryModel,
    ) -> bool {
        if !self.is_idle() {
            return false;
        }
        store.bring_to_front(id);
        let origin = geometry.get(id);
        tracing::debug!(window = %id, x = press.0, y = press.1, "drag started");
        self.gesture = Some(Gesture::Drag(DragSession {
            id,
            press,
            origin,
            last_applied: origin,
        }));
        true
    }

    pub fn begin_resize(
        &mut self,
        id: WindowId,
        edge: ResizeEdge,
        press: (i32, i32),
        store: &mut WindowStore,
        geometry: &GeometryModel,
    ) -> bool {
        if !self.is_idle() {
            return false;
        }
        store.bring_to_front(id);
        let start = geometry.get(id);
        tracing::debug!(window = %id, ?edge, "resize started");
        self.gesture = Some(Gesture::Resize(ResizeSession {
            id,
            edge,
            press,
            start,
            last_applied: start,
        }));
        true
    }

    pub fn begin_panel(
        &mut self,
        key: PanelKey,
        press_x: i32,
        panels: &PanelWidths,
        interaction: &mut InteractionState,
    ) -> bool {
        if !self.is_idle() {
            return false;
        }
        let Some(start_width) = panels.width(key) else {
            debug_assert!(false, "unknown panel {key}");
            return false;
        };
        interaction.begin_column_resize();
        tracing::debug!(panel = %key, start_width, "panel resize started");
        self.gesture = Some(Gesture::Panel(PanelSession {
            key,
            press_x,
            start_width,
        }));
        true
    }

    /// Apply one pointer move to the running gesture. Returns false when idle.
    pub fn pointer_move(&mut self, x: i32, y: i32, targets: &mut GestureTargets<'_>) -> bool {
        let Some(gesture) = self.gesture.as_mut() else {
            return false;
        };
        match gesture {
            Gesture::Drag(session) => {
                let (nx, ny) = apply_drag(
                    (session.origin.x, session.origin.y),
                    session.press,
                    (x, y),
                    session.origin.width,
                    targets.viewport,
                    &targets.metrics,
                );
                let moved = Geometry { x: nx, y: ny, ..session.origin };
                session.last_applied = moved;
                targets.surface.apply_geometry(session.id, moved);
                targets.geometry.set(session.id, moved);
                tracing::trace!(window = %session.id, x = nx, y = ny, "drag move");
            }
            Gesture::Resize(session) => {
                let resized = apply_resize(
                    session.start,
                    session.edge,
                    x - session.press.0,
                    y - session.press.1,
                    ResizeLimits::new(targets.viewport, &targets.metrics),
                );
                session.last_applied = resized;
                targets.surface.apply_geometry(session.id, resized);
                tracing::trace!(window = %session.id, ?resized, "resize move");
            }
            Gesture::Panel(session) => {
                if let Some(bounds) = targets.panels.bounds(session.key) {
                    let width = dragged_width(session.start_width, session.press_x, x, bounds);
                    targets.panels.set_width(session.key, width as i32);
                    tracing::trace!(panel = %session.key, width, "panel move");
                }
            }
        }
        true
    }

    /// End the running gesture. A release with nothing in flight is a no-op.
    pub fn release(&mut self, targets: &mut GestureTargets<'_>) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        match gesture {
            Gesture::Drag(DragSession {
                id, last_applied, ..
            })
            | Gesture::Resize(ResizeSession {
                id, last_applied, ..
            }) => {
                targets.geometry.set(id, last_applied);
                targets.surface.settle(id);
                tracing::debug!(window = %id, geometry = ?last_applied, "gesture committed");
            }
            Gesture::Panel(session) => {
                targets.interaction.end_column_resize();
                tracing::debug!(panel = %session.key, "panel resize finished");
            }
        }
        true
    }
}
