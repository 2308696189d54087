use std::collections::BTreeMap;

use term_folio::chrome::ChromeAction;
use term_folio::desktop::{Desktop, DesktopOptions, ViewProjection, WindowFrame};
use term_folio::interaction::{GestureTargets, PointerEngine, PointerEvent, PointerKind};
use term_folio::layout::floating::{ResizeEdge, ResizeLimits, apply_resize};
use term_folio::layout::{DesktopMetrics, LayoutTier, Viewport};
use term_folio::panel_split::{PanelBounds, PanelKey, PanelWidths};
use term_folio::state::{CursorAffordance, InteractionState};
use term_folio::window::{Geometry, GeometryModel, WindowId, WindowStore};

fn pixel_desktop(width: u16, height: u16) -> Desktop {
    let mut options = DesktopOptions::pixels();
    options.startup = WindowId::ALL.to_vec();
    Desktop::new(Viewport::new(width, height), options)
}

fn pointer(desktop: &mut Desktop, kind: PointerKind, x: i32, y: i32) -> bool {
    desktop.handle_pointer(PointerEvent::new(kind, x, y))
}

#[test]
fn wide_viewport_spreads_four_distinct_windows() {
    let desktop = pixel_desktop(1400, 900);
    assert_eq!(desktop.tier(), LayoutTier::Wide);

    let rects: Vec<Geometry> = WindowId::ALL
        .into_iter()
        .map(|id| desktop.geometry(id))
        .collect();
    for (i, a) in rects.iter().enumerate() {
        assert!(a.x >= 0 && a.right() <= 1400, "{a:?} leaves the viewport");
        assert!(a.y >= 28 && a.bottom() <= 820, "{a:?} overlaps the bars");
        for b in &rects[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(
        desktop.geometry(WindowId::About),
        Geometry::new(42, 43, 560, 475)
    );
    assert_eq!(
        desktop.geometry(WindowId::Contact),
        Geometry::new(714, 345, 560, 475)
    );
}

#[test]
fn title_bar_drag_moves_window_by_pointer_delta() {
    let mut store = WindowStore::new();
    for id in WindowId::ALL {
        store.open(id);
    }
    let mut geometry = GeometryModel::new(
        WindowId::ALL
            .into_iter()
            .map(|id| (id, Geometry::new(60, 50, 500, 400)))
            .collect::<BTreeMap<_, _>>(),
    );
    let mut panels = PanelWidths::new();
    let mut interaction = InteractionState::new();
    let mut projection = ViewProjection::default();
    let mut engine = PointerEngine::new();

    assert!(engine.begin_drag(WindowId::About, (100, 100), &mut store, &geometry));
    let mut targets = GestureTargets {
        geometry: &mut geometry,
        panels: &mut panels,
        interaction: &mut interaction,
        surface: &mut projection,
        viewport: Viewport::new(1400, 900),
        metrics: DesktopMetrics::pixels(),
    };
    engine.pointer_move(150, 130, &mut targets);
    engine.release(&mut targets);

    assert_eq!(
        geometry.get(WindowId::About),
        Geometry::new(110, 80, 500, 400)
    );
    assert_eq!(store.z_order().last(), Some(&WindowId::About));
    assert_eq!(store.active(), Some(WindowId::About));
    assert!(projection.get(WindowId::About).is_none());
}

#[test]
fn desktop_drag_follows_pointer_and_raises() {
    let mut desktop = pixel_desktop(1400, 900);
    assert_eq!(desktop.store().active(), Some(WindowId::Contact));

    assert!(pointer(&mut desktop, PointerKind::Press, 300, 60));
    assert_eq!(desktop.store().active(), Some(WindowId::About));
    pointer(&mut desktop, PointerKind::Move, 350, 90);
    assert_eq!(
        desktop.geometry(WindowId::About),
        Geometry::new(92, 73, 560, 475)
    );
    pointer(&mut desktop, PointerKind::Release, 350, 90);
    assert!(!desktop.gesture_active());
    assert_eq!(desktop.store().z_order().last(), Some(&WindowId::About));
}

#[test]
fn narrow_viewport_shows_only_the_active_window_and_freezes_geometry() {
    let mut desktop = pixel_desktop(1400, 900);
    let before: Vec<Geometry> = WindowId::ALL
        .into_iter()
        .map(|id| desktop.geometry(id))
        .collect();

    desktop.set_viewport(Viewport::new(600, 900));
    assert!(desktop.is_mobile());
    let plan = desktop.render_plan();
    assert_eq!(plan.len(), 1);
    assert_eq!(Some(plan[0].id), desktop.store().active());
    assert_eq!(
        plan[0].frame,
        WindowFrame::Maximized(Geometry::new(0, 28, 600, 792))
    );

    // title bar, then the outer edge where a resize handle would be
    for (x, y) in [(300, 40), (2, 400), (598, 810)] {
        pointer(&mut desktop, PointerKind::Press, x, y);
        assert!(!desktop.gesture_active());
        pointer(&mut desktop, PointerKind::Move, x + 120, y - 10);
        pointer(&mut desktop, PointerKind::Release, x + 120, y - 10);
    }
    let after: Vec<Geometry> = WindowId::ALL
        .into_iter()
        .map(|id| desktop.geometry(id))
        .collect();
    assert_eq!(before, after);

    desktop.set_viewport(Viewport::new(1400, 900));
    assert_eq!(desktop.render_plan().len(), 4);
}

#[test]
fn drag_in_flight_finishes_after_switch_to_mobile() {
    let mut desktop = pixel_desktop(1400, 900);
    assert!(pointer(&mut desktop, PointerKind::Press, 300, 60));
    assert!(desktop.gesture_active());

    desktop.set_viewport(Viewport::new(600, 900));
    assert!(desktop.is_mobile());
    assert!(desktop.gesture_active());

    // the running drag keeps its press-time delta
    pointer(&mut desktop, PointerKind::Move, 360, 90);
    pointer(&mut desktop, PointerKind::Release, 360, 90);
    assert!(!desktop.gesture_active());
    let dragged = Geometry::new(102, 73, 560, 475);
    assert_eq!(desktop.geometry(WindowId::About), dragged);

    // a fresh press in mobile mode starts nothing
    pointer(&mut desktop, PointerKind::Press, 300, 40);
    assert!(!desktop.gesture_active());
    pointer(&mut desktop, PointerKind::Move, 420, 30);
    pointer(&mut desktop, PointerKind::Release, 420, 30);
    assert_eq!(desktop.geometry(WindowId::About), dragged);
}

#[test]
fn tier_follows_viewport_while_geometry_stays() {
    let mut desktop = pixel_desktop(1400, 900);
    let before: Vec<Geometry> = WindowId::ALL
        .into_iter()
        .map(|id| desktop.geometry(id))
        .collect();

    for (width, tier) in [
        (1100, LayoutTier::Medium),
        (800, LayoutTier::Narrow),
        (600, LayoutTier::Mobile),
        (1400, LayoutTier::Wide),
    ] {
        desktop.set_viewport(Viewport::new(width, 900));
        assert_eq!(desktop.tier(), tier, "width {width}");
    }
    let after: Vec<Geometry> = WindowId::ALL
        .into_iter()
        .map(|id| desktop.geometry(id))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn chrome_lifecycle_properties() {
    let mut desktop = pixel_desktop(1400, 900);

    desktop.apply(ChromeAction::ToggleMaximize(WindowId::Projects));
    desktop.apply(ChromeAction::Minimize(WindowId::Projects));
    assert!(desktop.store().lifecycle(WindowId::Projects).maximized);
    assert!(
        desktop
            .render_plan()
            .iter()
            .all(|view| view.id != WindowId::Projects)
    );

    desktop.apply(ChromeAction::DockIcon(WindowId::Projects));
    let restored = desktop
        .render_plan()
        .into_iter()
        .find(|view| view.id == WindowId::Projects)
        .unwrap();
    assert!(matches!(restored.frame, WindowFrame::Maximized(_)));
    assert!(restored.active);

    desktop.apply(ChromeAction::Close(WindowId::Projects));
    assert!(desktop.store().z_order().contains(&WindowId::Projects));
    assert_ne!(desktop.store().active(), Some(WindowId::Projects));

    desktop.apply(ChromeAction::DockIcon(WindowId::Projects));
    let lifecycle = desktop.store().lifecycle(WindowId::Projects);
    assert!(lifecycle.open && !lifecycle.minimized && !lifecycle.maximized);
}

#[test]
fn horizontal_resize_formulas_and_round_trip() {
    let limits = ResizeLimits::new(Viewport::new(1400, 900), &DesktopMetrics::pixels());
    let start = Geometry::new(200, 100, 500, 400);

    let east = apply_resize(start, ResizeEdge::Right, 40, 0, limits);
    assert_eq!(east, Geometry::new(200, 100, 540, 400));
    assert_eq!(apply_resize(east, ResizeEdge::Right, -40, 0, limits), start);

    let west = apply_resize(start, ResizeEdge::Left, 40, 0, limits);
    assert_eq!(west, Geometry::new(240, 100, 460, 400));
    assert_eq!(west.right(), start.right());
    assert_eq!(apply_resize(west, ResizeEdge::Left, -40, 0, limits), start);

    let floor = apply_resize(start, ResizeEdge::Left, 450, 0, limits);
    assert_eq!(floor.width, 300);
    assert_eq!(floor.right(), start.right());
}

#[test]
fn panel_width_stays_in_bounds_while_dragging() {
    let mut panels = PanelWidths::new();
    panels.register(
        PanelKey::FINDER_SIDEBAR,
        PanelBounds {
            default: 200,
            min: 140,
            max: 320,
        },
    );
    let mut geometry = GeometryModel::default();
    let mut interaction = InteractionState::new();
    let mut projection = ViewProjection::default();
    let mut engine = PointerEngine::new();

    assert!(engine.begin_panel(PanelKey::FINDER_SIDEBAR, 400, &panels, &mut interaction));
    assert_eq!(interaction.cursor(), CursorAffordance::ColumnResize);
    let mut targets = GestureTargets {
        geometry: &mut geometry,
        panels: &mut panels,
        interaction: &mut interaction,
        surface: &mut projection,
        viewport: Viewport::new(1400, 900),
        metrics: DesktopMetrics::pixels(),
    };
    engine.pointer_move(100, 400, &mut targets);
    assert_eq!(targets.panels.width(PanelKey::FINDER_SIDEBAR), Some(140));
    engine.pointer_move(900, 400, &mut targets);
    assert_eq!(targets.panels.width(PanelKey::FINDER_SIDEBAR), Some(320));
    engine.pointer_move(450, 400, &mut targets);
    engine.release(&mut targets);

    assert_eq!(panels.width(PanelKey::FINDER_SIDEBAR), Some(250));
    assert_eq!(interaction.cursor(), CursorAffordance::Default);
    assert!(engine.is_idle());
}
