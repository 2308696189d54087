use crate::layout::floating::ChromeControl;
use crate::window::{WindowId, WindowStore};

/// A discrete click on window chrome or the dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeAction {
    TitleBar(WindowId),
    Close(WindowId),
    Minimize(WindowId),
    ToggleMaximize(WindowId),
    DockIcon(WindowId),
}

impl ChromeAction {
    pub fn for_control(id: WindowId, control: ChromeControl) -> Self {
        match control {
            ChromeControl::Close => ChromeAction::Close(id),
            ChromeControl::Minimize => ChromeAction::Minimize(id),
            ChromeControl::Maximize => ChromeAction::ToggleMaximize(id),
        }
    }
}

pub fn apply_chrome_action(store: &mut WindowStore, action: ChromeAction) {
    tracing::debug!(?action, "chrome action");
    match action {
        ChromeAction::TitleBar(id) => store.bring_to_front(id),
        ChromeAction::Close(id) => store.close(id),
        ChromeAction::Minimize(id) => store.minimize(id),
        ChromeAction::ToggleMaximize(id) => store.toggle_maximize(id),
        ChromeAction::DockIcon(id) => store.open(id),
    }
}

/// Whether the dock should mark `id` as running.
pub fn shows_open_indicator(store: &WindowStore, id: WindowId) -> bool {
    store.lifecycle(id).is_visible()
}
