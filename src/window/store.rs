use std::collections::BTreeMap;

use super::{Lifecycle, WindowId};

/// Lifecycle flags, stacking order and focus for the fixed window set.
///
/// Geometry is deliberately absent: nothing in here may move or resize a
/// window.
#[derive(Debug, Clone)]
pub struct WindowStore {
    lifecycle: BTreeMap<WindowId, Lifecycle>,
    z_order: Vec<WindowId>,
    active: Option<WindowId>,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowStore {
    /// Every window starts closed, stacked in canonical order.
    pub fn new() -> Self {
        Self {
            lifecycle: WindowId::ALL
                .into_iter()
                .map(|id| (id, Lifecycle::default()))
                .collect(),
            z_order: WindowId::ALL.to_vec(),
            active: None,
        }
    }

    fn entry_mut(&mut self, id: WindowId) -> Option<&mut Lifecycle> {
        let entry = self.lifecycle.get_mut(&id);
        debug_assert!(entry.is_some(), "window {id} missing from store");
        entry
    }

    pub fn lifecycle(&self, id: WindowId) -> Lifecycle {
        self.lifecycle.get(&id).copied().unwrap_or_default()
    }

    pub fn is_visible(&self, id: WindowId) -> bool {
        self.lifecycle(id).is_visible()
    }

    pub fn z_order(&self) -> &[WindowId] {
        &self.z_order
    }

    pub fn z_index(&self, id: WindowId) -> usize {
        self.z_order.iter().position(|x| *x == id).unwrap_or(0)
    }

    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    /// Visible windows, back to front.
    pub fn visible_in_order(&self) -> Vec<WindowId> {
        self.z_order
            .iter()
            .copied()
            .filter(|id| self.is_visible(*id))
            .collect()
    }

    /// Open `id`, restoring it if minimized. A window coming back from closed
    /// loses any maximized state; one coming back from minimized keeps it.
    pub fn open(&mut self, id: WindowId) {
        self.show(id);
        self.raise(id);
    }

    pub fn close(&mut self, id: WindowId) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        if !entry.open {
            return;
        }
        entry.open = false;
        tracing::debug!(window = %id, "closed window");
        self.refocus_if_hidden(id);
    }

    pub fn minimize(&mut self, id: WindowId) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        if entry.minimized {
            return;
        }
        entry.minimized = true;
        tracing::debug!(window = %id, "minimized window");
        self.refocus_if_hidden(id);
    }

    pub fn toggle_maximize(&mut self, id: WindowId) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        entry.maximized = !entry.maximized;
        tracing::debug!(window = %id, maximized = entry.maximized, "toggled maximize");
    }

    /// Raise `id` to the top and focus it. Hidden windows are shown first so
    /// a dock click on a minimized window restores it rather than only
    /// shifting focus.
    pub fn bring_to_front(&mut self, id: WindowId) {
        self.show(id);
        self.raise(id);
    }

    fn show(&mut self, id: WindowId) {
        let Some(entry) = self.entry_mut(id) else {
            return;
        };
        if !entry.open {
            entry.maximized = false;
            entry.open = true;
            tracing::debug!(window = %id, "opened window");
        }
        if entry.minimized {
            entry.minimized = false;
            tracing::debug!(window = %id, "restored minimized window");
        }
    }

    fn raise(&mut self, id: WindowId) {
        if let Some(pos) = self.z_order.iter().position(|&x| x == id) {
            let item = self.z_order.remove(pos);
            self.z_order.push(item);
        }
        self.active = Some(id);
    }

    fn refocus_if_hidden(&mut self, id: WindowId) {
        if self.active == Some(id) {
            self.active = self
                .z_order
                .iter()
                .rev()
                .copied()
                .find(|candidate| self.is_visible(*candidate));
        }
    }
}
