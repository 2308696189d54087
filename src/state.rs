/// Pointer affordance the frontend should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorAffordance {
    #[default]
    Default,
    /// Horizontal resize, shown while a sidebar divider is dragged.
    ColumnResize,
}

/// Global pointer presentation state changed by gestures.
///
/// Changes are recorded with a dirty flag so the frontend can apply them once
/// per change rather than every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct InteractionState {
    cursor: CursorAffordance,
    selection_suppressed: bool,
    dirty: bool,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> CursorAffordance {
        self.cursor
    }

    pub fn selection_suppressed(&self) -> bool {
        self.selection_suppressed
    }

    /// Force the column-resize cursor and block text selection until
    /// [`InteractionState::end_column_resize`].
    pub fn begin_column_resize(&mut self) {
        self.set(CursorAffordance::ColumnResize, true);
    }

    pub fn end_column_resize(&mut self) {
        self.set(CursorAffordance::Default, false);
    }

    fn set(&mut self, cursor: CursorAffordance, suppressed: bool) {
        if self.cursor == cursor && self.selection_suppressed == suppressed {
            return;
        }
        self.cursor = cursor;
        self.selection_suppressed = suppressed;
        self.dirty = true;
    }

    pub fn take_change(&mut self) -> Option<(CursorAffordance, bool)> {
        if self.dirty {
            self.dirty = false;
            Some((self.cursor, self.selection_suppressed))
        } else {
            None
        }
    }
}
