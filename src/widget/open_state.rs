//! Suppression flag versus rendered visibility.
//!
//! `closed` outlives the list itself: a search may still be in flight when the
//! user dismisses the list, and its results must not pop it back open.

use crate::widget::Interaction;

impl Interaction<'_> {
    // A list waiting for a deferred hide no longer counts as open.
    pub(crate) fn is_open(&self) -> bool {
        !self.state.hide_after_swap && self.surface.results_visible(self.id)
    }

    pub(crate) fn close(&mut self) {
        self.state.closed = true;
        self.hide();
    }

    pub(crate) fn reopen(&mut self) {
        self.state.closed = false;
    }

    /// Hides the list, or waits for an in-progress replacement to finish so
    /// the fresh list is hidden instead of the outgoing one.
    pub(crate) fn hide(&mut self) {
        if self.state.swap_in_progress {
            self.state.hide_after_swap = true;
            return;
        }
        self.hide_now();
    }

    pub(crate) fn hide_now(&mut self) {
        self.drop_item_focus();
        self.surface.set_expanded(self.id, false);
        self.surface.set_results_visible(self.id, false);
    }
}
