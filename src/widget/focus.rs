use crate::core::ItemId;
use crate::widget::Interaction;

impl Interaction<'_> {
    pub(crate) fn focused_item(&self) -> Option<ItemId> {
        let items = self.surface.items(self.id);
        if let Some(recorded) = &self.state.focused_item
            && items.iter().any(|item| item.id == *recorded)
        {
            return Some(recorded.clone());
        }
        items
            .into_iter()
            .find(|item| item.focused)
            .map(|item| item.id)
    }

    /// Drops item focus. With `activate_ring` the text field takes input
    /// focus and the surrounding frame shows as focused; otherwise the frame
    /// goes inactive.
    pub(crate) fn clear_focus(&mut self, activate_ring: bool) {
        self.drop_item_focus();
        if activate_ring {
            self.surface.set_focus_ring(self.id, true);
            self.surface.focus_input(self.id);
        } else {
            self.surface.set_focus_ring(self.id, false);
        }
    }

    pub(crate) fn drop_item_focus(&mut self) {
        for item in self.surface.items(self.id) {
            if item.focused {
                self.surface.set_item_focused(self.id, &item.id, false);
            }
        }
        if let Some(previous) = self.state.focused_item.take() {
            self.surface.set_item_focused(self.id, &previous, false);
        }
        self.surface.set_active_descendant(self.id, None);
    }

    pub(crate) fn focus_item(&mut self, item: &ItemId) -> bool {
        if !self
            .surface
            .items(self.id)
            .iter()
            .any(|entry| entry.id == *item)
        {
            tracing::trace!(component = %self.id, %item, "focus target vanished");
            return false;
        }

        self.clear_focus(false);
        self.surface.set_item_focused(self.id, item, true);
        self.surface.set_active_descendant(self.id, Some(item));
        self.surface.scroll_into_view(self.id, item);
        self.state.focused_item = Some(item.clone());
        true
    }
}
