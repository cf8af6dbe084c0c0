use crate::core::{ComponentId, ItemId};
use crate::surface::text_edit;
use crate::surface::{ResultItem, Surface};
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryItem {
    pub id: ItemId,
    pub label: String,
    pub href: Option<String>,
    pub focused: bool,
}

impl MemoryItem {
    pub fn link(id: impl Into<ItemId>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: Some(href.into()),
            focused: false,
        }
    }

    /// A row without an activation target, e.g. "No results found."
    pub fn note(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: None,
            focused: false,
        }
    }
}

/// Things the core asked the surface to activate "as if clicked".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Item(ItemId),
    ChipRemoval(ItemId),
}

#[derive(Debug, Clone)]
pub struct MemoryComponent {
    pub input: String,
    pub cursor: usize,
    pub synced_value: Option<String>,
    pub items: Vec<MemoryItem>,
    pub results_visible: bool,
    pub expanded: bool,
    pub active_descendant: Option<ItemId>,
    /// Index of the first item inside the list viewport.
    pub scroll_offset: usize,
    pub visible_rows: usize,
    pub row_height: f32,
    pub chips: Vec<MemoryItem>,
    pub live_text: String,
    pub focus_ring: bool,
    pub width_expanded: bool,
    pub disabled: bool,
    pub has_focus: bool,
    pub activations: Vec<Activation>,
}

impl Default for MemoryComponent {
    fn default() -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            synced_value: None,
            items: Vec::new(),
            results_visible: false,
            expanded: false,
            active_descendant: None,
            scroll_offset: 0,
            visible_rows: 8,
            row_height: 1.0,
            chips: Vec::new(),
            live_text: String::new(),
            focus_ring: false,
            width_expanded: false,
            disabled: false,
            has_focus: false,
            activations: Vec::new(),
        }
    }
}

impl MemoryComponent {
    pub fn focused_item(&self) -> Option<&MemoryItem> {
        self.items.iter().find(|item| item.focused)
    }

    /// Applies the default text-editing action of `key`. Returns whether the
    /// value or cursor changed.
    pub fn apply_edit(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                text_edit::delete_word_left(&mut self.input, &mut self.cursor)
            }
            KeyCode::Char(ch) if key.is_printable() => {
                text_edit::insert_char(&mut self.input, &mut self.cursor, ch);
                true
            }
            KeyCode::Backspace => text_edit::backspace_char(&mut self.input, &mut self.cursor),
            KeyCode::Delete => text_edit::delete_char(&mut self.input, &mut self.cursor),
            KeyCode::Left => text_edit::move_left(&mut self.cursor, &self.input),
            KeyCode::Right => text_edit::move_right(&mut self.cursor, &self.input),
            KeyCode::Home => {
                let moved = self.cursor != 0;
                self.cursor = 0;
                moved
            }
            KeyCode::End => {
                let end = text_edit::char_count(&self.input);
                let moved = self.cursor != end;
                self.cursor = end;
                moved
            }
            _ => false,
        }
    }

    fn scroll_to(&mut self, index: usize) {
        let rows = self.visible_rows.max(1);
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + rows {
            self.scroll_offset = index + 1 - rows;
        }
    }
}

/// A `Surface` that keeps everything in memory. Hosts mutate the public
/// fields to mirror what their provider delivered.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    components: IndexMap<ComponentId, MemoryComponent>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<ComponentId>) -> &mut MemoryComponent {
        self.components.entry(id.into()).or_default()
    }

    pub fn remove(&mut self, id: &ComponentId) -> Option<MemoryComponent> {
        self.components.shift_remove(id)
    }

    pub fn component(&self, id: &ComponentId) -> Option<&MemoryComponent> {
        self.components.get(id)
    }

    pub fn component_mut(&mut self, id: &ComponentId) -> Option<&mut MemoryComponent> {
        self.components.get_mut(id)
    }

    pub fn components(&self) -> impl Iterator<Item = (&ComponentId, &MemoryComponent)> {
        self.components.iter()
    }

    /// Replaces the rendered results. Visibility is left to the caller, the
    /// way a provider decides whether the swapped list is shown.
    pub fn replace_items(&mut self, id: &ComponentId, items: Vec<MemoryItem>) {
        if let Some(component) = self.components.get_mut(id) {
            component.items = items;
            component.scroll_offset = 0;
            component.active_descendant = None;
        }
    }

    /// Moves input focus somewhere outside `id`.
    pub fn blur(&mut self, id: &ComponentId) {
        if let Some(component) = self.components.get_mut(id) {
            component.has_focus = false;
        }
    }

    pub fn take_activations(&mut self, id: &ComponentId) -> Vec<Activation> {
        self.components
            .get_mut(id)
            .map(|component| std::mem::take(&mut component.activations))
            .unwrap_or_default()
    }
}

impl Surface for MemorySurface {
    fn contains(&self, component: &ComponentId) -> bool {
        self.components.contains_key(component)
    }

    fn is_disabled(&self, component: &ComponentId) -> bool {
        self.components
            .get(component)
            .is_some_and(|state| state.disabled)
    }

    fn results_visible(&self, component: &ComponentId) -> bool {
        self.components
            .get(component)
            .is_some_and(|state| state.results_visible)
    }

    fn set_results_visible(&mut self, component: &ComponentId, visible: bool) {
        if let Some(state) = self.components.get_mut(component) {
            state.results_visible = visible;
        }
    }

    fn set_expanded(&mut self, component: &ComponentId, expanded: bool) {
        if let Some(state) = self.components.get_mut(component) {
            state.expanded = expanded;
        }
    }

    fn items(&self, component: &ComponentId) -> Vec<ResultItem> {
        let Some(state) = self.components.get(component) else {
            return Vec::new();
        };
        state
            .items
            .iter()
            .map(|item| ResultItem {
                id: item.id.clone(),
                href: item.href.clone(),
                focused: item.focused,
            })
            .collect()
    }

    fn set_item_focused(&mut self, component: &ComponentId, item: &ItemId, focused: bool) {
        let Some(state) = self.components.get_mut(component) else {
            return;
        };
        if let Some(entry) = state.items.iter_mut().find(|entry| entry.id == *item) {
            entry.focused = focused;
        }
    }

    fn set_active_descendant(&mut self, component: &ComponentId, item: Option<&ItemId>) {
        if let Some(state) = self.components.get_mut(component) {
            state.active_descendant = item.cloned();
        }
    }

    fn scroll_into_view(&mut self, component: &ComponentId, item: &ItemId) {
        let Some(state) = self.components.get_mut(component) else {
            return;
        };
        if let Some(index) = state.items.iter().position(|entry| entry.id == *item) {
            state.scroll_to(index);
        }
    }

    fn activate_item(&mut self, component: &ComponentId, item: &ItemId) {
        let Some(state) = self.components.get_mut(component) else {
            return;
        };
        if state.items.iter().any(|entry| entry.id == *item) {
            state.activations.push(Activation::Item(item.clone()));
        }
    }

    fn list_height(&self, component: &ComponentId) -> Option<f32> {
        let state = self.components.get(component)?;
        let rows = state.visible_rows.min(state.items.len());
        Some(rows as f32 * state.row_height)
    }

    fn item_height(&self, component: &ComponentId) -> Option<f32> {
        let state = self.components.get(component)?;
        if state.items.is_empty() {
            return None;
        }
        Some(state.row_height)
    }

    fn input_value(&self, component: &ComponentId) -> Option<String> {
        self.components
            .get(component)
            .map(|state| state.input.clone())
    }

    fn set_input_value(&mut self, component: &ComponentId, value: &str) {
        if let Some(state) = self.components.get_mut(component) {
            state.input = value.to_string();
            state.cursor = text_edit::clamp_cursor(state.cursor, &state.input);
        }
    }

    fn move_cursor_to_end(&mut self, component: &ComponentId) {
        if let Some(state) = self.components.get_mut(component) {
            state.cursor = text_edit::char_count(&state.input);
        }
    }

    fn synced_value(&self, component: &ComponentId) -> Option<String> {
        self.components
            .get(component)
            .and_then(|state| state.synced_value.clone())
    }

    fn focus_input(&mut self, component: &ComponentId) {
        if let Some(state) = self.components.get_mut(component) {
            state.has_focus = true;
        }
    }

    fn focus_within(&self, component: &ComponentId) -> bool {
        self.components
            .get(component)
            .is_some_and(|state| state.has_focus)
    }

    fn set_focus_ring(&mut self, component: &ComponentId, active: bool) {
        if let Some(state) = self.components.get_mut(component) {
            state.focus_ring = active;
        }
    }

    fn set_width_expanded(&mut self, component: &ComponentId, expanded: bool) {
        if let Some(state) = self.components.get_mut(component) {
            state.width_expanded = expanded;
        }
    }

    fn chips(&self, component: &ComponentId) -> Vec<ItemId> {
        self.components
            .get(component)
            .map(|state| state.chips.iter().map(|chip| chip.id.clone()).collect())
            .unwrap_or_default()
    }

    fn activate_chip_removal(&mut self, component: &ComponentId, chip: &ItemId) {
        let Some(state) = self.components.get_mut(component) else {
            return;
        };
        if state.chips.iter().any(|entry| entry.id == *chip) {
            state.activations.push(Activation::ChipRemoval(chip.clone()));
        }
    }

    fn live_text(&self, component: &ComponentId) -> Option<String> {
        self.components
            .get(component)
            .map(|state| state.live_text.clone())
    }

    fn set_live_text(&mut self, component: &ComponentId, text: &str) {
        if let Some(state) = self.components.get_mut(component) {
            state.live_text = text.to_string();
        }
    }

    fn reset(&mut self, component: &ComponentId) {
        if let Some(state) = self.components.get_mut(component) {
            state.input.clear();
            state.cursor = 0;
            state.synced_value = None;
            state.items.clear();
            state.results_visible = false;
            state.expanded = false;
            state.active_descendant = None;
            state.scroll_offset = 0;
            state.chips.clear();
            state.live_text.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Activation, MemoryItem, MemorySurface};
    use crate::core::{ComponentId, ItemId};
    use crate::surface::Surface;
    use crate::terminal::{KeyCode, KeyEvent};

    #[test]
    fn unknown_component_is_a_noop() {
        let mut surface = MemorySurface::new();
        let id = ComponentId::new("ghost");
        surface.set_input_value(&id, "x");
        surface.activate_item(&id, &ItemId::new("a"));
        assert!(!surface.contains(&id));
        assert_eq!(surface.input_value(&id), None);
        assert!(surface.items(&id).is_empty());
    }

    #[test]
    fn scroll_into_view_uses_nearest_edge() {
        let mut surface = MemorySurface::new();
        let id = ComponentId::new("c");
        let component = surface.insert(id.clone());
        component.visible_rows = 3;
        component.items = (0..10)
            .map(|n| MemoryItem::link(format!("i{n}"), format!("Item {n}"), format!("/{n}")))
            .collect();

        surface.scroll_into_view(&id, &ItemId::new("i1"));
        assert_eq!(surface.component(&id).map(|c| c.scroll_offset), Some(0));

        surface.scroll_into_view(&id, &ItemId::new("i5"));
        assert_eq!(surface.component(&id).map(|c| c.scroll_offset), Some(3));

        surface.scroll_into_view(&id, &ItemId::new("i4"));
        assert_eq!(surface.component(&id).map(|c| c.scroll_offset), Some(3));

        surface.scroll_into_view(&id, &ItemId::new("i0"));
        assert_eq!(surface.component(&id).map(|c| c.scroll_offset), Some(0));
    }

    #[test]
    fn activations_are_recorded_for_known_targets_only() {
        let mut surface = MemorySurface::new();
        let id = ComponentId::new("c");
        let component = surface.insert(id.clone());
        component.items = vec![MemoryItem::link("a", "A", "/a")];
        component.chips = vec![MemoryItem::note("chip-1", "One")];

        surface.activate_item(&id, &ItemId::new("a"));
        surface.activate_item(&id, &ItemId::new("missing"));
        surface.activate_chip_removal(&id, &ItemId::new("chip-1"));

        assert_eq!(
            surface.take_activations(&id),
            vec![
                Activation::Item(ItemId::new("a")),
                Activation::ChipRemoval(ItemId::new("chip-1")),
            ]
        );
        assert!(surface.take_activations(&id).is_empty());
    }

    #[test]
    fn apply_edit_types_and_deletes() {
        let mut surface = MemorySurface::new();
        let component = surface.insert("c");
        for ch in "Can".chars() {
            component.apply_edit(KeyEvent::plain(KeyCode::Char(ch)));
        }
        assert_eq!(component.input, "Can");
        assert!(component.apply_edit(KeyEvent::plain(KeyCode::Backspace)));
        assert_eq!(component.input, "Ca");
        assert!(!component.apply_edit(KeyEvent::plain(KeyCode::Up)));
    }

    #[test]
    fn page_measurements_follow_viewport() {
        let mut surface = MemorySurface::new();
        let id = ComponentId::new("c");
        assert_eq!(surface.list_height(&id), None);

        let component = surface.insert(id.clone());
        component.visible_rows = 4;
        component.row_height = 2.0;
        assert_eq!(surface.item_height(&id), None);

        surface.replace_items(
            &id,
            (0..6)
                .map(|n| MemoryItem::link(format!("i{n}"), "x", "/x"))
                .collect(),
        );
        assert_eq!(surface.list_height(&id), Some(8.0));
        assert_eq!(surface.item_height(&id), Some(2.0));
    }
}
