//! The boundary between the widget core and whatever draws it.
//!
//! Every primitive is keyed by component id. Implementations must treat
//! unknown ids and unknown items as no-ops: the core calls these freely even
//! when the rendered state lags behind user input.

pub mod memory;
pub mod snapshot;
pub mod text_edit;

use crate::core::{ComponentId, ItemId};

pub use memory::{Activation, MemoryComponent, MemoryItem, MemorySurface};
pub use snapshot::surface_to_json;

/// One rendered result, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub id: ItemId,
    /// Activation target. Items without one are not navigable.
    pub href: Option<String>,
    /// Whether the surface currently shows the item as focused.
    pub focused: bool,
}

impl ResultItem {
    pub fn is_navigable(&self) -> bool {
        self.href.as_deref().is_some_and(|href| !href.is_empty())
    }
}

pub trait Surface {
    fn contains(&self, component: &ComponentId) -> bool;

    fn is_disabled(&self, _component: &ComponentId) -> bool {
        false
    }

    // --- result list ---

    fn results_visible(&self, component: &ComponentId) -> bool;
    fn set_results_visible(&mut self, component: &ComponentId, visible: bool);
    /// The expanded-state accessibility signal on the text field.
    fn set_expanded(&mut self, component: &ComponentId, expanded: bool);
    fn items(&self, component: &ComponentId) -> Vec<ResultItem>;
    fn set_item_focused(&mut self, component: &ComponentId, item: &ItemId, focused: bool);
    fn set_active_descendant(&mut self, component: &ComponentId, item: Option<&ItemId>);
    /// Scroll with nearest-edge alignment; no movement when already visible.
    fn scroll_into_view(&mut self, component: &ComponentId, item: &ItemId);
    fn activate_item(&mut self, component: &ComponentId, item: &ItemId);
    fn list_height(&self, component: &ComponentId) -> Option<f32>;
    fn item_height(&self, component: &ComponentId) -> Option<f32>;

    // --- text field ---

    fn input_value(&self, component: &ComponentId) -> Option<String>;
    fn set_input_value(&mut self, component: &ComponentId, value: &str);
    fn move_cursor_to_end(&mut self, component: &ComponentId);
    /// The externally synchronized committed value, if the host keeps one.
    fn synced_value(&self, component: &ComponentId) -> Option<String>;
    fn focus_input(&mut self, component: &ComponentId);
    /// True while input focus is anywhere inside the component subtree.
    fn focus_within(&self, component: &ComponentId) -> bool;
    fn set_focus_ring(&mut self, component: &ComponentId, active: bool);
    fn set_width_expanded(&mut self, component: &ComponentId, expanded: bool);

    // --- chips ---

    fn chips(&self, component: &ComponentId) -> Vec<ItemId>;
    fn activate_chip_removal(&mut self, component: &ComponentId, chip: &ItemId);

    // --- live region ---

    fn live_text(&self, component: &ComponentId) -> Option<String>;
    fn set_live_text(&mut self, component: &ComponentId, text: &str);

    /// Wipe input, chips, results, live region and synchronized value.
    fn reset(&mut self, component: &ComponentId);
}
