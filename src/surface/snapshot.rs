use crate::surface::memory::{Activation, MemoryItem, MemorySurface};

/// Dumps every component on the surface as JSON, for debugging hosts.
pub fn surface_to_json(surface: &MemorySurface) -> serde_json::Value {
    let components = surface
        .components()
        .map(|(id, component)| {
            (
                id.to_string(),
                serde_json::json!({
                    "input": {
                        "value": component.input,
                        "cursor": component.cursor,
                        "has_focus": component.has_focus,
                        "width_expanded": component.width_expanded,
                        "active_descendant": component.active_descendant.as_ref().map(|id| id.as_str()),
                        "expanded": component.expanded,
                    },
                    "synced_value": component.synced_value,
                    "focus_ring": component.focus_ring,
                    "disabled": component.disabled,
                    "results": {
                        "visible": component.results_visible,
                        "scroll_offset": component.scroll_offset,
                        "items": component.items.iter().map(item_to_json).collect::<Vec<_>>(),
                    },
                    "chips": component.chips.iter().map(item_to_json).collect::<Vec<_>>(),
                    "live_text": component.live_text,
                    "activations": component
                        .activations
                        .iter()
                        .map(activation_to_json)
                        .collect::<Vec<_>>(),
                }),
            )
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::json!({ "components": components })
}

fn item_to_json(item: &MemoryItem) -> serde_json::Value {
    serde_json::json!({
        "id": item.id.as_str(),
        "label": item.label,
        "href": item.href,
        "focused": item.focused,
    })
}

fn activation_to_json(activation: &Activation) -> serde_json::Value {
    match activation {
        Activation::Item(id) => serde_json::json!({ "item": id.as_str() }),
        Activation::ChipRemoval(id) => serde_json::json!({ "chip_removal": id.as_str() }),
    }
}
