use crate::config::ComponentOptions;
use crate::core::{ComponentId, ItemId};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// The user typed since the last commit.
    Editing,
    /// A debounce fired or a search is in flight.
    SearchPending,
    ResultsOpen,
    /// Suppressed by the user; late results must not reopen the list.
    Closed,
}

#[derive(Debug, Clone, Default)]
pub struct ComponentState {
    pub options: ComponentOptions,
    /// `None` until captured in the current interaction.
    pub committed_value: Option<String>,
    pub closed: bool,
    pub focused_item: Option<ItemId>,
    pub blur_suppressed: bool,
    pub phase: Phase,
    pub swap_in_progress: bool,
    pub hide_after_swap: bool,
}

impl ComponentState {
    pub fn with_options(options: ComponentOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn reset(&mut self) {
        *self = Self::with_options(self.options);
    }
}

/// Per-component state, created lazily and removed explicitly.
#[derive(Debug, Default)]
pub struct StateRegistry {
    defaults: ComponentOptions,
    components: IndexMap<ComponentId, ComponentState>,
}

impl StateRegistry {
    pub fn new(defaults: ComponentOptions) -> Self {
        Self {
            defaults,
            components: IndexMap::new(),
        }
    }

    pub fn register(&mut self, id: ComponentId, options: ComponentOptions) -> &mut ComponentState {
        let state = self
            .components
            .entry(id)
            .or_insert_with(|| ComponentState::with_options(options));
        state.options = options;
        state
    }

    pub fn entry(&mut self, id: &ComponentId) -> &mut ComponentState {
        let defaults = self.defaults;
        self.components
            .entry(id.clone())
            .or_insert_with(|| ComponentState::with_options(defaults))
    }

    pub fn get(&self, id: &ComponentId) -> Option<&ComponentState> {
        self.components.get(id)
    }

    pub fn get_mut(&mut self, id: &ComponentId) -> Option<&mut ComponentState> {
        self.components.get_mut(id)
    }

    pub fn remove(&mut self, id: &ComponentId) -> Option<ComponentState> {
        self.components.shift_remove(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.components.keys()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase, StateRegistry};
    use crate::config::ComponentOptions;
    use crate::core::ComponentId;

    #[test]
    fn entry_creates_lazily_with_defaults() {
        let mut registry = StateRegistry::new(ComponentOptions::multi());
        let id = ComponentId::new("tags");
        assert!(registry.get(&id).is_none());

        let state = registry.entry(&id);
        assert!(state.options.multiselect);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.committed_value, None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn reset_keeps_options() {
        let mut registry = StateRegistry::default();
        let id = ComponentId::new("tags");
        let state = registry.register(id.clone(), ComponentOptions::multi());
        state.closed = true;
        state.committed_value = Some("x".to_string());
        state.reset();

        let state = registry.get(&id).expect("registered");
        assert!(!state.closed);
        assert_eq!(state.committed_value, None);
        assert!(state.options.multiselect);
    }

    #[test]
    fn components_are_isolated() {
        let mut registry = StateRegistry::default();
        let a = ComponentId::new("a");
        let b = ComponentId::new("b");
        registry.entry(&a).closed = true;
        assert!(!registry.entry(&b).closed);

        registry.remove(&a);
        assert!(registry.get(&a).is_none());
        assert!(registry.get(&b).is_some());
    }
}
