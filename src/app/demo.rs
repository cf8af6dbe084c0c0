use crate::app::command::Command;
use crate::config::{ComponentOptions, Settings};
use crate::core::{ComponentId, ItemId};
use crate::runtime::{BlurOrigin, Notification, SwapEvent, SwapKind, WidgetEvent};
use crate::search::{Catalog, SearchCompletion, SearchExecutor, SearchOutcome};
use crate::surface::{Activation, MemoryComponent, MemoryItem, MemorySurface, surface_to_json};
use crate::terminal::KeyEvent;
use crate::widget::{Autocomplete, Host};
use std::time::Instant;

pub const COMPONENT: &str = "country";

/// One autocomplete on a `MemorySurface`, fed by the threaded catalog
/// search. Plays the provider's part: renders results, applies selections
/// and reports the swaps back to the widget.
pub struct Demo {
    widget: Autocomplete,
    surface: MemorySurface,
    search: SearchExecutor,
    settings: Settings,
    id: ComponentId,
    log: Vec<String>,
    should_exit: bool,
}

impl Demo {
    pub fn new(settings: Settings, catalog: Catalog, options: ComponentOptions) -> Self {
        let id = ComponentId::new(COMPONENT);
        let mut surface = MemorySurface::new();
        surface.insert(id.clone()).has_focus = true;

        let mut widget = Autocomplete::new(settings.widget.clone());
        widget.register(id.clone(), options);

        let search = SearchExecutor::new(catalog, settings.search.clone());
        Self {
            widget,
            surface,
            search,
            settings,
            id,
            log: Vec::new(),
            should_exit: false,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn widget(&self) -> &Autocomplete {
        &self.widget
    }

    pub fn surface(&self) -> &MemorySurface {
        &self.surface
    }

    pub fn component(&self) -> Option<&MemoryComponent> {
        self.surface.component(&self.id)
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn has_focus(&self) -> bool {
        self.component().is_some_and(|component| component.has_focus)
    }

    pub fn drain_search(&mut self) -> Vec<SearchCompletion> {
        self.search.drain_ready()
    }

    pub fn handle_command(&mut self, command: Command, now: Instant) {
        match command {
            Command::Exit => self.should_exit = true,
            Command::ToggleFocus => self.toggle_focus(now),
            Command::InputKey(key) if self.has_focus() => self.input_key(key, now),
            Command::InputKey(_) => {}
        }
    }

    /// Fires due timers and records notifications. Returns whether anything
    /// visible may have changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let notifications = {
            let mut host = Host::new(&mut self.surface, &mut self.search, now);
            self.widget.tick(&mut host)
        };
        let changed = !notifications.is_empty();
        for notification in notifications {
            match notification {
                Notification::ValueChanged { component } => {
                    tracing::info!(%component, "value changed");
                    tracing::trace!(surface = %surface_to_json(&self.surface), "after change");
                    self.log.push(format!("changed: {}", self.selection_summary()));
                }
            }
        }
        changed
    }

    /// Renders a finished search into the result list, bracketed by the
    /// swap notifications the widget expects.
    pub fn apply_completion(&mut self, completion: SearchCompletion, now: Instant) {
        let SearchCompletion {
            component, outcome, ..
        } = completion;
        if component != self.id {
            return;
        }
        self.swap(SwapKind::ResultsSwapping, now);

        let strings = &self.settings.search.strings;
        let (items, live, visible) = match outcome {
            SearchOutcome::TooShort => (Vec::new(), String::new(), false),
            SearchOutcome::Matches { entries, .. } if entries.is_empty() => (
                vec![MemoryItem::note("none", strings.no_results.clone())],
                strings.no_results.clone(),
                true,
            ),
            SearchOutcome::Matches { entries, truncated } => {
                let count = entries.len();
                let mut items = entries
                    .into_iter()
                    .map(|entry| {
                        let href = format!("/select/{}", entry.id);
                        MemoryItem::link(entry.id, entry.label, href)
                    })
                    .collect::<Vec<_>>();
                if truncated {
                    items.push(MemoryItem::note("more", strings.more(count)));
                }
                (items, strings.available(count), true)
            }
        };

        self.surface.replace_items(&self.id, items);
        if let Some(state) = self.surface.component_mut(&self.id) {
            state.results_visible = visible;
            state.live_text = live;
        }
        self.swap(SwapKind::ResultsSettled, now);
    }

    fn input_key(&mut self, key: KeyEvent, now: Instant) {
        let flow = self.send(
            WidgetEvent::KeyDown {
                component: self.id.clone(),
                key,
            },
            now,
        );
        if flow.allows_default()
            && let Some(component) = self.surface.component_mut(&self.id)
        {
            component.apply_edit(key);
        }
        self.send(
            WidgetEvent::KeyUp {
                component: self.id.clone(),
                key,
            },
            now,
        );
        self.apply_activations(now);
    }

    fn toggle_focus(&mut self, now: Instant) {
        if self.has_focus() {
            self.surface.blur(&self.id);
            self.send(
                WidgetEvent::Blur {
                    component: self.id.clone(),
                    origin: BlurOrigin::TextInput,
                },
                now,
            );
        } else {
            if let Some(component) = self.surface.component_mut(&self.id) {
                component.has_focus = true;
            }
            self.send(
                WidgetEvent::Focus {
                    component: self.id.clone(),
                },
                now,
            );
        }
    }

    fn apply_activations(&mut self, now: Instant) {
        for activation in self.surface.take_activations(&self.id) {
            match activation {
                Activation::Item(item) => self.select(&item, now),
                Activation::ChipRemoval(chip) => {
                    if let Some(component) = self.surface.component_mut(&self.id) {
                        component.chips.retain(|entry| entry.id != chip);
                    }
                    self.swap(SwapKind::SelectionSettled, now);
                }
            }
        }
    }

    fn select(&mut self, item: &ItemId, now: Instant) {
        let Some(entry) = self.search.catalog().get(item.as_str()).cloned() else {
            return;
        };
        let multiselect = self
            .widget
            .state(&self.id)
            .is_some_and(|state| state.options.multiselect);
        let Some(component) = self.surface.component_mut(&self.id) else {
            return;
        };

        if multiselect {
            if !component.chips.iter().any(|chip| chip.id == *item) {
                component
                    .chips
                    .push(MemoryItem::note(entry.id.as_str(), entry.label.as_str()));
            }
            component.input.clear();
            component.cursor = 0;
            self.swap(SwapKind::SelectionSettled, now);
        } else {
            component.synced_value = Some(entry.label.clone());
            component.input = entry.label;
            self.swap(SwapKind::InputReplaced, now);
            self.swap(SwapKind::SelectionSettled, now);
        }
    }

    fn selection_summary(&self) -> String {
        let Some(component) = self.component() else {
            return String::new();
        };
        if component.chips.is_empty() {
            return component.synced_value.clone().unwrap_or_default();
        }
        component
            .chips
            .iter()
            .map(|chip| chip.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn swap(&mut self, kind: SwapKind, now: Instant) {
        self.send(WidgetEvent::Swap(SwapEvent::new(self.id.clone(), kind)), now);
    }

    fn send(&mut self, event: WidgetEvent, now: Instant) -> crate::runtime::Flow {
        let mut host = Host::new(&mut self.surface, &mut self.search, now);
        self.widget.handle(&mut host, event)
    }
}
