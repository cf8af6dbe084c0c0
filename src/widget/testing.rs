use crate::config::{AutocompleteConfig, ComponentOptions};
use crate::core::ComponentId;
use crate::runtime::{Flow, Notification, SwapEvent, SwapKind, WidgetEvent};
use crate::search::SearchProvider;
use crate::surface::{MemoryComponent, MemoryItem, MemorySurface};
use crate::terminal::{KeyCode, KeyEvent};
use crate::widget::{Autocomplete, ComponentState, Host, Phase};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub(crate) struct RecordingSearch {
    pub triggered: Vec<(ComponentId, String)>,
    pub aborted: Vec<ComponentId>,
}

impl RecordingSearch {
    pub fn queries(&self) -> Vec<&str> {
        self.triggered
            .iter()
            .map(|(_, query)| query.as_str())
            .collect()
    }
}

impl SearchProvider for RecordingSearch {
    fn trigger(&mut self, component: &ComponentId, query: &str) {
        self.triggered.push((component.clone(), query.to_string()));
    }

    fn abort(&mut self, component: &ComponentId) {
        self.aborted.push(component.clone());
    }
}

/// One registered component on a `MemorySurface`, driven by a manual clock.
pub(crate) struct Fixture {
    pub widget: Autocomplete,
    pub surface: MemorySurface,
    pub search: RecordingSearch,
    pub now: Instant,
    pub id: ComponentId,
}

impl Fixture {
    pub fn new(options: ComponentOptions) -> Self {
        let id = ComponentId::new("country");
        let mut surface = MemorySurface::new();
        surface.insert(id.clone()).has_focus = true;
        let mut widget = Autocomplete::new(AutocompleteConfig::default());
        widget.register(id.clone(), options);
        Self {
            widget,
            surface,
            search: RecordingSearch::default(),
            now: Instant::now(),
            id,
        }
    }

    pub fn send(&mut self, event: WidgetEvent) -> Flow {
        let mut host = Host::new(&mut self.surface, &mut self.search, self.now);
        self.widget.handle(&mut host, event)
    }

    /// Key down, the default edit when allowed, then key up.
    pub fn key(&mut self, key: KeyEvent) -> Flow {
        let flow = self.send(WidgetEvent::KeyDown {
            component: self.id.clone(),
            key,
        });
        if flow.allows_default() {
            self.component_mut().apply_edit(key);
        }
        self.send(WidgetEvent::KeyUp {
            component: self.id.clone(),
            key,
        });
        flow
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.key(KeyEvent::plain(KeyCode::Char(ch)));
        }
    }

    pub fn tick(&mut self) -> Vec<Notification> {
        let mut host = Host::new(&mut self.surface, &mut self.search, self.now);
        self.widget.tick(&mut host)
    }

    pub fn advance(&mut self, ms: u64) -> Vec<Notification> {
        let mut notifications = self.tick();
        let mut elapsed = 0;
        while elapsed < ms {
            let step = (ms - elapsed).min(10);
            self.now += Duration::from_millis(step);
            elapsed += step;
            notifications.extend(self.tick());
        }
        notifications
    }

    pub fn swap(&mut self, kind: SwapKind) -> Flow {
        self.send(WidgetEvent::Swap(SwapEvent::new(self.id.clone(), kind)))
    }

    /// Replaces the result list the way a provider would, ids `r1..rN`.
    pub fn show_results(&mut self, labels: &[String]) {
        self.swap(SwapKind::ResultsSwapping);
        let items = labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                MemoryItem::link(format!("r{}", index + 1), label.clone(), format!("/select/{index}"))
            })
            .collect();
        let id = self.id.clone();
        self.surface.replace_items(&id, items);
        self.component_mut().results_visible = true;
        self.swap(SwapKind::ResultsSettled);
    }

    pub fn hide_results(&mut self) {
        let component = self.component_mut();
        component.results_visible = false;
        component.expanded = false;
    }

    pub fn add_chip(&mut self, id: &str, label: &str) {
        self.component_mut().chips.push(MemoryItem::note(id, label));
    }

    pub fn component(&self) -> &MemoryComponent {
        self.surface
            .component(&self.id)
            .expect("fixture component is present")
    }

    pub fn component_mut(&mut self) -> &mut MemoryComponent {
        self.surface
            .component_mut(&self.id)
            .expect("fixture component is present")
    }

    pub fn state(&self) -> &ComponentState {
        self.widget
            .state(&self.id)
            .expect("fixture component is registered")
    }

    pub fn phase(&self) -> Phase {
        self.state().phase
    }

    pub fn focused(&self) -> Option<String> {
        self.component()
            .focused_item()
            .map(|item| item.id.to_string())
    }
}
