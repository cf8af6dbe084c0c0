//! The search-and-select interaction core.
//!
//! `Autocomplete` owns per-component state and timers. Hosts forward
//! `WidgetEvent`s through [`Autocomplete::handle`] and advance time with
//! [`Autocomplete::tick`]; everything visual goes through the [`Surface`].

pub mod focus;
pub mod lifecycle;
pub mod navigation;
pub mod navigator;
pub mod open_state;
pub mod state;
#[cfg(test)]
mod testing;
pub mod value;

use crate::config::{AutocompleteConfig, ComponentOptions};
use crate::core::{ComponentId, Target};
use crate::runtime::{
    BlurOrigin, Flow, Notification, ScheduledAction, Scheduler, SchedulerCommand, WidgetEvent,
};
use crate::search::SearchProvider;
use crate::surface::Surface;
use std::time::{Duration, Instant};

pub use navigation::Direction;
pub use state::{ComponentState, Phase, StateRegistry};

/// The collaborators a call may touch, plus the current time.
pub struct Host<'a> {
    pub surface: &'a mut dyn Surface,
    pub search: &'a mut dyn SearchProvider,
    pub now: Instant,
}

impl<'a> Host<'a> {
    pub fn new(
        surface: &'a mut dyn Surface,
        search: &'a mut dyn SearchProvider,
        now: Instant,
    ) -> Self {
        Self {
            surface,
            search,
            now,
        }
    }
}

pub struct Autocomplete {
    config: AutocompleteConfig,
    registry: StateRegistry,
    scheduler: Scheduler,
}

impl Autocomplete {
    pub fn new(config: AutocompleteConfig) -> Self {
        Self::with_defaults(config, ComponentOptions::default())
    }

    /// `defaults` apply to components created lazily on first interaction.
    pub fn with_defaults(config: AutocompleteConfig, defaults: ComponentOptions) -> Self {
        Self {
            config,
            registry: StateRegistry::new(defaults),
            scheduler: Scheduler::new(),
        }
    }

    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    pub fn register(&mut self, id: impl Into<ComponentId>, options: ComponentOptions) {
        self.registry.register(id.into(), options);
    }

    /// Tears a component down: timers, in-flight search and state.
    pub fn remove(&mut self, host: &mut Host<'_>, id: &ComponentId) -> Option<ComponentState> {
        self.scheduler.schedule(
            SchedulerCommand::CancelComponent {
                component: id.clone(),
            },
            host.now,
        );
        host.search.abort(id);
        self.registry.remove(id)
    }

    pub fn state(&self, id: &ComponentId) -> Option<&ComponentState> {
        self.registry.get(id)
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// How long a host loop may sleep before the next timer is due.
    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.scheduler.poll_timeout(now, default_timeout)
    }

    pub fn handle(&mut self, host: &mut Host<'_>, event: WidgetEvent) -> Flow {
        let component = match event.component() {
            Some(component) => component.clone(),
            None => {
                self.click_outside(host);
                return Flow::Continue;
            }
        };
        let Some(mut interaction) = self.interaction(host, &component, true) else {
            return Flow::Continue;
        };

        match event {
            WidgetEvent::KeyDown { key, .. } => interaction.key_down(key),
            WidgetEvent::KeyUp { key, .. } => interaction.key_up(key),
            WidgetEvent::Focus { .. } => interaction.focus(),
            WidgetEvent::Blur { origin, .. } => interaction.blur(origin),
            WidgetEvent::Click { target, .. } => interaction.click(target),
            WidgetEvent::Pointer { phase, .. } => interaction.pointer(phase),
            WidgetEvent::Swap(swap) => interaction.swap(swap.kind),
            WidgetEvent::ClickOutside => Flow::Continue,
        }
    }

    /// Runs every timer and deferred action due at `host.now`. Returns the
    /// notifications meant for code outside the widget.
    pub fn tick(&mut self, host: &mut Host<'_>) -> Vec<Notification> {
        let mut notifications = Vec::new();
        loop {
            let actions = self.scheduler.drain_ready(host.now);
            if actions.is_empty() {
                break;
            }
            for action in actions {
                if let Some(notification) = self.run_action(host, action) {
                    notifications.push(notification);
                }
            }
        }
        notifications
    }

    /// Wipes the component's rendered state and starts a fresh interaction.
    pub fn clear(&mut self, host: &mut Host<'_>, id: &ComponentId) {
        if !host.surface.contains(id) {
            return;
        }
        host.surface.reset(id);
        host.search.abort(id);
        self.scheduler.schedule(
            SchedulerCommand::CancelComponent {
                component: id.clone(),
            },
            host.now,
        );
        if let Some(state) = self.registry.get_mut(id) {
            state.reset();
        }
    }

    fn run_action(&mut self, host: &mut Host<'_>, action: ScheduledAction) -> Option<Notification> {
        let component = action.component().clone();
        let Some(mut interaction) = self.interaction(host, &component, false) else {
            tracing::trace!(%component, ?action, "dropping action for a missing component");
            return None;
        };

        match action {
            ScheduledAction::KeyupSettled { value, .. } => interaction.keyup_settled(value),
            ScheduledAction::PollResults {
                remaining,
                direction,
                ..
            } => interaction.poll_results(remaining, direction),
            ScheduledAction::Announce { .. } => interaction.announce(),
            ScheduledAction::BlurCheck { origin, .. } => interaction.blur_check(origin),
            ScheduledAction::EmitChange { .. } => {
                return Some(Notification::ValueChanged {
                    component: component.clone(),
                });
            }
            ScheduledAction::SettleInput { .. } => interaction.settle_input(),
        }
        None
    }

    fn click_outside(&mut self, host: &mut Host<'_>) {
        let suppressed = self
            .registry
            .ids()
            .filter(|id| {
                self.registry
                    .get(id)
                    .is_some_and(|state| state.blur_suppressed)
            })
            .cloned()
            .collect::<Vec<_>>();

        for id in suppressed {
            if let Some(mut interaction) = self.interaction(host, &id, false) {
                interaction.click(Target::Outside);
            }
        }
    }

    /// Builds the per-call context, or `None` when the component is missing
    /// or disabled. `create` allows lazily creating state.
    fn interaction<'a>(
        &'a mut self,
        host: &'a mut Host<'_>,
        id: &'a ComponentId,
        create: bool,
    ) -> Option<Interaction<'a>> {
        if !host.surface.contains(id) || host.surface.is_disabled(id) {
            return None;
        }
        let state = if create {
            self.registry.entry(id)
        } else {
            self.registry.get_mut(id)?
        };
        if state.options.disabled {
            return None;
        }
        Some(Interaction {
            id,
            state,
            surface: &mut *host.surface,
            search: &mut *host.search,
            scheduler: &mut self.scheduler,
            config: &self.config,
            now: host.now,
        })
    }
}

/// Everything one handler needs for one component. The component behaviours
/// (focus, value, open state, navigation, lifecycle) are `impl` blocks on this
/// type spread over the sibling modules.
pub(crate) struct Interaction<'a> {
    id: &'a ComponentId,
    state: &'a mut ComponentState,
    surface: &'a mut dyn Surface,
    search: &'a mut dyn SearchProvider,
    scheduler: &'a mut Scheduler,
    config: &'a AutocompleteConfig,
    now: Instant,
}

impl Interaction<'_> {
    fn schedule(&mut self, command: SchedulerCommand) {
        self.scheduler.schedule(command, self.now);
    }

    fn emit_next_turn(&mut self, action: ScheduledAction) {
        self.schedule(SchedulerCommand::EmitNow(action));
    }

    fn blur_check_action(&self, origin: BlurOrigin) -> ScheduledAction {
        ScheduledAction::BlurCheck {
            component: self.id.clone(),
            origin,
        }
    }
}
