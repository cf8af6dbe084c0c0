use crate::core::ComponentId;
use crate::runtime::event::BlurOrigin;
use crate::widget::navigation::Direction;
use indexmap::IndexMap;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Timer slots a component may hold. Each slot holds at most one live timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    /// Key-up debounce before a search is triggered.
    Keyup,
    /// Poll-until-visible before moving focus into fresh results.
    Poll,
    /// Delayed live-region nudge after the text field gains focus.
    Announce,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub component: ComponentId,
    pub slot: TimerSlot,
}

impl TimerKey {
    pub fn new(component: &ComponentId, slot: TimerSlot) -> Self {
        Self {
            component: component.clone(),
            slot,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledAction {
    /// The field settled on `value` after the debounce window.
    KeyupSettled {
        component: ComponentId,
        value: String,
    },
    /// Check whether results are visible yet; `remaining` is the leftover budget.
    PollResults {
        component: ComponentId,
        remaining: Duration,
        direction: Direction,
    },
    Announce {
        component: ComponentId,
    },
    /// Decide whether focus really left the component.
    BlurCheck {
        component: ComponentId,
        origin: BlurOrigin,
    },
    /// Deliver the external "value changed" signal.
    EmitChange {
        component: ComponentId,
    },
    /// The text field was replaced by the provider.
    SettleInput {
        component: ComponentId,
    },
}

impl ScheduledAction {
    pub fn component(&self) -> &ComponentId {
        match self {
            Self::KeyupSettled { component, .. }
            | Self::PollResults { component, .. }
            | Self::Announce { component }
            | Self::BlurCheck { component, .. }
            | Self::EmitChange { component }
            | Self::SettleInput { component } => component,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SchedulerCommand {
    /// Run on the next turn of the loop.
    EmitNow(ScheduledAction),
    /// Replace whatever is pending under `key` and fire after `delay`.
    Debounce {
        key: TimerKey,
        delay: Duration,
        action: ScheduledAction,
    },
    Cancel {
        key: TimerKey,
    },
    CancelComponent {
        component: ComponentId,
    },
}

#[derive(Debug, Clone)]
struct DelayedTask {
    due_at: Instant,
    sequence: u64,
    action: ScheduledAction,
}

#[derive(Default)]
pub struct Scheduler {
    ready: VecDeque<ScheduledAction>,
    delayed: IndexMap<TimerKey, DelayedTask>,
    sequence: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: SchedulerCommand, now: Instant) {
        match command {
            SchedulerCommand::EmitNow(action) => {
                self.ready.push_back(action);
            }
            SchedulerCommand::Debounce { key, delay, action } => {
                self.sequence = self.sequence.saturating_add(1);
                self.delayed.insert(
                    key,
                    DelayedTask {
                        due_at: now + delay,
                        sequence: self.sequence,
                        action,
                    },
                );
            }
            SchedulerCommand::Cancel { key } => {
                self.delayed.shift_remove(&key);
            }
            SchedulerCommand::CancelComponent { component } => {
                self.delayed.retain(|key, _| key.component != component);
                self.ready.retain(|action| *action.component() != component);
            }
        }
    }

    pub fn is_pending(&self, key: &TimerKey) -> bool {
        self.delayed.contains_key(key)
    }

    pub fn pending_count(&self) -> usize {
        self.delayed.len()
    }

    /// Moves every due timer behind the already queued actions and drains
    /// the queue. Timers fire in deadline order.
    pub fn drain_ready(&mut self, now: Instant) -> Vec<ScheduledAction> {
        let due_keys = self
            .delayed
            .iter()
            .filter(|(_, task)| task.due_at <= now)
            .map(|(key, _)| key.clone())
            .collect::<Vec<_>>();

        let mut due = due_keys
            .into_iter()
            .filter_map(|key| self.delayed.shift_remove(&key))
            .collect::<Vec<_>>();
        due.sort_by_key(|task| (task.due_at, task.sequence));
        self.ready.extend(due.into_iter().map(|task| task.action));

        self.ready.drain(..).collect()
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        if !self.ready.is_empty() {
            return Duration::ZERO;
        }

        let mut next = default_timeout;
        for task in self.delayed.values() {
            let due_in = task.due_at.saturating_duration_since(now);
            if due_in < next {
                next = due_in;
            }
        }

        next
    }
}
