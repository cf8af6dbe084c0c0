use crate::runtime::{Flow, ScheduledAction, SchedulerCommand, TimerKey, TimerSlot};
use crate::surface::text_edit;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::widget::navigation::{self, Direction};
use crate::widget::{Interaction, Phase};
use std::time::Duration;

impl Interaction<'_> {
    pub(crate) fn key_down(&mut self, key: KeyEvent) -> Flow {
        if key.is_printable() {
            self.surface.set_width_expanded(self.id, true);
        } else if key.code == KeyCode::Backspace
            && text_edit::char_count(&self.input_value()) == 1
        {
            self.surface.set_width_expanded(self.id, false);
        }
        self.capture_committed();

        match key.code {
            KeyCode::Esc if self.is_open() => {
                self.clear_focus(false);
                self.close();
                self.state.phase = Phase::Closed;
                return Flow::Continue;
            }
            KeyCode::Esc => {
                self.surface.set_input_value(self.id, "");
            }
            KeyCode::Enter => {
                if self.is_open() {
                    if let Some(item) = self.focused_item() {
                        self.surface.activate_item(self.id, &item);
                    }
                    self.clear_focus(true);
                    self.close();
                    self.state.phase = Phase::Idle;
                }
                return Flow::PreventDefault;
            }
            KeyCode::Backspace
                if self.input_value().is_empty() && !self.surface.chips(self.id).is_empty() =>
            {
                self.remove_last_chip();
            }
            KeyCode::PageDown | KeyCode::PageUp if self.is_open() => {
                let direction = if key.code == KeyCode::PageDown {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                match navigation::page_size(
                    self.surface.list_height(self.id),
                    self.surface.item_height(self.id),
                ) {
                    Some(page) => self.move_focus(direction, page),
                    None => tracing::trace!(component = %self.id, "page size unavailable"),
                }
                return Flow::PreventDefault;
            }
            KeyCode::Down | KeyCode::Up => {
                let direction = if key.code == KeyCode::Down {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                if self.is_open() {
                    self.move_focus(direction, 1);
                } else {
                    let query = self.input_value();
                    self.trigger_search(&query);
                    if !key.modifiers.contains(KeyModifiers::ALT) {
                        self.poll_results(self.config.poll_budget(), direction);
                    }
                }
                return Flow::PreventDefault;
            }
            _ => {
                self.reopen();
                if changes_value(key) {
                    self.state.phase = Phase::Editing;
                }
            }
        }

        self.clear_focus(true);
        Flow::Continue
    }

    pub(crate) fn key_up(&mut self, key: KeyEvent) -> Flow {
        if key.code == KeyCode::Enter {
            return Flow::PreventDefault;
        }
        self.capture_committed();
        let value = self.input_value();
        self.schedule(SchedulerCommand::Debounce {
            key: TimerKey::new(self.id, TimerSlot::Keyup),
            delay: self.config.debounce(),
            action: ScheduledAction::KeyupSettled {
                component: self.id.clone(),
                value,
            },
        });
        Flow::Continue
    }

    /// Waits for a triggered search to show results, then focuses the first
    /// (or last) item. Gives up silently once `remaining` runs out.
    pub(crate) fn poll_results(&mut self, remaining: Duration, direction: Direction) {
        if self.is_open() {
            self.schedule(SchedulerCommand::Cancel {
                key: TimerKey::new(self.id, TimerSlot::Poll),
            });
            self.reopen();
            let items = self.surface.items(self.id);
            if let Some(item) = navigation::target(&items, None, direction, 1) {
                let item = item.id.clone();
                self.focus_item(&item);
            }
            return;
        }

        if remaining.is_zero() {
            tracing::debug!(component = %self.id, "results never showed, poll gave up");
            return;
        }
        let interval = self.config.poll_interval().max(Duration::from_millis(1));
        self.schedule(SchedulerCommand::Debounce {
            key: TimerKey::new(self.id, TimerSlot::Poll),
            delay: interval,
            action: ScheduledAction::PollResults {
                component: self.id.clone(),
                remaining: remaining.saturating_sub(interval),
                direction,
            },
        });
    }

    pub(crate) fn move_focus(&mut self, direction: Direction, count: usize) {
        let items = self.surface.items(self.id);
        let focused = self.focused_item();
        let Some(item) = navigation::target(&items, focused.as_ref(), direction, count) else {
            return;
        };
        let item = item.id.clone();
        self.focus_item(&item);
    }

    pub(crate) fn trigger_search(&mut self, query: &str) {
        self.state.phase = Phase::SearchPending;
        self.reopen();
        tracing::debug!(component = %self.id, query, "search triggered");
        self.search.trigger(self.id, query);
    }

    fn remove_last_chip(&mut self) {
        if let Some(chip) = self.surface.chips(self.id).pop() {
            self.surface.activate_chip_removal(self.id, &chip);
        }
    }
}

fn changes_value(key: KeyEvent) -> bool {
    key.is_printable() || matches!(key.code, KeyCode::Backspace | KeyCode::Delete)
}
