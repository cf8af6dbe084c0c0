use crate::core::Target;
use crate::runtime::{
    BlurOrigin, Flow, PointerPhase, ScheduledAction, SchedulerCommand, SwapKind, TimerKey,
    TimerSlot,
};
use crate::widget::{Interaction, Phase};

const LIVE_NUDGE: char = '\u{a0}';

impl Interaction<'_> {
    pub(crate) fn focus(&mut self) -> Flow {
        self.clear_focus(true);
        self.capture_committed();
        self.schedule(SchedulerCommand::Debounce {
            key: TimerKey::new(self.id, TimerSlot::Announce),
            delay: self.config.announce_delay(),
            action: ScheduledAction::Announce {
                component: self.id.clone(),
            },
        });
        Flow::Continue
    }

    pub(crate) fn announce(&mut self) {
        let mut text = self.surface.live_text(self.id).unwrap_or_default();
        text.push(LIVE_NUDGE);
        self.surface.set_live_text(self.id, &text);
    }

    pub(crate) fn blur(&mut self, origin: BlurOrigin) -> Flow {
        let action = self.blur_check_action(origin);
        self.emit_next_turn(action);
        Flow::Continue
    }

    pub(crate) fn pointer(&mut self, _phase: PointerPhase) -> Flow {
        self.state.blur_suppressed = true;
        Flow::Continue
    }

    pub(crate) fn click(&mut self, target: Target) -> Flow {
        let flow = match target {
            target if target.opens_search() => {
                self.capture_committed();
                self.clear_focus(true);
                if self.is_open() {
                    self.close();
                    self.state.phase = Phase::Closed;
                } else {
                    let query = self.input_value();
                    self.trigger_search(&query);
                }
                Flow::PreventDefault
            }
            Target::Item(_) => {
                if self.is_open() {
                    self.clear_focus(true);
                    self.close();
                    self.state.phase = Phase::Idle;
                }
                Flow::Continue
            }
            Target::Outside => {
                self.state.blur_suppressed = false;
                let action = self.blur_check_action(BlurOrigin::TextInput);
                self.emit_next_turn(action);
                Flow::Continue
            }
            _ => Flow::Continue,
        };
        self.state.blur_suppressed = false;
        flow
    }

    pub(crate) fn keyup_settled(&mut self, value: String) {
        let changed = self.differs_from_committed(&value);
        if !self.state.closed && changed {
            self.trigger_search(&value);
        } else if self.state.closed && changed && value.is_empty() {
            tracing::debug!(component = %self.id, "field emptied, suppression lifted");
            self.reopen();
            self.state.phase = Phase::Editing;
        }
        self.commit(value);
    }

    /// Runs one turn after a blur. Does nothing while a pointer sequence is
    /// in progress or when focus only moved inside the component.
    pub(crate) fn blur_check(&mut self, origin: BlurOrigin) {
        if self.state.blur_suppressed {
            tracing::trace!(component = %self.id, "blur suppressed");
            return;
        }
        if self.surface.focus_within(self.id) {
            tracing::trace!(component = %self.id, "focus stayed inside");
            return;
        }

        self.reopen();
        for slot in [TimerSlot::Keyup, TimerSlot::Poll, TimerSlot::Announce] {
            self.schedule(SchedulerCommand::Cancel {
                key: TimerKey::new(self.id, slot),
            });
        }
        self.search.abort(self.id);

        let restored = if self.state.options.sync {
            self.surface.synced_value(self.id).unwrap_or_default()
        } else {
            String::new()
        };
        self.surface.set_input_value(self.id, &restored);
        self.forget_committed();
        self.hide();
        self.surface.set_live_text(self.id, "");
        self.surface.set_width_expanded(self.id, false);
        self.clear_focus(origin == BlurOrigin::Item);
        self.state.phase = Phase::Idle;
        tracing::debug!(component = %self.id, ?origin, restored, "blur applied");
    }

    pub(crate) fn swap(&mut self, kind: SwapKind) -> Flow {
        match kind {
            SwapKind::ResultsSwapping => {
                self.state.swap_in_progress = true;
            }
            SwapKind::ResultsSettled => self.results_settled(),
            SwapKind::SelectionSettled => {
                self.emit_next_turn(ScheduledAction::EmitChange {
                    component: self.id.clone(),
                });
            }
            SwapKind::InputReplaced => {
                self.emit_next_turn(ScheduledAction::SettleInput {
                    component: self.id.clone(),
                });
            }
        }
        Flow::Continue
    }

    pub(crate) fn settle_input(&mut self) {
        self.forget_committed();
        self.surface.move_cursor_to_end(self.id);
    }

    fn results_settled(&mut self) {
        self.state.swap_in_progress = false;
        if std::mem::take(&mut self.state.hide_after_swap) {
            self.hide_now();
            return;
        }

        let visible = self.is_open();
        if visible && (self.state.closed || !self.surface.focus_within(self.id)) {
            tracing::debug!(component = %self.id, "stale results discarded");
            self.hide_now();
            return;
        }
        self.surface.set_expanded(self.id, visible);
        if visible {
            self.state.phase = Phase::ResultsOpen;
        } else if self.state.phase == Phase::SearchPending {
            self.state.phase = Phase::Editing;
        }
    }
}
