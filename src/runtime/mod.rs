pub mod event;
pub mod scheduler;

pub use event::{
    BlurOrigin, Flow, Notification, PointerPhase, SwapEvent, SwapKind, WidgetEvent,
};
pub use scheduler::{ScheduledAction, Scheduler, SchedulerCommand, TimerKey, TimerSlot};
