use crate::core::{ComponentId, Target};
use crate::terminal::KeyEvent;

/// Where the focus-leave originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurOrigin {
    TextInput,
    /// A result item lost focus, usually because it was clicked.
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Up,
}

/// Result-list and selection replacement notifications from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapKind {
    /// The result list is being replaced.
    ResultsSwapping,
    /// The result list replacement completed.
    ResultsSettled,
    /// A selection toggle was applied to the component.
    SelectionSettled,
    /// The text field itself was replaced.
    InputReplaced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapEvent {
    pub component: ComponentId,
    pub kind: SwapKind,
}

impl SwapEvent {
    pub fn new(component: impl Into<ComponentId>, kind: SwapKind) -> Self {
        Self {
            component: component.into(),
            kind,
        }
    }
}

/// Events the host forwards into the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    KeyDown {
        component: ComponentId,
        key: KeyEvent,
    },
    KeyUp {
        component: ComponentId,
        key: KeyEvent,
    },
    Focus {
        component: ComponentId,
    },
    Blur {
        component: ComponentId,
        origin: BlurOrigin,
    },
    Click {
        component: ComponentId,
        target: Target,
    },
    Pointer {
        component: ComponentId,
        phase: PointerPhase,
    },
    /// A click that landed outside every component.
    ClickOutside,
    Swap(SwapEvent),
}

impl WidgetEvent {
    pub fn component(&self) -> Option<&ComponentId> {
        match self {
            Self::KeyDown { component, .. }
            | Self::KeyUp { component, .. }
            | Self::Focus { component }
            | Self::Blur { component, .. }
            | Self::Click { component, .. }
            | Self::Pointer { component, .. } => Some(component),
            Self::Swap(swap) => Some(&swap.component),
            Self::ClickOutside => None,
        }
    }
}

/// Signals observable outside the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    ValueChanged { component: ComponentId },
}

/// Whether the host should perform the key's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    PreventDefault,
}

impl Flow {
    pub fn allows_default(self) -> bool {
        self == Self::Continue
    }
}
