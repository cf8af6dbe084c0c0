pub mod app;
pub mod config;
pub mod core;
pub mod runtime;
pub mod search;
pub mod surface;
pub mod terminal;
pub mod widget;

pub use config::{AutocompleteConfig, ComponentOptions, ConfigError, Settings};
pub use core::{ComponentId, ItemId, Target};
pub use runtime::{BlurOrigin, Flow, Notification, PointerPhase, SwapEvent, SwapKind, WidgetEvent};
pub use search::SearchProvider;
pub use surface::{MemorySurface, Surface};
pub use widget::{Autocomplete, Host, Phase};
