pub mod backend;
pub mod input_event;

pub use backend::{CursorPos, Line, LineStyle, Terminal, TerminalEvent, TerminalSize};
pub use input_event::{KeyCode, KeyEvent, KeyModifiers};
