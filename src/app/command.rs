use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    /// Move input focus into or out of the widget.
    ToggleFocus,
    InputKey(KeyEvent),
}

pub fn map_key_to_command(key: KeyEvent) -> Command {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Command::Exit,
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => Command::ToggleFocus,
        _ => Command::InputKey(key),
    }
}
