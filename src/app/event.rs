use crate::app::command::Command;
use crate::search::SearchCompletion;
use crate::terminal::TerminalEvent;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Terminal(TerminalEvent),
    Command(Command),
    Search(SearchCompletion),
}
