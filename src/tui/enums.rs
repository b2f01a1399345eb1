//! Enumerations for TUI state management.

use crate::tui::board::Moved;

/// Which field of the entry form is receiving keystrokes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormPhase {
    EditingTitle,
    EditingDescription,
}

/// What the board asks of the controller after handling a key.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum BoardCommand {
    None,
    Quit,
    NewTask,
    Moved(Moved),
}
