//! Enumerations for board structure.
//!
//! This module defines the column stages a task moves through and the
//! cyclic ordering used by focus navigation and task advancement.

/// The three board stages, ordered To Do → In Progress → Done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnKind {
    ToDo,
    InProgress,
    Done,
}

impl ColumnKind {
    /// All columns in board order.
    pub const ALL: [ColumnKind; 3] = [ColumnKind::ToDo, ColumnKind::InProgress, ColumnKind::Done];

    /// Position of this column on the board (0-based).
    pub fn index(self) -> usize {
        match self {
            ColumnKind::ToDo => 0,
            ColumnKind::InProgress => 1,
            ColumnKind::Done => 2,
        }
    }

    /// The following stage. Done wraps back to To Do.
    pub fn next(self) -> Self {
        match self {
            ColumnKind::ToDo => ColumnKind::InProgress,
            ColumnKind::InProgress => ColumnKind::Done,
            ColumnKind::Done => ColumnKind::ToDo,
        }
    }

    /// The preceding stage. To Do wraps back to Done.
    pub fn previous(self) -> Self {
        match self {
            ColumnKind::ToDo => ColumnKind::Done,
            ColumnKind::InProgress => ColumnKind::ToDo,
            ColumnKind::Done => ColumnKind::InProgress,
        }
    }

    /// Column heading shown above the list.
    pub fn title(self) -> &'static str {
        match self {
            ColumnKind::ToDo => "To Do",
            ColumnKind::InProgress => "In Progress",
            ColumnKind::Done => "Done",
        }
    }
}
