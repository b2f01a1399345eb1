//! Task data structure.
//!
//! A `Task` is one card on the board. Its `column` field always names the
//! column whose list currently holds it; only the board moves tasks, and it
//! updates the field in the same step as the list move.

use crate::fields::ColumnKind;

/// A unit of work living in exactly one board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub column: ColumnKind,
}

impl Task {
    pub fn new(id: u64, column: ColumnKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            column,
        }
    }

    /// Move the task's stage one step forward, wrapping Done to To Do.
    ///
    /// Callers must relocate the task into the matching column list in the
    /// same operation.
    pub(crate) fn advance(&mut self) {
        self.column = self.column.next();
    }
}

/// Result of a completed entry form, delivered to the board.
///
/// Carries no id: the board assigns one when the task is received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCreated {
    pub title: String,
    pub description: String,
    pub column: ColumnKind,
}
