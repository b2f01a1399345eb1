//! Kanban board state and rendering.
//!
//! The board owns the three columns, tracks which column has focus and
//! moves tasks between columns. Every task on the board sits in the column
//! named by its own `column` field.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};
use tracing::{debug, info};

use crate::fields::ColumnKind;
use crate::task::{Task, TaskCreated};
use crate::tui::{
    column::Column,
    enums::BoardCommand,
    layout::LayoutConfig,
};

/// Tasks seeded into a fresh board, per column.
const SAMPLE_TASKS: [(ColumnKind, &str, &str); 5] = [
    (ColumnKind::ToDo, "Write documentation", "Write documentation for the project"),
    (ColumnKind::ToDo, "Implement feature X", "Implement feature X according to the specification"),
    (ColumnKind::ToDo, "Fix bug Y", "Fix bug Y that causes the application to crash"),
    (ColumnKind::InProgress, "In progress", "In progress"),
    (ColumnKind::Done, "Done", "Done"),
];

/// A task that moved between columns.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Moved {
    pub task_id: u64,
    pub title: String,
    pub from: ColumnKind,
    pub to: ColumnKind,
}

/// The three columns plus focus.
pub struct Board {
    columns: [Column; 3],
    focus: ColumnKind,
    next_id: u64,
    layout: LayoutConfig,
    column_size: Option<(u16, u16)>, // set by the first resize
}

impl Board {
    /// Create an empty board focused on To Do.
    pub fn new(layout: LayoutConfig) -> Self {
        Board {
            columns: ColumnKind::ALL.map(Column::new),
            focus: ColumnKind::ToDo,
            next_id: 1,
            layout,
            column_size: None,
        }
    }

    /// Create a board holding the demonstration tasks.
    pub fn with_sample_tasks(layout: LayoutConfig) -> Self {
        let mut board = Board::new(layout);
        for (column, title, description) in SAMPLE_TASKS {
            board.receive_created_task(TaskCreated {
                title: title.to_string(),
                description: description.to_string(),
                column,
            });
        }
        board
    }

    pub fn focus(&self) -> ColumnKind {
        self.focus
    }

    pub fn column(&self, kind: ColumnKind) -> &Column {
        &self.columns[kind.index()]
    }

    pub(crate) fn column_mut(&mut self, kind: ColumnKind) -> &mut Column {
        &mut self.columns[kind.index()]
    }

    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        debug!(focus = ?self.focus, "focus moved right");
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
        debug!(focus = ?self.focus, "focus moved left");
    }

    /// Move the focused column's selected task to the end of the next column.
    ///
    /// Returns `None` without touching the board when nothing is selected.
    /// Focus does not follow the task.
    pub fn advance_selected(&mut self) -> Option<Moved> {
        let column = &mut self.columns[self.focus.index()];
        let index = column.selected_index()?;
        let mut task = column.remove_at(index)?;

        let from = task.column;
        task.advance();
        let moved = Moved {
            task_id: task.id,
            title: task.title.clone(),
            from,
            to: task.column,
        };
        self.columns[task.column.index()].insert_at_end(task);

        info!(task_id = moved.task_id, from = ?moved.from, to = ?moved.to, "advanced task");
        Some(moved)
    }

    /// Append a task produced by the entry form to its target column.
    ///
    /// Assigns and returns the task's id.
    pub fn receive_created_task(&mut self, created: TaskCreated) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let task = Task::new(id, created.column, created.title, created.description);
        info!(task_id = id, column = ?task.column, "task added");
        self.columns[task.column.index()].insert_at_end(task);
        id
    }

    /// Recompute column dimensions for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.column_size = Some(self.layout.column_size(width, height));
        debug!(width, height, column_size = ?self.column_size, "board resized");
    }

    pub fn column_size(&self) -> Option<(u16, u16)> {
        self.column_size
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Handle a key while the board is the active view.
    pub fn handle_key(&mut self, key: KeyEvent) -> BoardCommand {
        match key.code {
            KeyCode::Char('q') => BoardCommand::Quit,
            KeyCode::Left | KeyCode::Char('h') => {
                self.focus_previous();
                BoardCommand::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.focus_next();
                BoardCommand::None
            }
            KeyCode::Enter => self
                .advance_selected()
                .map_or(BoardCommand::None, BoardCommand::Moved),
            KeyCode::Char('n') => BoardCommand::NewTask,
            _ => {
                let focus = self.focus;
                self.column_mut(focus).handle_key(key);
                BoardCommand::None
            }
        }
    }

    /// Render the three columns side by side.
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some((width, height)) = self.column_size else {
            let loading = Paragraph::new("loading...")
                .style(Style::default().fg(self.layout.hint_color))
                .alignment(Alignment::Center);
            f.render_widget(loading, area);
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(height.min(area.height)), Constraint::Min(0)])
            .split(area);

        let columns_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(width),
                Constraint::Length(width),
                Constraint::Length(width),
            ])
            .split(rows[0]);

        let layout = self.layout;
        let focus = self.focus;
        for (column, &column_area) in self.columns.iter_mut().zip(columns_layout.iter()) {
            let focused = column.kind() == focus;
            column.render(f, column_area, focused, &layout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn titles(board: &Board, kind: ColumnKind) -> Vec<String> {
        board.column(kind).tasks().iter().map(|t| t.title.clone()).collect()
    }

    fn created(title: &str, column: ColumnKind) -> TaskCreated {
        TaskCreated {
            title: title.to_string(),
            description: String::new(),
            column,
        }
    }

    /// ToDo=[T1,T2,T3], InProgress=[I1], Done=[D1], focus=ToDo.
    fn scenario_board() -> Board {
        let mut board = Board::new(LayoutConfig::default());
        for title in ["T1", "T2", "T3"] {
            board.receive_created_task(created(title, ColumnKind::ToDo));
        }
        board.receive_created_task(created("I1", ColumnKind::InProgress));
        board.receive_created_task(created("D1", ColumnKind::Done));
        board
    }

    fn assert_columns_consistent(board: &Board) {
        for kind in ColumnKind::ALL {
            assert!(board.column(kind).tasks().iter().all(|t| t.column == kind));
        }
    }

    #[test]
    fn test_focus_cycle_round_trips() {
        let mut board = Board::new(LayoutConfig::default());
        for start in ColumnKind::ALL {
            while board.focus() != start {
                board.focus_next();
            }
            board.focus_next();
            board.focus_previous();
            assert_eq!(board.focus(), start);
            board.focus_previous();
            board.focus_next();
            assert_eq!(board.focus(), start);
        }
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut board = Board::new(LayoutConfig::default());
        board.focus_previous();
        assert_eq!(board.focus(), ColumnKind::Done);
        board.focus_next();
        assert_eq!(board.focus(), ColumnKind::ToDo);
    }

    #[test]
    fn test_advance_first_todo_task() {
        let mut board = scenario_board();
        board.column_mut(ColumnKind::ToDo).select_first();

        let moved = board.advance_selected().unwrap();
        assert_eq!(moved.title, "T1");
        assert_eq!(moved.from, ColumnKind::ToDo);
        assert_eq!(moved.to, ColumnKind::InProgress);

        assert_eq!(titles(&board, ColumnKind::ToDo), ["T2", "T3"]);
        assert_eq!(titles(&board, ColumnKind::InProgress), ["I1", "T1"]);
        assert_eq!(titles(&board, ColumnKind::Done), ["D1"]);
        assert_eq!(board.column(ColumnKind::InProgress).tasks()[1].column, ColumnKind::InProgress);
        assert_eq!(board.focus(), ColumnKind::ToDo);
        assert_columns_consistent(&board);
    }

    #[test]
    fn test_advance_wraps_done_to_todo() {
        let mut board = scenario_board();
        board.focus_previous();
        assert_eq!(board.focus(), ColumnKind::Done);

        let moved = board.advance_selected().unwrap();
        assert_eq!(moved.to, ColumnKind::ToDo);
        assert!(board.column(ColumnKind::Done).is_empty());
        let last = board.column(ColumnKind::ToDo).tasks().last().unwrap();
        assert_eq!(last.title, "D1");
        assert_eq!(last.column, ColumnKind::ToDo);
        assert_columns_consistent(&board);
    }

    #[test]
    fn test_advance_preserves_task_count() {
        let mut board = scenario_board();
        let total = board.total_tasks();
        for _ in 0..4 {
            for _ in 0..3 {
                board.advance_selected();
                assert_eq!(board.total_tasks(), total);
                assert_columns_consistent(&board);
                board.focus_next();
            }
            board.column_mut(board.focus()).select_last();
        }
    }

    #[test]
    fn test_advance_on_empty_column_is_noop() {
        let mut board = Board::new(LayoutConfig::default());
        board.receive_created_task(created("I1", ColumnKind::InProgress));

        assert!(board.advance_selected().is_none());
        assert_eq!(board.focus(), ColumnKind::ToDo);
        assert!(board.column(ColumnKind::ToDo).is_empty());
        assert_eq!(titles(&board, ColumnKind::InProgress), ["I1"]);
        assert!(board.column(ColumnKind::Done).is_empty());
    }

    #[test]
    fn test_received_tasks_get_unique_ids() {
        let mut board = Board::with_sample_tasks(LayoutConfig::default());
        let first = board.receive_created_task(created("x", ColumnKind::Done));
        let second = board.receive_created_task(created("y", ColumnKind::Done));
        assert_eq!(first, 6);
        assert_eq!(second, 7);

        let mut ids: Vec<u64> = ColumnKind::ALL
            .iter()
            .flat_map(|&k| board.column(k).tasks().iter().map(|t| t.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), board.total_tasks());
    }

    #[test]
    fn test_sample_board_layout() {
        let board = Board::with_sample_tasks(LayoutConfig::default());
        assert_eq!(board.column(ColumnKind::ToDo).len(), 3);
        assert_eq!(titles(&board, ColumnKind::InProgress), ["In progress"]);
        assert_eq!(titles(&board, ColumnKind::Done), ["Done"]);
    }

    #[test]
    fn test_key_bindings() {
        let mut board = scenario_board();
        assert_eq!(board.handle_key(KeyEvent::from(KeyCode::Right)), BoardCommand::None);
        assert_eq!(board.focus(), ColumnKind::InProgress);
        assert_eq!(board.handle_key(KeyEvent::from(KeyCode::Char('h'))), BoardCommand::None);
        assert_eq!(board.focus(), ColumnKind::ToDo);

        board.handle_key(KeyEvent::from(KeyCode::Char('j')));
        match board.handle_key(KeyEvent::from(KeyCode::Enter)) {
            BoardCommand::Moved(moved) => assert_eq!(moved.title, "T2"),
            other => panic!("expected a move, got {:?}", other),
        }

        assert_eq!(board.handle_key(KeyEvent::from(KeyCode::Char('n'))), BoardCommand::NewTask);
        assert_eq!(board.handle_key(KeyEvent::from(KeyCode::Char('q'))), BoardCommand::Quit);
    }

    #[test]
    fn test_resize_sets_column_size() {
        let mut board = Board::new(LayoutConfig::default());
        assert_eq!(board.column_size(), None);
        board.resize(90, 30);
        assert_eq!(board.column_size(), Some((30, 27)));
    }

    #[test]
    fn test_render_before_and_after_resize() {
        let mut board = scenario_board();
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                board.render(f, area);
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("loading..."));

        board.resize(90, 20);
        terminal
            .draw(|f| {
                let area = f.area();
                board.render(f, area);
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("To Do (3)"));
        assert!(text.contains("In Progress (1)"));
        assert!(text.contains("Done (1)"));
        assert!(text.contains("T1"));
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}
