//! A single board column: an ordered task list plus its selection.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Padding},
    Frame,
};

use crate::fields::ColumnKind;
use crate::task::Task;
use crate::tui::layout::LayoutConfig;

/// Ordered tasks of one stage, rendered as a selectable list.
#[derive(Debug, Clone)]
pub struct Column {
    kind: ColumnKind,
    tasks: Vec<Task>,
    state: ListState,
}

impl Column {
    pub fn new(kind: ColumnKind) -> Self {
        Self {
            kind,
            tasks: Vec::new(),
            state: ListState::default(),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task. The first task of an empty column becomes selected.
    pub(crate) fn insert_at_end(&mut self, task: Task) {
        debug_assert_eq!(task.column, self.kind, "task placed in the wrong column");
        self.tasks.push(task);
        if self.state.selected().is_none() {
            self.state.select(Some(0));
        }
    }

    /// Remove the task at `index`, keeping the selection on a valid item.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<Task> {
        if index >= self.tasks.len() {
            return None;
        }
        let task = self.tasks.remove(index);
        let selected = match self.state.selected() {
            _ if self.tasks.is_empty() => None,
            Some(i) => Some(i.min(self.tasks.len() - 1)),
            None => None,
        };
        self.state.select(selected);
        Some(task)
    }

    /// Index of the selected task, if any task is selected.
    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected().filter(|&i| i < self.tasks.len())
    }

    pub fn selected(&self) -> Option<&Task> {
        self.selected_index().and_then(|i| self.tasks.get(i))
    }

    pub fn select_next(&mut self) {
        if let Some(i) = self.selected_index() {
            if i + 1 < self.tasks.len() {
                self.state.select(Some(i + 1));
            }
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(i) = self.selected_index() {
            self.state.select(Some(i.saturating_sub(1)));
        }
    }

    pub fn select_first(&mut self) {
        if !self.tasks.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.tasks.is_empty() {
            self.state.select(Some(self.tasks.len() - 1));
        }
    }

    /// List navigation keys. Anything else is ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            _ => {}
        }
    }

    /// Render the column. The focused column gets a rounded, coloured border.
    pub fn render(&mut self, f: &mut Frame, area: Rect, focused: bool, layout: &LayoutConfig) {
        let (pad_v, pad_h) = layout.column_padding;
        let title = Line::from(Span::styled(
            format!(" {} ({}) ", self.kind.title(), self.tasks.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        let block = if focused {
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(layout.focus_color))
        } else {
            Block::default()
                .title(title)
                .padding(Padding::new(pad_h, pad_h, pad_v, pad_v))
        };

        let items: Vec<ListItem> = self
            .tasks
            .iter()
            .map(|task| {
                ListItem::new(vec![
                    Line::from(task.title.clone()),
                    Line::from(Span::styled(
                        task.description.lines().next().unwrap_or("").to_string(),
                        Style::default().fg(layout.hint_color),
                    )),
                ])
            })
            .collect();

        let highlight = if focused {
            Style::default().fg(layout.focus_color).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("│ ");

        f.render_stateful_widget(list, area, &mut self.state);
    }
}
