//! Task entry form for the terminal user interface.
//!
//! This module provides the `EntryForm` used to create a new task. The form
//! collects a title and then a description, strictly in that order, and
//! always targets the column that had focus when it was opened.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    fields::ColumnKind,
    task::TaskCreated,
    tui::{enums::FormPhase, input::InputField, layout::LayoutConfig, utils::centered_rect},
};

/// Result of feeding one key to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Still collecting input.
    Pending,
    /// Both fields confirmed; the form is finished.
    Submitted(TaskCreated),
    /// Abandoned without producing a task.
    Cancelled,
}

/// Two-step modal form: title first, then description.
pub struct EntryForm {
    target: ColumnKind,
    pub title: InputField,
    pub description: InputField,
    phase: FormPhase,
}

impl EntryForm {
    /// Open a form whose task will land in `target`.
    pub fn new(target: ColumnKind) -> Self {
        let mut title = InputField::new();
        title.active = true;
        Self {
            target,
            title,
            description: InputField::multiline(),
            phase: FormPhase::EditingTitle,
        }
    }

    pub fn target(&self) -> ColumnKind {
        self.target
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// The field that receives editing keys in the current phase.
    fn active_field_mut(&mut self) -> &mut InputField {
        match self.phase {
            FormPhase::EditingTitle => &mut self.title,
            FormPhase::EditingDescription => &mut self.description,
        }
    }

    /// Handle one key press.
    ///
    /// Enter advances title → description → submit, Esc cancels from either
    /// phase, and every other key is passed to the active field.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Esc => FormOutcome::Cancelled,
            KeyCode::Enter if !key.modifiers.contains(KeyModifiers::ALT) => self.confirm(),
            _ => {
                self.active_field_mut().handle_key(key);
                FormOutcome::Pending
            }
        }
    }

    fn confirm(&mut self) -> FormOutcome {
        match self.phase {
            FormPhase::EditingTitle => {
                self.title.active = false;
                self.description.active = true;
                self.phase = FormPhase::EditingDescription;
                FormOutcome::Pending
            }
            FormPhase::EditingDescription => FormOutcome::Submitted(TaskCreated {
                title: self.title.value.clone(),
                description: self.description.value.clone(),
                column: self.target,
            }),
        }
    }

    /// Render the form as a popup over `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, layout: &LayoutConfig) {
        let popup = centered_rect(60, 50, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(format!(" New task → {} ", self.target.title()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(layout.focus_color));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(3),    // Description
                Constraint::Length(1), // Hints
            ])
            .split(inner);

        let field_style = |active: bool| {
            if active {
                Style::default().fg(layout.active_field_color)
            } else {
                Style::default()
            }
        };

        let title_scroll = field_scroll(&self.title, chunks[0]);
        let title_input = Paragraph::new(self.title.value.as_str())
            .scroll(title_scroll)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Title")
                    .border_style(field_style(self.title.active)),
            );
        f.render_widget(title_input, chunks[0]);

        let desc_scroll = field_scroll(&self.description, chunks[1]);
        let desc_input = Paragraph::new(self.description.value.as_str())
            .scroll(desc_scroll)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Description")
                    .border_style(field_style(self.description.active)),
            );
        f.render_widget(desc_input, chunks[1]);

        let hint = match self.phase {
            FormPhase::EditingTitle => "Enter: next field  Esc: cancel",
            FormPhase::EditingDescription => "Enter: create task  Alt+Enter: new line  Esc: cancel",
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(layout.hint_color).add_modifier(Modifier::ITALIC),
            ))),
            chunks[2],
        );

        // Place the terminal cursor inside the active field
        let (field, field_area) = match self.phase {
            FormPhase::EditingTitle => (&self.title, chunks[0]),
            FormPhase::EditingDescription => (&self.description, chunks[1]),
        };
        let (line, col) = field.cursor_line_col();
        let (scroll_y, scroll_x) = field_scroll(field, field_area);
        let x = field_area.x + 1 + (saturate(col) - scroll_x);
        let y = field_area.y + 1 + (saturate(line) - scroll_y);
        f.set_cursor_position((x, y));
    }
}

fn saturate(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// First visible position so that `pos` stays inside `extent` cells.
fn scroll_offset(pos: usize, extent: u16) -> u16 {
    saturate(pos).saturating_sub(extent.max(1) - 1)
}

/// `(rows, columns)` to scroll a bordered field so its cursor is visible.
fn field_scroll(field: &InputField, area: Rect) -> (u16, u16) {
    let (line, col) = field.cursor_line_col();
    (
        scroll_offset(line, area.height.saturating_sub(2)),
        scroll_offset(col, area.width.saturating_sub(2)),
    )
}
