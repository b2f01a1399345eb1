//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the board, routes every
//! input event to whichever view is active (the board or the entry form)
//! and performs the hand-off between the two.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::info;

use crate::{
    fields::ColumnKind,
    tui::{
        board::Board,
        enums::{BoardCommand, FormPhase},
        task_form::{EntryForm, FormOutcome},
    },
};

/// The view currently receiving input.
///
/// The board is never stored here; it lives in `App` for the whole session
/// and is left untouched while a form is open.
pub enum ActiveView {
    Board,
    Form(EntryForm),
}

/// Application controller for the terminal user interface.
pub struct App {
    board: Board,
    active: ActiveView,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Create an App around an existing board, with the board active.
    pub fn new(board: Board) -> Self {
        App {
            board,
            active: ActiveView::Board,
            status_message: String::new(),
            should_quit: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActiveView {
        &self.active
    }

    pub fn is_board_active(&self) -> bool {
        matches!(self.active, ActiveView::Board)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Process one terminal event to completion.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // The board owns the column layout, so it sees every resize
            Event::Resize(width, height) => self.board.resize(width, height),
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            // Mouse capture and bracketed paste are never enabled; focus
            // changes need no reaction from either view
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.clear_status_message();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if let ActiveView::Form(form) = &mut self.active {
            let outcome = form.handle_key(key);
            self.finish_form(outcome);
        } else {
            let command = self.board.handle_key(key);
            self.apply_board_command(command);
        }
    }

    fn apply_board_command(&mut self, command: BoardCommand) {
        match command {
            BoardCommand::None => {}
            BoardCommand::Quit => self.quit(),
            BoardCommand::NewTask => self.open_form(),
            BoardCommand::Moved(moved) => {
                self.set_status_message(format!("Moved '{}' to {}", moved.title, moved.to.title()));
            }
        }
    }

    /// Open the entry form aimed at the column focused right now.
    fn open_form(&mut self) {
        let target = self.board.focus();
        info!(column = ?target, "entry form opened");
        self.active = ActiveView::Form(EntryForm::new(target));
    }

    fn finish_form(&mut self, outcome: FormOutcome) {
        match outcome {
            FormOutcome::Pending => {}
            FormOutcome::Submitted(created) => {
                let column = created.column;
                let id = self.board.receive_created_task(created);
                self.active = ActiveView::Board;
                self.set_status_message(format!("Created task #{} in {}", id, column.title()));
            }
            FormOutcome::Cancelled => {
                info!("entry form cancelled");
                self.active = ActiveView::Board;
                self.set_status_message("Cancelled new task".to_string());
            }
        }
    }

    fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match &self.active {
                ActiveView::Board => {
                    let counts: Vec<String> = ColumnKind::ALL
                        .iter()
                        .map(|&k| format!("{}: {}", k.title(), self.board.column(k).len()))
                        .collect();
                    format!(
                        "{} | ←/→ column  ↑/↓ select  Enter advance  n new  q quit",
                        counts.join("  ")
                    )
                }
                ActiveView::Form(form) => match form.phase() {
                    FormPhase::EditingTitle => "New task: title".to_string(),
                    FormPhase::EditingDescription => "New task: description".to_string(),
                },
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().fg(self.board.layout().hint_color))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function. The form, when open, is drawn over the board.
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        self.board.render(f, chunks[0]);
        if let ActiveView::Form(form) = &self.active {
            form.render(f, chunks[0], self.board.layout());
        }
        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(50))? {
                self.handle_event(event::read()?);
            }
        }
        Ok(())
    }
}
