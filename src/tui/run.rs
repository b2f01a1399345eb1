//! Kanban TUI entry point and setup.

use std::io;

use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};
use tracing::info;

use crate::tui::{app::App, board::Board, layout::LayoutConfig};

/// Initialise the terminal, run the board until the user quits, and
/// restore the terminal afterwards.
pub fn run_tui(layout: LayoutConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(e);
        }
    };

    let mut app = App::new(Board::with_sample_tasks(layout));
    let result = start(&mut app, &mut terminal);

    // Every restore step runs even if an earlier one fails
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();

    session_outcome(result, raw.and(screen).and(cursor))?;
    info!(tasks = app.board().total_tasks(), "board closed");
    Ok(())
}

/// The session's own error wins over a teardown error.
fn session_outcome(session: io::Result<()>, restore: io::Result<()>) -> io::Result<()> {
    session?;
    restore
}

fn start(app: &mut App, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    // crossterm reports no initial size, so lay out the board first
    let size = terminal.size()?;
    app.handle_event(Event::Resize(size.width, size.height));
    app.run(terminal)
}
