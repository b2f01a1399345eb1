//! # kanban - Terminal Kanban Board
//!
//! A three-column kanban board (To Do, In Progress, Done) that runs in the
//! terminal. Tasks live in memory for the length of the session.
//!
//! ## Keys
//!
//! - `←`/`→` (or `h`/`l`) - move focus between columns
//! - `↑`/`↓` (or `k`/`j`) - select a task in the focused column
//! - `Enter` - advance the selected task to the next column (Done wraps to To Do)
//! - `n` - open the new-task form for the focused column
//! - `q` / `Ctrl+C` - quit
//!
//! In the new-task form, type the title and press `Enter`, then the
//! description and press `Enter` again. `Esc` cancels.
//!
//! ## Logging
//!
//! ```bash
//! RUST_LOG=kanban=debug kanban --log-file /tmp/kanban.log
//! ```

use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod fields;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod board;
    pub mod colors;
    pub mod column;
    pub mod enums;
    pub mod input;
    pub mod layout;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use tui::{layout::LayoutConfig, run::run_tui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the UI, so logs only go to an explicit file
    if let Some(path) = cli.log_file.as_ref() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("kanban=info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    tracing::info!("=== kanban starting ===");
    run_tui(LayoutConfig::default()).context("terminal session failed")?;
    tracing::info!("=== kanban exited ===");
    Ok(())
}
