use std::path::PathBuf;

use clap::Parser;

/// Three-column terminal kanban board.
/// Tasks live in memory only and are gone when the board is closed.
#[derive(Parser, Debug)]
#[command(name = "kanban", version, about = "Terminal kanban board")]
pub struct Cli {
    /// Write diagnostic logs to this file (filter with RUST_LOG).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
