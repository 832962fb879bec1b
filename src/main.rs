mod config;
mod draft;
mod error;
mod logging;
mod models;
mod terminal;
mod ui;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::terminal::TerminalGuard;
use crate::ui::{App, render};

/// Terminal form for brigade dispatch and return records
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Config file (default: <config_dir>/brigadas/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    let log_path = logging::init(&config)?;
    info!(log = %log_path.display(), "starting");

    // records live only as long as this app value
    let mut app = App::new();

    // set up the terminal; the guard restores it on every exit path
    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);
    drop(guard);

    info!(records = app.store.len(), "exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key) {
                break;
            }
        }
    }
    Ok(())
}
