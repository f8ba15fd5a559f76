//! shoplist - Article Price Calculator
//!
//! A terminal shopping list that keeps track of what things cost. Articles
//! are grouped by category in a fixed shop-walk order, can be edited, marked
//! as bought or removed, and the running total is always on screen. The list
//! lives in a plain CSV file that is rewritten after every change.

use crate::app::App;
use crate::config::Config;
use crate::models::{ArticleStore, CsvStorage};
use color_eyre::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io::{self};
use std::time::Duration;

mod app;
mod cli;
mod config;
mod error;
mod handlers;
mod models;
mod ui;

/// Application entry point.
/// Loads configuration and the article list before touching the terminal so
/// that any problem is reported on a normal screen. With arguments the CLI
/// runs; without, the TUI.
fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    let data_path = config.data_path()?;
    let store = ArticleStore::open(CsvStorage::new(data_path), config.categories.clone())?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        cli::execute_cli(&args, &config, store).map_err(|e| color_eyre::eyre::eyre!(e))?;
        return Ok(());
    }

    run_tui(App::new(store, config.currency.clone()))
}

/// Runs the interactive loop until the user quits, restoring the terminal
/// even when drawing fails.
fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if handlers::keys::handle_key_events(key, app) {
                    return Ok(());
                }
            }
        }
    }
}
