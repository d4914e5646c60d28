//! Persona Directory - terminal persona browser
//!
//! Renders the persona catalog as a card grid with free-text search,
//! category filtering, a detail overlay, clipboard copy, JSON export,
//! and a dark/light theme.

mod app;
mod clipboard;
mod keybindings;
mod mode;
mod theme;
mod views;
mod widgets;

use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use app::App;
use persona_core::Catalog;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    tracing_subscriber::fmt::init();

    // The catalog is loaded once and never mutated afterwards; user
    // personas are optional and failure to load them is not fatal.
    let catalog = match Catalog::load_standard() {
        Ok(catalog) => catalog,
        Err(err) => {
            warn!("failed to load user personas: {err}; using builtin catalog");
            Catalog::builtin()
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(catalog);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal and clear the page-wide theme marker
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    theme::reset();

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                return Ok(());
            }
        }
    }
}
