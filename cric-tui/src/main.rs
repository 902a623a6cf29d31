//! cric-tui - Terminal UI for CricConnect
//!
//! Browse local cricket matches, join one, or organize your own, all
//! from the terminal. State lives in memory and starts from seed data
//! on every run; only the theme preference is persisted.

use libcricconnect::logging;
use libcricconnect::prefs::Prefs;
use tracing::info;

use cric_tui::{
    app::{event::EventHandler, reduce, AppState},
    error::Result,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

fn main() -> anyhow::Result<()> {
    // Logging goes to stderr; initialize before entering raw mode
    logging::init_default();

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal);

    restore_terminal(terminal)?;

    result?;
    Ok(())
}

fn run_app(terminal: &mut Tui) -> Result<()> {
    // Initialize application state from seed data and stored preferences
    let prefs = Prefs::load_or_detect();
    let mut state = AppState::new();
    state.theme = prefs.theme;

    info!(theme = ?state.theme, matches = state.matches.len(), "starting");

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    // Main event loop: render, poll, reduce
    loop {
        terminal.draw(|frame| {
            ui::render(frame, &state);
        })?;

        let theme_before = state.theme;

        let tui_event = event_handler.next()?;
        state = reduce(state, tui_event.into());

        // Theme changes are the only state persisted across runs.
        // Best-effort: a failed write is logged, never fatal.
        if state.theme != theme_before {
            Prefs { theme: state.theme }.store();
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
