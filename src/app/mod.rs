//! Application core

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Position, Rect},
    Terminal,
};
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

pub mod state;
use state::AppState;

use crate::tui;
use crate::tui::widgets::catalog_card::CARD_HEIGHT;
use crate::types::config::OutputMode;
use crate::types::Catalog;
use crate::util::default_catalog_path;

pub use crate::types::Config;

/// Width of the screen rendered in print mode.
const PRINT_WIDTH: u16 = 100;

pub async fn run(config: Config) -> Result<()> {
    let catalog = load_catalog(config.catalog_path.as_deref())?;
    let mut state = AppState::new(catalog);

    if config.output_mode == OutputMode::Print {
        for line in print_lines(&state) {
            println!("{}", line);
        }
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut state).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Loads the catalog to display.
///
/// An explicit path must exist. Without one, the default location is
/// tried and a missing file falls back to the demo catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    if let Some(path) = path {
        return Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()));
    }

    let Some(default_path) = default_catalog_path() else {
        debug!("No config directory, using demo catalog");
        return Ok(Catalog::demo());
    };

    match Catalog::load(&default_path) {
        Ok(catalog) => {
            info!(path = %default_path.display(), "Using catalog from config directory");
            Ok(catalog)
        }
        Err(e) if e.is_not_found() => {
            debug!(path = %default_path.display(), "No catalog file, using demo catalog");
            Ok(Catalog::demo())
        }
        Err(e) => Err(e).context("Failed to load default catalog"),
    }
}

/// Renders the full screen off-terminal and returns it as text lines.
#[must_use]
pub fn print_lines(state: &AppState) -> Vec<String> {
    let card_rows = (state.offers().len() as u16)
        .saturating_mul(CARD_HEIGHT)
        .saturating_add(3);
    let area = Rect::new(0, 0, PRINT_WIDTH, card_rows.max(20));

    let mut buf = Buffer::empty(area);
    tui::render_screen(state, area, &mut buf);
    tui::buffer_lines(&buf)
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    let mut events = EventStream::new();

    loop {
        if state.needs_render() {
            terminal.draw(|frame| tui::render(frame, state))?;
            state.mark_rendered();
        }

        let Some(event) = events.next().await else {
            break;
        };

        match event {
            Ok(Event::Key(key)) => match (key.code, key.modifiers) {
                (KeyCode::Char('c'), KeyModifiers::CONTROL)
                | (KeyCode::Char('q'), KeyModifiers::NONE) => break,
                _ => state.handle_key(key),
            },
            Ok(Event::Mouse(mouse)) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                state.handle_click(
                    Rect::new(0, 0, size.width, size.height),
                    Position::new(mouse.column, mouse.row),
                );
            }
            Ok(Event::Resize(_, _)) => state.mark_full_redraw(),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Failed to read terminal event"),
        }
    }

    Ok(())
}
