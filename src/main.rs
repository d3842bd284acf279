// Nimbus - symbolic weather dashboard
// Overview grid and Atlas graph over a drifting mock telemetry set

mod app;
mod atlas;
mod logging;
mod model;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::{
    event::{handle_key_event, handle_mouse_event},
    AppState,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

fn main() -> Result<()> {
    logging::init();

    // Validate the topology before touching the terminal
    let app = AppState::new().context("invalid seed topology")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "Event loop failed");
        println!("Error: {:?}", err);
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: AppState) -> Result<()> {
    loop {
        app.on_tick(Instant::now());
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !app.running {
            return Ok(());
        }

        if event::poll(app.refresh_config.ui_interval())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(&mut app, key.code);
                }
                Event::Mouse(mouse) => handle_mouse_event(&mut app, mouse),
                _ => {}
            }
        }
    }
}
