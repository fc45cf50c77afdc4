//! Terminal UI for the board.

mod app;
mod cell;
mod confetti;
mod input;
mod layout;
mod ui;

pub use app::{Action, App};
pub use cell::Cell;
pub use confetti::Confetti;
pub use input::{event_action, key_action, mouse_action};
pub use layout::{BoardLayout, CELL_HEIGHT, CELL_WIDTH};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use std::io;
use tracing::{error, info, instrument};

use crate::config::BoardConfig;

/// Runs the board until the user quits, restoring the terminal afterwards.
pub async fn run(config: BoardConfig) -> Result<()> {
    info!("Starting board");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Board loop error");
    }
    info!("Board closed");
    res
}

/// Draw, wait for an event or a tick, repeat.
#[instrument(skip_all, fields(tick_ms = *config.tick_ms()))]
async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, config: &BoardConfig) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    // Dropping the app on return cancels any pending celebration timer.
    let mut app = App::new(config);
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(config.tick_rate());

    while app.is_running() {
        let size = terminal.size()?;
        app.set_viewport(Rect::new(0, 0, size.width, size.height));
        terminal.draw(|f| draw(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => app.on_tick(),
            event = events.next() => match event {
                Some(Ok(event)) => {
                    if let Some(action) = event_action(&app, event) {
                        app.dispatch(action);
                    }
                }
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }

    Ok(())
}
