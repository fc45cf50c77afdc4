//! Application state and logic.

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use super::cell::Cell;
use super::confetti::Confetti;
use super::layout::BoardLayout;
use crate::config::BoardConfig;
use crate::games::tictactoe::{
    Celebration, CelebrationChange, CelebrationExpired, Direction, Game, Position,
};

/// Everything the input surface can ask the board to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the given cell.
    Play(Position),
    /// The "Play Again" control.
    Reset,
    /// Move the keyboard cursor one cell.
    MoveCursor(Direction),
    /// Leave the application.
    Quit,
}

/// Main application state.
///
/// Holds the canonical game, the celebration controller and the confetti it
/// drives. Rendering reads from here and never writes.
#[derive(Debug)]
pub struct App {
    game: Game,
    celebration: Celebration,
    expiries: mpsc::UnboundedReceiver<CelebrationExpired>,
    confetti: Option<Confetti>,
    confetti_particles: usize,
    cursor: Position,
    viewport: Rect,
    running: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &BoardConfig) -> Self {
        let (celebration, expiries) = Celebration::new(config.celebration_duration());
        Self {
            game: Game::new(),
            celebration,
            expiries,
            confetti: None,
            confetti_particles: *config.confetti_particles(),
            cursor: Position::Center,
            viewport: Rect::default(),
            running: true,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the mounted confetti, if a celebration is showing.
    pub fn confetti(&self) -> Option<&Confetti> {
        self.confetti.as_ref()
    }

    /// Returns true while the celebratory effect is visible.
    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_celebrating()
    }

    /// Returns false once the user has asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Gets the last known viewport.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Records the terminal size used for layout and confetti.
    pub fn set_viewport(&mut self, viewport: Rect) {
        if viewport != self.viewport {
            debug!(?viewport, "Viewport changed");
            self.viewport = viewport;
            if let Some(confetti) = &mut self.confetti {
                confetti.resize(viewport);
            }
        }
    }

    /// Board geometry for the current viewport.
    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.viewport)
    }

    /// The nine cells as they should be drawn right now.
    pub fn cells(&self) -> [Cell; 9] {
        let board = self.game.board();
        Position::ALL.map(|pos| {
            Cell::new(board.get(pos), Action::Play(pos)).focused(pos == self.cursor)
        })
    }

    /// Applies an action, then lets the celebration react to the result.
    ///
    /// A winning move starts the celebration timer on the current tokio
    /// runtime, if there is one.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Play(pos) => {
                self.cursor = pos;
                self.game.play_move(pos.to_index());
            }
            Action::Reset => self.game.reset(),
            Action::MoveCursor(direction) => {
                self.cursor = self.cursor.step(direction);
                return;
            }
            Action::Quit => {
                info!("Quit requested");
                self.running = false;
                return;
            }
        }

        let change = self.celebration.observe(self.game.winner());
        self.apply(change);
    }

    /// Periodic housekeeping: handles timer expiries and animates confetti.
    pub fn on_tick(&mut self) {
        while let Ok(expired) = self.expiries.try_recv() {
            let change = self.celebration.expire(expired);
            self.apply(change);
        }
        if let Some(confetti) = &mut self.confetti {
            confetti.tick();
        }
    }

    /// Maps a mouse press to the action of whatever is under it.
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        let layout = self.layout();
        if self.game.is_over() && layout.play_again_contains(column, row) {
            return Some(Action::Reset);
        }
        layout
            .cell_at(column, row)
            .map(|pos| self.cells()[pos.to_index()].activate())
    }

    fn apply(&mut self, change: Option<CelebrationChange>) {
        match change {
            Some(CelebrationChange::Started(winner)) => {
                debug!(%winner, particles = self.confetti_particles, "Mounting confetti");
                self.confetti = Some(Confetti::mount(
                    self.viewport,
                    self.confetti_particles,
                    &mut rand::rng(),
                ));
            }
            Some(CelebrationChange::Ended) => {
                debug!("Unmounting confetti");
                self.confetti = None;
            }
            None => {}
        }
    }
}
