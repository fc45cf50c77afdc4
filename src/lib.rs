//! Strictly Board - an interactive tic-tac-toe board for the terminal.
//!
//! # Architecture
//!
//! - **Game**: the state holder owning the board and turn; winner and draw
//!   are recomputed from the board, never stored
//! - **Rules**: pure win/draw evaluation over the eight winning lines
//! - **Celebration**: edge-triggered controller that shows confetti for a
//!   fixed window after a win
//! - **TUI**: ratatui rendering, cell widgets, keyboard and mouse input
//!
//! # Example
//!
//! ```
//! use strictly_board::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.play_move(index);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.status().to_string(), "Winner: X's!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{BoardConfig, ConfigError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Celebration, CelebrationChange, CelebrationExpired, CelebrationPhase,
    DEFAULT_CELEBRATION_DURATION, Direction, Game, GameStatus, Move, MoveError, Player, Position,
    STARTING_PLAYER, Square,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::{LINES, check_winner, is_draw, is_full};

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, BoardLayout, CELL_HEIGHT, CELL_WIDTH, Cell, Confetti, draw, event_action,
    key_action, mouse_action, run,
};
