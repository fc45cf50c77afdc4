//! Tic-tac-toe: board types, rules, the game state holder and the
//! end-of-game celebration controller.

mod action;
mod celebration;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use celebration::{
    Celebration, CelebrationChange, CelebrationExpired, CelebrationPhase,
    DEFAULT_CELEBRATION_DURATION,
};
pub use game::{Game, STARTING_PLAYER};
pub use position::{Direction, Position};
pub use types::{Board, GameStatus, Player, Square};
