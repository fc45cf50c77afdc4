//! Moves and move errors for tic-tac-toe.

use super::{Player, Position};
use derive_more::{Display, Error};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display("{player} -> {position}")]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

/// Reason a move was turned away.
///
/// The board surface never shows these to the player; they exist so
/// rejections can be traced and tested.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,
}
