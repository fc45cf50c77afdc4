//! The game state holder.
//!
//! [`Game`] owns the canonical board and turn. Winner, draw and status are
//! recomputed from the board on every call rather than stored.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules::{check_winner, is_draw};
use super::types::{Board, GameStatus, Player, Square};
use tracing::{debug, instrument};

/// The player who moves first on a fresh board.
pub const STARTING_PLAYER: Player = Player::X;

/// Tic-tac-toe game state: a board and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: STARTING_PLAYER,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next accepted move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the winner, if any line is complete.
    pub fn winner(&self) -> Option<Player> {
        check_winner(&self.board)
    }

    /// Returns true when the board is full with no winner.
    pub fn is_draw(&self) -> bool {
        is_draw(&self.board)
    }

    /// Returns the derived game status.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if self.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.to_move)
        }
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Places the current player's mark, or explains why it cannot.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the board already has a winner.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn try_play(&mut self, pos: Position) -> Result<Move, MoveError> {
        if self.winner().is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mv = Move::new(self.to_move, pos);
        self.board.set(pos, Square::Occupied(mv.player));
        self.to_move = mv.player.opponent();
        debug!(%mv, "Move applied");
        Ok(mv)
    }

    /// Plays the cell at `index` (0-8).
    ///
    /// Out-of-range indices, occupied cells and moves after a win are
    /// ignored: the board and turn are left untouched.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, index: usize) {
        let Some(pos) = Position::from_index(index) else {
            debug!(index, "Ignoring out-of-range cell");
            return;
        };
        if let Err(e) = self.try_play(pos) {
            debug!(error = %e, "Ignoring rejected move");
        }
    }

    /// Starts over: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
