//! Move engine for tic-tac-toe.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{check_winner, is_draw};
use super::{Board, GameStatus, Mark, Position, Square};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board, the mark to move and the move history. Occupied
/// squares are never rewritten and the mover only changes after an
/// accepted move that leaves the game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose move is being solicited.
    ///
    /// Once the game is over this is the mark that made the final move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the accepted moves in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Places the current mover's mark at the given position.
    ///
    /// Win is evaluated before draw, so a move that fills the board and
    /// completes a line is a win.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended.
    /// - [`MoveError::SquareOccupied`] if the square holds a mark.
    ///
    /// A rejected move changes nothing.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            debug!(%pos, "Square already occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.to_move;
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(Move::new(mark, pos));

        self.status = if let Some(winner) = check_winner(&self.board) {
            info!(%winner, "Line completed");
            GameStatus::Won(winner)
        } else if is_draw(&self.board) {
            info!("Board full with no line");
            GameStatus::Draw
        } else {
            self.to_move = mark.opponent();
            GameStatus::InProgress
        };

        debug_assert!(
            GameInvariants::check_all(&*self).is_ok(),
            "game invariants violated after {}",
            pos
        );

        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
