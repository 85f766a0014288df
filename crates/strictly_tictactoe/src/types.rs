//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark a player writes onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// X (goes first).
    #[display("X")]
    X,
    /// O (goes second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the character used for this mark on the wire.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Seat held by a connected player, fixed by arrival order.
///
/// Player one always plays X and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// First player to connect.
    #[display("Player 1")]
    One,
    /// Second player to connect.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the mark this player writes.
    pub fn mark(self) -> Mark {
        match self {
            Player::One => Mark::X,
            Player::Two => Mark::O,
        }
    }

    /// Returns the player writing the given mark.
    pub fn from_mark(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::One,
            Mark::O => Player::Two,
        }
    }

    /// Returns the other player.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square; shown as its 1-based label.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position, overwriting whatever is there.
    ///
    /// Only the game engine writes through this; occupied squares are
    /// protected by [`crate::Game::place`].
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Character shown for a square: its label when empty, else the mark.
    pub fn symbol(&self, pos: Position) -> char {
        match self.get(pos) {
            Square::Empty => pos.label(),
            Square::Occupied(mark) => mark.symbol(),
        }
    }

    /// The 9-character wire form, e.g. `"1234X6789"`.
    pub fn snapshot(&self) -> String {
        Position::ALL.iter().map(|&pos| self.symbol(pos)).collect()
    }

    /// Parses the 9-character wire form produced by [`Board::snapshot`].
    ///
    /// Returns `None` unless every character is either the square's own
    /// label or a mark.
    #[instrument]
    pub fn from_snapshot(snapshot: &str) -> Option<Self> {
        let chars: Vec<char> = snapshot.chars().collect();
        if chars.len() != 9 {
            return None;
        }

        let mut board = Self::new();
        for (pos, c) in Position::ALL.into_iter().zip(chars) {
            match c {
                'X' => board.set(pos, Square::Occupied(Mark::X)),
                'O' => board.set(pos, Square::Occupied(Mark::O)),
                c if c == pos.label() => {}
                _ => return None,
            }
        }
        Some(board)
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .filter_map(|col| Position::from_index(row * 3 + col))
                .map(|pos| self.symbol(pos).to_string())
                .collect();
            result.push(' ');
            result.push_str(&cells.join(" | "));
            result.push('\n');
            if row < 2 {
                result.push_str("-----------\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has reached a terminal status.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
