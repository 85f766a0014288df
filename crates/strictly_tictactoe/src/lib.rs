//! Strictly Tic-Tac-Toe - pure game logic
//!
//! Board, marks, positions, rules and the move engine shared by the
//! networked server and client. Nothing here performs I/O.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, GameStatus, Mark, Position};
//!
//! let mut game = Game::new();
//! assert_eq!(game.place(Position::Center), Ok(GameStatus::InProgress));
//! assert_eq!(game.to_move(), Mark::O);
//! assert_eq!(game.board().snapshot(), "1234X6789");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use game::Game;
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant,
};
pub use position::Position;
pub use types::{Board, GameStatus, Mark, Player, Square};
