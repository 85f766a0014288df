//! Monotonic board invariant: squares never change once set.

use super::super::{Board, Game, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied, it never changes.
/// This is verified by replaying the move history and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            // Square must be empty before placing
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }

            reconstructed.set(mov.position, Square::Occupied(mov.mark));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
