//! Alternating turn invariant: X and O take turns, X first.

use super::super::{Game, Mark};
use super::Invariant;

/// Invariant: Marks in the history alternate starting with X, and while
/// the game is in progress the mark to move follows the last recorded move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let mut expected = Mark::X;
        for mov in game.history() {
            if mov.mark != expected {
                return false;
            }
            expected = expected.opponent();
        }

        game.status().is_over() || game.to_move() == expected
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X... and the mover follows the history"
    }
}
