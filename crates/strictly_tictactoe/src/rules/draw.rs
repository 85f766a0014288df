//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(snapshot: &str) -> Board {
        Board::from_snapshot(snapshot).expect("valid snapshot")
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&board_from("1234X6789")));
    }

    #[test]
    fn test_draw_detection() {
        // X X O / O O X / X X O
        let board = board_from("XXOOOXXXO");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board that still holds a line: X X X / O O X / O X O
        let board = board_from("XXXOOXOXO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
