//! Game rules for tic-tac-toe.
//!
//! Pure functions over the board. The engine composes them after every
//! accepted move; win is always evaluated before draw.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
