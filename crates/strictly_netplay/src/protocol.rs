//! Text messages exchanged between server and clients.

use strictly_tictactoe::{Board, Position};
use tracing::instrument;

/// Prefix of a board snapshot message.
pub const BOARD_PREFIX: &str = "BOARD|";
/// Turn prompt.
pub const YOUR_TURN: &str = "YOUR_TURN";
/// Rejected move notice.
pub const INVALID_MOVE: &str = "INVALID_MOVE";
/// Sent to the winner.
pub const WIN: &str = "WIN";
/// Sent to the loser.
pub const LOSE: &str = "Sorry, you lose.";
/// Sent to both players on a tie.
pub const TIE: &str = "TIE";

/// Message from the server to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerMessage {
    /// Full board snapshot, 9 characters.
    Board(String),
    /// The receiving player must move now.
    YourTurn,
    /// The receiving player's last move was rejected.
    InvalidMove,
    /// The receiving player won.
    Win,
    /// The receiving player lost.
    Lose,
    /// The match ended in a tie.
    Tie,
    /// Anything else; clients treat it as a final result.
    Other(String),
}

impl ServerMessage {
    /// Snapshot message for a board.
    pub fn board(board: &Board) -> Self {
        ServerMessage::Board(board.snapshot())
    }

    /// Wire text for this message.
    pub fn encode(&self) -> String {
        match self {
            ServerMessage::Board(snapshot) => format!("{}{}", BOARD_PREFIX, snapshot),
            ServerMessage::YourTurn => YOUR_TURN.to_string(),
            ServerMessage::InvalidMove => INVALID_MOVE.to_string(),
            ServerMessage::Win => WIN.to_string(),
            ServerMessage::Lose => LOSE.to_string(),
            ServerMessage::Tie => TIE.to_string(),
            ServerMessage::Other(text) => text.clone(),
        }
    }

    /// Classifies received text. Never fails.
    #[instrument]
    pub fn parse(text: &str) -> Self {
        if let Some(snapshot) = text.strip_prefix(BOARD_PREFIX) {
            return ServerMessage::Board(snapshot.to_string());
        }
        match text {
            YOUR_TURN => ServerMessage::YourTurn,
            INVALID_MOVE => ServerMessage::InvalidMove,
            WIN => ServerMessage::Win,
            LOSE => ServerMessage::Lose,
            TIE => ServerMessage::Tie,
            other => ServerMessage::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

/// A move token as read from the active player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRequest {
    /// A cell number in 1-9.
    Cell(Position),
    /// A number outside 1-9.
    OutOfRange(i64),
    /// Not a base-10 integer.
    Malformed(String),
}

impl MoveRequest {
    /// Parses a move token. Surrounding whitespace is ignored.
    #[instrument]
    pub fn parse(token: &str) -> Self {
        match token.trim().parse::<i64>() {
            Ok(number) => match Position::from_number(number) {
                Some(pos) => MoveRequest::Cell(pos),
                None => MoveRequest::OutOfRange(number),
            },
            Err(_) => MoveRequest::Malformed(token.to_string()),
        }
    }
}

/// Wire text a client sends for a cell.
pub fn encode_move(pos: Position) -> String {
    pos.number().to_string()
}
