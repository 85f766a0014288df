//! Error types for the networked match.

use derive_more::{Display, Error};
use strictly_tictactoe::Player;
use tracing::instrument;

/// What went wrong.
///
/// Every kind is fatal to the match in progress. Bad move tokens are not
/// errors: the match answers them with `INVALID_MOVE`.
#[derive(Debug, Display)]
pub enum NetplayErrorKind {
    /// Socket-level failure: accept, reset, broken pipe.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),

    /// The peer closed its stream.
    #[display("Connection closed by peer")]
    ConnectionClosed,

    /// A message does not fit the 2-byte length prefix.
    #[display("Frame of {} bytes exceeds the 65535 byte limit", _0)]
    FrameTooLong(usize),

    /// A received frame is not valid UTF-8.
    #[display("Frame is not valid UTF-8: {}", _0)]
    InvalidUtf8(std::string::FromUtf8Error),

    /// The active player did not answer within the configured timeout.
    #[display("Timed out waiting for a move from {}", _0)]
    MoveTimeout(Player),

    /// Local input ended while the client needed a move.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// Configuration could not be loaded.
    #[display("Config error: {}", _0)]
    Config(String),
}

/// Netplay error with location tracking.
#[derive(Debug, Display, Error)]
#[display("Netplay error: {} at {}:{}", kind, file, line)]
pub struct NetplayError {
    /// Error kind.
    pub kind: NetplayErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl NetplayError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: NetplayErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// True when the peer hung up, either cleanly or mid-write.
    pub fn is_disconnect(&self) -> bool {
        match &self.kind {
            NetplayErrorKind::ConnectionClosed => true,
            NetplayErrorKind::Io(err) => matches!(
                err.kind(),
                std::io::ErrorKind::BrokenPipe
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
            ),
            _ => false,
        }
    }
}

impl From<std::io::Error> for NetplayError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::new(NetplayErrorKind::ConnectionClosed)
        } else {
            Self::new(NetplayErrorKind::Io(err))
        }
    }
}

impl From<std::string::FromUtf8Error> for NetplayError {
    #[track_caller]
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::new(NetplayErrorKind::InvalidUtf8(err))
    }
}
