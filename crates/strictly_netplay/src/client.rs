//! Terminal client for a networked match.
//!
//! Both players run the same client; only the display label differs.

use crate::error::{NetplayError, NetplayErrorKind};
use crate::protocol::{ServerMessage, encode_move};
use crate::transport::Endpoint;
use std::io::Write;
use strictly_tictactoe::{Board, Position};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument, warn};

/// How the match ended from this client's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientOutcome {
    /// This player won.
    Won,
    /// This player lost.
    Lost,
    /// Nobody won.
    Tied,
    /// The server sent something unrecognised, shown as the result.
    Ended(String),
}

/// Client that renders the board and relays moves typed by a human.
pub struct Client<E> {
    endpoint: E,
    label: String,
}

impl<E: Endpoint> Client<E> {
    /// Creates a client shown to the player as `label`.
    pub fn new(endpoint: E, label: impl Into<String>) -> Self {
        Self {
            endpoint,
            label: label.into(),
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Plays until the server reports a result.
    ///
    /// Moves are read line by line from `input`; everything shown to the
    /// player goes to `output`.
    ///
    /// # Errors
    ///
    /// Transport errors, output errors, and [`NetplayErrorKind::InputClosed`]
    /// if input ends while a move is needed.
    #[instrument(skip(self, input, output), fields(label = %self.label))]
    pub async fn run<I, W>(
        &mut self,
        input: &mut I,
        output: &mut W,
    ) -> Result<ClientOutcome, NetplayError>
    where
        I: AsyncBufRead + Unpin,
        W: Write,
    {
        loop {
            let text = self.endpoint.recv().await?;
            match ServerMessage::parse(&text) {
                ServerMessage::Board(snapshot) => self.render(&snapshot, output)?,
                ServerMessage::YourTurn => {
                    let pos = prompt_move(input, output).await?;
                    debug!(%pos, "Sending move");
                    self.endpoint.send(&encode_move(pos)).await?;
                }
                ServerMessage::InvalidMove => {
                    writeln!(output, "Invalid move. Please try again.")?;
                }
                ServerMessage::Win => {
                    writeln!(output, "Congratulations! You won!")?;
                    info!("Won");
                    return Ok(ClientOutcome::Won);
                }
                ServerMessage::Tie => {
                    writeln!(output, "It's a tie! The game is over.")?;
                    info!("Tied");
                    return Ok(ClientOutcome::Tied);
                }
                ServerMessage::Lose => {
                    writeln!(output, "Game result: {}", text)?;
                    info!("Lost");
                    return Ok(ClientOutcome::Lost);
                }
                ServerMessage::Other(other) => {
                    writeln!(output, "Game result: {}", other)?;
                    info!(result = %other, "Unrecognised message ends the session");
                    return Ok(ClientOutcome::Ended(other));
                }
            }
        }
    }

    /// Shuts down the connection.
    pub async fn close(&mut self) -> Result<(), NetplayError> {
        self.endpoint.close().await
    }

    fn render<W: Write>(&self, snapshot: &str, output: &mut W) -> Result<(), NetplayError> {
        writeln!(output, "Current Board ({}):", self.label)?;
        match Board::from_snapshot(snapshot) {
            Some(board) => writeln!(output, "{}", board.display())?,
            None => {
                warn!(%snapshot, "Board snapshot not understood");
                writeln!(output, "{}\n", snapshot)?;
            }
        }
        output.flush()?;
        Ok(())
    }
}

async fn prompt_move<I, W>(input: &mut I, output: &mut W) -> Result<Position, NetplayError>
where
    I: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        writeln!(output, "Enter your move (1-9): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).await? == 0 {
            return Err(NetplayError::new(NetplayErrorKind::InputClosed));
        }

        match line.trim().parse::<i64>().ok().and_then(Position::from_number) {
            Some(pos) => return Ok(pos),
            None => writeln!(
                output,
                "Invalid input. Please enter a number between 1 and 9."
            )?,
        }
    }
}
