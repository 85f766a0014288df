//! Per-match turn loop between two connected players.

use crate::error::{NetplayError, NetplayErrorKind};
use crate::protocol::{MoveRequest, ServerMessage};
use crate::transport::Endpoint;
use std::time::Duration;
use strictly_tictactoe::{Game, GameStatus, Player};
use tracing::{debug, info, instrument, warn};

/// Terminal result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MatchOutcome {
    /// A player completed a line.
    #[display("{} wins", _0)]
    Win(Player),
    /// The board filled with no line.
    #[display("Tie")]
    Tie,
}

impl MatchOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            MatchOutcome::Win(player) => Some(*player),
            MatchOutcome::Tie => None,
        }
    }
}

/// Where the turn loop currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Waiting on the given player's move.
    AwaitingMove(Player),
    /// An accepted move is being evaluated.
    Evaluating,
    /// The match is over.
    Terminal(MatchOutcome),
}

/// One match: both player connections plus the game they are playing.
///
/// Player one plays X and moves first. The match exclusively owns the
/// board and the turn indicator; only the active player's stream is read.
pub struct Match<E> {
    player_one: E,
    player_two: E,
    game: Game,
    state: MatchState,
    move_timeout: Option<Duration>,
}

impl<E: Endpoint> Match<E> {
    /// Binds two connected players to a fresh game.
    #[instrument(skip(player_one, player_two), fields(
        peer_one = %player_one.peer(),
        peer_two = %player_two.peer(),
    ))]
    pub fn new(player_one: E, player_two: E, move_timeout: Option<Duration>) -> Self {
        info!("Creating match");
        Self {
            player_one,
            player_two,
            game: Game::new(),
            state: MatchState::AwaitingMove(Player::One),
            move_timeout,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the current state of the turn loop.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Player whose move is solicited next.
    pub fn active_player(&self) -> Player {
        Player::from_mark(self.game.to_move())
    }

    fn endpoint(&mut self, player: Player) -> &mut E {
        match player {
            Player::One => &mut self.player_one,
            Player::Two => &mut self.player_two,
        }
    }

    /// Runs the turn loop until a player wins, the board fills, or a
    /// connection fails.
    ///
    /// Players learn the result over their connections; the returned
    /// outcome is for the caller's records.
    ///
    /// # Errors
    ///
    /// Any transport error or move timeout aborts the match with no winner.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<MatchOutcome, NetplayError> {
        if let MatchState::Terminal(outcome) = self.state {
            return Ok(outcome);
        }

        info!("Match started");
        self.broadcast_board().await?;

        loop {
            let active = self.active_player();
            self.state = MatchState::AwaitingMove(active);

            let token = self.request_move(active).await?;
            let pos = match MoveRequest::parse(&token) {
                MoveRequest::Cell(pos) => pos,
                MoveRequest::OutOfRange(number) => {
                    warn!(%active, number, "Move out of range");
                    self.reject(active).await?;
                    continue;
                }
                MoveRequest::Malformed(token) => {
                    warn!(%active, %token, "Move token is not a number");
                    self.reject(active).await?;
                    continue;
                }
            };

            let status = match self.game.place(pos) {
                Ok(status) => status,
                Err(e) => {
                    warn!(%active, error = %e, "Move rejected");
                    self.reject(active).await?;
                    continue;
                }
            };

            self.state = MatchState::Evaluating;
            info!(%active, %pos, "Move accepted");
            self.broadcast_board().await?;

            let outcome = match status {
                GameStatus::InProgress => continue,
                GameStatus::Won(mark) => MatchOutcome::Win(Player::from_mark(mark)),
                GameStatus::Draw => MatchOutcome::Tie,
            };

            self.announce(outcome).await?;
            self.state = MatchState::Terminal(outcome);
            info!(%outcome, "Match finished");
            return Ok(outcome);
        }
    }

    /// Shuts down both connections.
    ///
    /// Failures are logged; a peer that already hung up is not an error
    /// worth surfacing once the match is decided.
    #[instrument(skip(self))]
    pub async fn close(&mut self) {
        for player in [Player::One, Player::Two] {
            if let Err(e) = self.endpoint(player).close().await {
                debug!(%player, error = %e, "Error while closing connection");
            }
        }
    }

    #[instrument(skip(self))]
    async fn broadcast_board(&mut self) -> Result<(), NetplayError> {
        let message = ServerMessage::board(self.game.board()).encode();
        debug!(%message, "Broadcasting board");
        self.player_one.send(&message).await?;
        self.player_two.send(&message).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn request_move(&mut self, player: Player) -> Result<String, NetplayError> {
        let timeout = self.move_timeout;
        let endpoint = self.endpoint(player);
        endpoint.send(&ServerMessage::YourTurn.encode()).await?;

        match timeout {
            None => endpoint.recv().await,
            Some(limit) => tokio::time::timeout(limit, endpoint.recv())
                .await
                .map_err(|_| NetplayError::new(NetplayErrorKind::MoveTimeout(player)))?,
        }
    }

    async fn reject(&mut self, player: Player) -> Result<(), NetplayError> {
        self.endpoint(player)
            .send(&ServerMessage::InvalidMove.encode())
            .await
    }

    #[instrument(skip(self))]
    async fn announce(&mut self, outcome: MatchOutcome) -> Result<(), NetplayError> {
        match outcome.winner() {
            Some(winner) => {
                self.endpoint(winner).send(&ServerMessage::Win.encode()).await?;
                self.endpoint(winner.other())
                    .send(&ServerMessage::Lose.encode())
                    .await?;
            }
            None => {
                let message = ServerMessage::Tie.encode();
                self.player_one.send(&message).await?;
                self.player_two.send(&message).await?;
            }
        }
        Ok(())
    }
}
