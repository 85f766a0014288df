//! Connection sequencing for a single match.

use crate::config::ServerConfig;
use crate::error::NetplayError;
use crate::game_match::{Match, MatchOutcome};
use crate::transport::{Endpoint, FramedConnection};
use std::net::SocketAddr;
use std::time::Duration;
use strictly_tictactoe::Player;
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, instrument, warn};

/// Connection to one player over TCP.
pub type TcpConnection = FramedConnection<TcpStream>;

/// Accepts exactly two players and runs one match between them.
///
/// The first connection becomes player one (X), the second player two (O).
/// Both connections and the listener are released on every exit path.
pub struct SessionCoordinator {
    listener: TcpListener,
    move_timeout: Option<Duration>,
}

impl SessionCoordinator {
    /// Binds the listening socket.
    #[instrument(skip(config), fields(addr = %config.bind_addr()))]
    pub async fn bind(config: &ServerConfig) -> Result<Self, NetplayError> {
        let listener = TcpListener::bind(config.bind_addr()).await?;
        info!(addr = %listener.local_addr()?, "Listening for players");
        Ok(Self {
            listener,
            move_timeout: config.move_timeout(),
        })
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, NetplayError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts both players, plays the match and tears everything down.
    ///
    /// # Errors
    ///
    /// Accept failures and any transport error during the match. No retries.
    #[instrument(skip(self))]
    pub async fn run(self) -> Result<MatchOutcome, NetplayError> {
        let Self {
            listener,
            move_timeout,
        } = self;

        let mut player_one = accept(&listener, Player::One).await?;
        let player_two = match accept(&listener, Player::Two).await {
            Ok(conn) => conn,
            Err(e) => {
                if let Err(close_err) = player_one.close().await {
                    warn!(error = %close_err, "Error while closing Player 1");
                }
                return Err(e);
            }
        };
        drop(listener);
        info!("Both players connected; listener closed");

        let mut game = Match::new(player_one, player_two, move_timeout);
        let result = game.run().await;
        game.close().await;

        match &result {
            Ok(outcome) => info!(%outcome, "Session complete"),
            Err(e) => error!(error = %e, "Match aborted"),
        }
        result
    }
}

#[instrument(skip(listener))]
async fn accept(listener: &TcpListener, player: Player) -> Result<TcpConnection, NetplayError> {
    let (stream, addr) = listener.accept().await?;
    info!(%player, %addr, "Player connected");
    Ok(FramedConnection::new(stream, format!("{} ({})", player, addr)))
}
