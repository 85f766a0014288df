//! Strictly Netplay - two-player tic-tac-toe over TCP
//!
//! A server hosts exactly one match between the first two clients to
//! connect. Messages are UTF-8 text framed with a 2-byte length prefix.
//!
//! # Architecture
//!
//! - **Transport**: [`Endpoint`] trait with a length-prefixed
//!   [`FramedConnection`] over any async byte stream
//! - **Match**: [`Match`] owns both connections and the game, and drives
//!   the turn loop
//! - **Session**: [`SessionCoordinator`] accepts the two players, runs the
//!   match, and releases every resource on exit
//! - **Client**: [`Client`] renders boards and relays typed moves
//!
//! # Example
//!
//! ```no_run
//! use strictly_netplay::{ServerConfig, SessionCoordinator};
//!
//! # async fn example() -> Result<(), strictly_netplay::NetplayError> {
//! let coordinator = SessionCoordinator::bind(&ServerConfig::default()).await?;
//! let outcome = coordinator.run().await?;
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod config;
mod error;
mod game_match;
mod session;

pub mod cli;
pub mod protocol;
pub mod transport;

pub use client::{Client, ClientOutcome};
pub use config::{DEFAULT_PORT, ServerConfig};
pub use error::{NetplayError, NetplayErrorKind};
pub use game_match::{Match, MatchOutcome, MatchState};
pub use session::{SessionCoordinator, TcpConnection};
pub use transport::{Endpoint, FramedConnection};
