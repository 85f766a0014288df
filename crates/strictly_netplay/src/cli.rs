//! Command-line interface for strictly_netplay.

use crate::config::DEFAULT_PORT;
use clap::{Parser, Subcommand};

/// Strictly Netplay - two-player tic-tac-toe over TCP
#[derive(Parser, Debug)]
#[command(name = "strictly_netplay")]
#[command(about = "Networked two-player tic-tac-toe server and client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Host one match between the next two players to connect
    Serve {
        /// Path to a TOML server configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Join a match as a player
    Play {
        /// Label shown above the board
        #[arg(short, long, default_value = "player")]
        label: String,

        /// Server host
        #[arg(long, default_value = "localhost")]
        host: String,

        /// Server port
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve {
            config: None,
            host: None,
            port: None,
        }
    }
}
