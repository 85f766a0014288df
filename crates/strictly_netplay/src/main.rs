//! Strictly Netplay - unified CLI
//!
//! Hosts one tic-tac-toe match, or joins one as a player.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_netplay::cli::{Cli, Command};
use strictly_netplay::{Client, FramedConnection, ServerConfig, SessionCoordinator};
use tokio::net::TcpStream;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command.unwrap_or_default() {
        Command::Serve { config, host, port } => run_server(config, host, port).await,
        Command::Play { label, host, port } => run_client(label, host, port).await,
    }
}

/// Host a single match, then exit.
#[instrument]
async fn run_server(
    config_path: Option<std::path::PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    }
    .with_overrides(host, port);

    info!(addr = %config.bind_addr(), "Starting Strictly Netplay server");

    let coordinator = SessionCoordinator::bind(&config).await.inspect_err(|e| {
        error!(error = %e, "Failed to bind");
    })?;
    let outcome = coordinator.run().await?;

    info!(%outcome, "Server exiting");
    Ok(())
}

/// Join a match and play it from the terminal.
#[instrument]
async fn run_client(label: String, host: String, port: u16) -> Result<()> {
    info!("Connecting to server");
    let stream = TcpStream::connect((host.as_str(), port)).await?;
    let peer = format!("{}:{}", host, port);

    let mut client = Client::new(FramedConnection::new(stream, peer), label);
    let mut input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();

    let result = client.run(&mut input, &mut output).await;
    if let Err(e) = client.close().await {
        tracing::debug!(error = %e, "Error while closing connection");
    }

    let outcome = result?;
    info!(label = client.label(), ?outcome, "Session ended");
    Ok(())
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_netplay=debug")),
        )
        .with_writer(std::io::stderr)
        .init();
}
