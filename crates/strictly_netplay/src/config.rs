//! Server configuration.

use crate::error::{NetplayError, NetplayErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 5555;

/// Configuration for the match server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    port: u16,

    /// Seconds to wait for the active player's move. Unset waits forever.
    #[serde(default)]
    move_timeout_secs: Option<u64>,
}

#[instrument]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[instrument]
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl ServerConfig {
    /// Creates a configuration with no move timeout.
    #[instrument]
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            move_timeout_secs: None,
        }
    }

    /// Bounds how long the active player may take to move, in whole
    /// seconds. Zero waits forever, as in the config file.
    pub fn with_move_timeout_secs(mut self, secs: u64) -> Self {
        self.move_timeout_secs = Some(secs);
        self
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NetplayError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            NetplayError::new(NetplayErrorKind::Config(format!(
                "Failed to read config file: {}",
                e
            )))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            NetplayError::new(NetplayErrorKind::Config(format!(
                "Failed to parse config: {}",
                e
            )))
        })?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Move timeout as a duration; zero counts as unset.
    pub fn move_timeout(&self) -> Option<Duration> {
        self.move_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Address string for binding, `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(default_host(), default_port())
    }
}
