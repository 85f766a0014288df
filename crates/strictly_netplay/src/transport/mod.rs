//! Per-player message transport.

mod frame;

pub use frame::{MAX_FRAME_LEN, read_frame, write_frame};

use crate::error::NetplayError;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument};

/// One side of a player connection, carrying whole text messages.
#[async_trait::async_trait]
pub trait Endpoint: Send {
    /// Sends one message.
    async fn send(&mut self, message: &str) -> Result<(), NetplayError>;

    /// Waits for the next message.
    async fn recv(&mut self) -> Result<String, NetplayError>;

    /// Shuts down the write half so the peer sees end of stream.
    async fn close(&mut self) -> Result<(), NetplayError>;

    /// Name of the remote peer, for logs.
    fn peer(&self) -> &str;
}

/// [`Endpoint`] over any byte stream using length-prefixed frames.
#[derive(Debug)]
pub struct FramedConnection<S> {
    stream: S,
    peer: String,
}

impl<S> FramedConnection<S> {
    /// Wraps a connected stream.
    pub fn new(stream: S, peer: impl Into<String>) -> Self {
        Self {
            stream,
            peer: peer.into(),
        }
    }
}

#[async_trait::async_trait]
impl<S> Endpoint for FramedConnection<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    #[instrument(skip(self), fields(peer = %self.peer))]
    async fn send(&mut self, message: &str) -> Result<(), NetplayError> {
        write_frame(&mut self.stream, message).await
    }

    #[instrument(skip(self), fields(peer = %self.peer))]
    async fn recv(&mut self) -> Result<String, NetplayError> {
        let message = read_frame(&mut self.stream).await?;
        debug!(%message, "Received");
        Ok(message)
    }

    #[instrument(skip(self), fields(peer = %self.peer))]
    async fn close(&mut self) -> Result<(), NetplayError> {
        self.stream.shutdown().await?;
        debug!("Connection closed");
        Ok(())
    }

    fn peer(&self) -> &str {
        &self.peer
    }
}
