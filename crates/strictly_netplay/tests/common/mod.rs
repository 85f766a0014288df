//! Shared helpers for netplay integration tests.

#![allow(dead_code)]

use strictly_netplay::protocol::{LOSE, TIE, WIN, YOUR_TURN};
use strictly_netplay::{Endpoint, FramedConnection};
use tokio::io::DuplexStream;

/// In-memory player connection.
pub type MemConnection = FramedConnection<DuplexStream>;

/// Creates a (server side, client side) in-memory connection pair.
pub fn pipe(name: &str) -> (MemConnection, MemConnection) {
    let (server, client) = tokio::io::duplex(4096);
    (
        FramedConnection::new(server, format!("server<->{}", name)),
        FramedConnection::new(client, name),
    )
}

/// Answers every prompt with the next scripted move until a result
/// arrives. Returns every message received, plus the connection.
pub async fn scripted_player<E: Endpoint>(
    mut conn: E,
    moves: Vec<&'static str>,
) -> (Vec<String>, E) {
    let mut moves = moves.into_iter();
    let mut transcript = Vec::new();

    while let Ok(message) = conn.recv().await {
        transcript.push(message.clone());
        match message.as_str() {
            YOUR_TURN => {
                let next = moves.next().expect("scripted move for every prompt");
                conn.send(next).await.expect("send move");
            }
            WIN | TIE | LOSE => break,
            _ => {}
        }
    }

    (transcript, conn)
}

/// Owned transcript of board snapshots for readability in assertions.
pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
