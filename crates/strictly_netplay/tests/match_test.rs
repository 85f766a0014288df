//! Turn-loop tests over in-memory connections.

mod common;

use common::{MemConnection, lines, pipe, scripted_player};
use std::time::Duration;
use strictly_netplay::{Endpoint, Match, MatchOutcome, MatchState, NetplayError, NetplayErrorKind};
use strictly_tictactoe::Player;

struct Played {
    result: Result<MatchOutcome, NetplayError>,
    state: MatchState,
    board: String,
    player_one: Vec<String>,
    player_two: Vec<String>,
}

async fn play(p1_moves: Vec<&'static str>, p2_moves: Vec<&'static str>) -> Played {
    let (s1, c1) = pipe("p1");
    let (s2, c2) = pipe("p2");
    let p1 = tokio::spawn(scripted_player(c1, p1_moves));
    let p2 = tokio::spawn(scripted_player(c2, p2_moves));

    let mut game: Match<MemConnection> = Match::new(s1, s2, None);
    let result = game.run().await;
    game.close().await;

    let (player_one, _) = p1.await.expect("player one task");
    let (player_two, _) = p2.await.expect("player two task");

    Played {
        result,
        state: game.state(),
        board: game.game().board().snapshot(),
        player_one,
        player_two,
    }
}

#[tokio::test]
async fn test_player_one_wins_on_diagonal() {
    let played = play(vec!["5", "3", "7"], vec!["1", "9"]).await;

    assert_eq!(played.result.expect("match completes"), MatchOutcome::Win(Player::One));
    assert_eq!(played.state, MatchState::Terminal(MatchOutcome::Win(Player::One)));
    assert_eq!(played.board, "O2X4X6X8O");
    assert_eq!(
        played.player_one,
        lines(&[
            "BOARD|123456789",
            "YOUR_TURN",
            "BOARD|1234X6789",
            "BOARD|O234X6789",
            "YOUR_TURN",
            "BOARD|O2X4X6789",
            "BOARD|O2X4X678O",
            "YOUR_TURN",
            "BOARD|O2X4X6X8O",
            "WIN",
        ])
    );
    assert_eq!(
        played.player_two,
        lines(&[
            "BOARD|123456789",
            "BOARD|1234X6789",
            "YOUR_TURN",
            "BOARD|O234X6789",
            "BOARD|O2X4X6789",
            "YOUR_TURN",
            "BOARD|O2X4X678O",
            "BOARD|O2X4X6X8O",
            "Sorry, you lose.",
        ])
    );
}

#[tokio::test]
async fn test_player_two_can_win() {
    // X: 1 2 9 / O: 3 5 7
    let played = play(vec!["1", "2", "9"], vec!["3", "5", "7"]).await;

    assert_eq!(played.result.expect("match completes"), MatchOutcome::Win(Player::Two));
    assert_eq!(played.player_two.last().map(String::as_str), Some("WIN"));
    assert_eq!(played.player_one.last().map(String::as_str), Some("Sorry, you lose."));
}

#[tokio::test]
async fn test_occupied_square_reprompts_same_player() {
    let played = play(vec!["5", "3", "7"], vec!["5", "1", "9"]).await;

    assert_eq!(played.result.expect("match completes"), MatchOutcome::Win(Player::One));
    assert_eq!(
        played.player_two[..6],
        lines(&[
            "BOARD|123456789",
            "BOARD|1234X6789",
            "YOUR_TURN",
            "INVALID_MOVE",
            "YOUR_TURN",
            "BOARD|O234X6789",
        ])
    );
    assert!(!played.player_one.iter().any(|m| m == "INVALID_MOVE"));
}

#[tokio::test]
async fn test_full_board_without_line_ties() {
    // Play order 1,3,2,4,6,5,7,9,8
    let played = play(vec!["1", "2", "6", "7", "8"], vec!["3", "4", "5", "9"]).await;

    assert_eq!(played.result.expect("match completes"), MatchOutcome::Tie);
    assert_eq!(played.board, "XXOOOXXXO");
    for transcript in [&played.player_one, &played.player_two] {
        assert_eq!(transcript.last().map(String::as_str), Some("TIE"));
        assert_eq!(transcript.iter().filter(|m| m.starts_with("BOARD|")).count(), 10);
        assert!(!transcript.iter().any(|m| m == "WIN" || m == "Sorry, you lose."));
    }
}

#[tokio::test]
async fn test_bad_tokens_are_invalid_moves() {
    let played = play(vec!["abc", "0", "10", "5", "3", "7"], vec!["1", "9"]).await;

    assert_eq!(played.result.expect("match completes"), MatchOutcome::Win(Player::One));
    assert_eq!(
        played.player_one[..9],
        lines(&[
            "BOARD|123456789",
            "YOUR_TURN",
            "INVALID_MOVE",
            "YOUR_TURN",
            "INVALID_MOVE",
            "YOUR_TURN",
            "INVALID_MOVE",
            "YOUR_TURN",
            "BOARD|1234X6789",
        ])
    );
    assert!(!played.player_two.iter().any(|m| m == "INVALID_MOVE"));
}

#[tokio::test]
async fn test_boards_precede_every_prompt() {
    let played = play(vec!["5", "3", "7"], vec!["5", "1", "9"]).await;

    for transcript in [&played.player_one, &played.player_two] {
        let first_prompt = transcript
            .iter()
            .position(|m| m == "YOUR_TURN")
            .expect("prompted at least once");
        assert!(transcript[..first_prompt].iter().any(|m| m.starts_with("BOARD|")));
    }
}

#[tokio::test]
async fn test_early_token_is_consumed_at_next_prompt() {
    let (s1, mut c1) = pipe("p1");
    let (s2, mut c2) = pipe("p2");

    // Player two answers before being asked
    c2.send("1").await.expect("send");

    let server = tokio::spawn(async move {
        let mut game = Match::new(s1, s2, None);
        let result = game.run().await;
        game.close().await;
        (result, game.game().board().snapshot())
    });

    assert_eq!(c1.recv().await.expect("recv"), "BOARD|123456789");
    assert_eq!(c1.recv().await.expect("recv"), "YOUR_TURN");
    c1.send("5").await.expect("send");

    assert_eq!(c2.recv().await.expect("recv"), "BOARD|123456789");
    assert_eq!(c2.recv().await.expect("recv"), "BOARD|1234X6789");
    assert_eq!(c2.recv().await.expect("recv"), "YOUR_TURN");
    assert_eq!(c2.recv().await.expect("recv"), "BOARD|O234X6789");

    assert_eq!(c1.recv().await.expect("recv"), "BOARD|1234X6789");
    assert_eq!(c1.recv().await.expect("recv"), "BOARD|O234X6789");
    assert_eq!(c1.recv().await.expect("recv"), "YOUR_TURN");

    // Walking away mid-match aborts it without a winner
    drop(c1);
    drop(c2);

    let (result, board) = server.await.expect("server task");
    let err = result.expect_err("match aborted");
    assert!(err.is_disconnect(), "unexpected error: {}", err);
    assert_eq!(board, "O234X6789");
}

#[tokio::test]
async fn test_disconnect_before_start_is_fatal() {
    let (s1, _c1) = pipe("p1");
    let (s2, c2) = pipe("p2");
    drop(c2);

    let mut game = Match::new(s1, s2, None);
    let err = game.run().await.expect_err("player two is gone");
    game.close().await;

    assert!(err.is_disconnect(), "unexpected error: {}", err);
    assert_eq!(game.state(), MatchState::AwaitingMove(Player::One));
}

#[tokio::test]
async fn test_silent_player_times_out() {
    let (s1, _c1) = pipe("p1");
    let (s2, _c2) = pipe("p2");

    let mut game = Match::new(s1, s2, Some(Duration::from_millis(50)));
    let err = game.run().await.expect_err("nobody moves");

    assert!(matches!(err.kind, NetplayErrorKind::MoveTimeout(Player::One)));
    assert_eq!(game.game().history().len(), 0);
}
