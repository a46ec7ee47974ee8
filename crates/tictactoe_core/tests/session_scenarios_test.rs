//! End-to-end scenarios for the game session.

use tictactoe_core::{GameSession, Intent, Player, Position, Square, Status, rules};

fn play(indices: &[usize]) -> GameSession {
    let mut session = GameSession::new();
    for &index in indices {
        session.apply_move(index);
    }
    session
}

#[test]
fn test_top_row_win() {
    let session = play(&[0, 4, 1, 3, 2]);
    let snapshot = session.snapshot();

    assert_eq!(snapshot.winner().map(|line| line.indices()), Some([0, 1, 2]));
    assert_eq!(*snapshot.status(), Status::Winner(Player::X));
    assert_eq!(snapshot.status_text(), "Winner: X");
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let session = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let snapshot = session.snapshot();

    assert_eq!(session.history().len(), 10);
    assert!(snapshot.winner().is_none());
    assert!(rules::is_draw(snapshot.board()));
    assert_eq!(snapshot.status_text(), "Draw");
}

#[test]
fn test_draw_reported_while_viewing_earlier_step() {
    let mut session = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    session.jump_to(3);

    assert_eq!(*session.snapshot().status(), Status::Draw);
}

#[test]
fn test_branching_overwrite() {
    let mut session = play(&[0, 4, 8]);
    session.jump_to(1);
    session.apply_move(5);

    assert_eq!(session.history().len(), 3);
    assert_eq!(session.current_step(), 2);
    let latest = session.history().latest();
    assert_eq!(latest.last_move(), Some(Position::MiddleRight));
    assert_eq!(latest.mark(), Some(Player::O));
}

#[test]
fn test_marks_alternate_from_x() {
    let session = play(&[4, 0, 8, 2, 1, 7]);
    let marks: Vec<Option<Player>> = session
        .history()
        .moves()
        .iter()
        .map(|mv| mv.mark())
        .collect();

    assert_eq!(
        marks,
        vec![
            None,
            Some(Player::X),
            Some(Player::O),
            Some(Player::X),
            Some(Player::O),
            Some(Player::X),
            Some(Player::O),
        ]
    );
}

#[test]
fn test_move_descriptions() {
    let mut session = play(&[0, 4, 7]);
    let snapshot = session.snapshot();
    assert_eq!(
        snapshot.descriptions(),
        vec![
            "Go to game start",
            "Go to move #1 (col:1, row:1)",
            "Go to move #2 (col:2, row:2)",
            "Go to move #3 (col:2, row:3)",
        ]
    );

    session.toggle_sort_order();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.descriptions()[0], "Go to move #3 (col:2, row:3)");
    assert_eq!(*snapshot.moves()[0].step(), 3);
}

#[test]
fn test_viewing_past_keeps_history() {
    let mut session = play(&[0, 4, 8]);
    session.jump_to(0);

    assert_eq!(session.history().len(), 4);
    assert_eq!(session.board().occupied_count(), 0);
    assert_eq!(*session.snapshot().status(), Status::NextPlayer(Player::X));
}

#[test]
fn test_clicks_after_win_are_ignored() {
    let mut session = play(&[0, 4, 1, 3, 2]);
    let before = session.clone();
    for index in 0..9 {
        session.dispatch(Intent::Play(index));
    }

    assert_eq!(session, before);
    assert_eq!(session.board().get(Position::BottomRight), Square::Empty);
}

#[test]
fn test_snapshot_serializes() {
    let session = play(&[0, 4, 1, 3, 2]);
    let json = serde_json::to_value(session.snapshot()).expect("snapshot serializes");

    assert_eq!(json["status"]["Winner"], "X");
    assert_eq!(json["current_step"], 5);
    assert_eq!(json["moves"][0]["description"], "Go to game start");
}
