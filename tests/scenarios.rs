//! Replays the recorded games under `tests/data` and checks the reported code.

use connectz::replay::{replay_file, replay_str, result_code};
use connectz::{GameError, Outcome};
use std::path::PathBuf;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn code_for(name: &str) -> u8 {
    result_code(&replay_file(&data(name)))
}

#[test]
fn test_classic_connect() {
    assert_eq!(replay_file(&data("classic.txt")).unwrap(), Outcome::Player1Win);
    assert_eq!(code_for("classic.txt"), 1);
}

#[test]
fn test_draw() {
    assert_eq!(replay_file(&data("draw.txt")).unwrap(), Outcome::Draw);
    assert_eq!(code_for("draw.txt"), 0);
}

#[test]
fn test_incomplete() {
    assert_eq!(code_for("incomplete.txt"), 3);
}

#[test]
fn test_player_one_win() {
    assert_eq!(code_for("player_one_win.txt"), 1);
}

#[test]
fn test_player_two_win() {
    assert_eq!(code_for("player_two_win.txt"), 2);
}

#[test]
fn test_player_one_win_diagonal_up() {
    assert_eq!(code_for("player_one_win_incline.txt"), 1);
}

#[test]
fn test_player_one_win_diagonal_down() {
    assert_eq!(code_for("player_one_win_decline.txt"), 1);
}

#[test]
fn test_illegal_continue() {
    assert!(matches!(
        replay_file(&data("illegal_continue.txt")),
        Err(GameError::IllegalContinue)
    ));
    assert_eq!(code_for("illegal_continue.txt"), 4);
}

#[test]
fn test_illegal_row() {
    assert_eq!(code_for("illegal_row.txt"), 5);
}

#[test]
fn test_illegal_column() {
    assert!(matches!(
        replay_file(&data("illegal_column.txt")),
        Err(GameError::IllegalColumn { column: 3, width: 2 })
    ));
    assert_eq!(code_for("illegal_column.txt"), 6);
}

#[test]
fn test_illegal_game() {
    assert_eq!(code_for("illegal_game.txt"), 7);
}

#[test]
fn test_invalid_file() {
    assert!(matches!(
        replay_file(&data("invalid_file.txt")),
        Err(GameError::InvalidConfig(_))
    ));
    assert_eq!(code_for("invalid_file.txt"), 8);
}

#[test]
fn test_invalid_move_token() {
    assert!(matches!(
        replay_file(&data("invalid_move.txt")),
        Err(GameError::InvalidMoveToken(_))
    ));
    assert_eq!(code_for("invalid_move.txt"), 8);
}

#[test]
fn test_missing_file() {
    assert_eq!(code_for("does_not_exist.txt"), 9);
}

#[test]
fn test_single_column_board_fills() {
    // Five pieces fill a 1x5 board, so the game ends drawn rather than overflowing
    assert_eq!(code_for("single_column.txt"), 0);
}

#[test]
fn test_two_field_config() {
    assert!(matches!(replay_str("7 6"), Err(GameError::InvalidConfig(_))));
}

#[test]
fn test_tall_board_vertical_win() {
    // 300 alternating moves in two columns, then player 1 stacks four in column 1
    let mut input = String::from("2 1000 4\n");
    for column in [1, 2, 2, 1].iter().cycle().take(300) {
        input.push_str(&format!("{}\n", column));
    }
    for column in [1, 2, 1, 2, 1, 2, 1] {
        input.push_str(&format!("{}\n", column));
    }
    assert_eq!(replay_str(&input).unwrap(), Outcome::Player1Win);

    // One more move is rejected
    input.push_str("2\n");
    assert!(matches!(replay_str(&input), Err(GameError::IllegalContinue)));
}
