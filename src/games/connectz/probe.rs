//! Win detection anchored at the most recently placed piece.
//!
//! Only the new piece can complete a run that did not exist before, so each
//! axis is checked within `run_length - 1` cells either side of it.

use super::engine::BoardEngine;
use super::{Cell, Player};
use connectz_shared::has_run;

/// The four directions a run can lie along.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    Horizontal,
    Vertical,
    Ascending,
    Descending,
}

impl Axis {
    /// Evaluation order.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Ascending,
        Axis::Descending,
    ];

    /// (row, column) step for one cell along the axis. Rows grow upwards.
    fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Ascending => (1, 1),
            Axis::Descending => (-1, 1),
        }
    }
}

/// Collects the cells along `axis` within `run_length - 1` of `(row, column)`.
///
/// Offsets that fall off the board or outside the retained window are left
/// out. Both limits are contiguous around the anchor, so the result is still
/// an unbroken stretch of the line.
pub fn line_through(engine: &BoardEngine, row: usize, column: usize, axis: Axis) -> Vec<Cell> {
    let reach = engine.config().run_length().saturating_sub(1) as isize;
    let (dr, dc) = axis.step();
    (-reach..=reach)
        .filter_map(|offset| {
            let r = row as isize + offset * dr;
            let c = column as isize + offset * dc;
            if r < 0 || c < 0 {
                return None;
            }
            engine.cell(r as usize, c as usize)
        })
        .collect()
}

/// Returns true if the piece `player` just dropped at `(row, column)` completes a run.
pub fn completes_run(engine: &BoardEngine, row: usize, column: usize, player: Player) -> bool {
    let run_length = engine.config().run_length();
    if engine.move_count() < run_length as u64 {
        return false;
    }
    let target = Cell::Player(player);
    Axis::ALL
        .iter()
        .any(|&axis| has_run(&line_through(engine, row, column, axis), &target, run_length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::connectz::BoardConfig;

    const X: Cell = Cell::Player(Player::One);
    const O: Cell = Cell::Player(Player::Two);
    const E: Cell = Cell::Empty;

    /// Builds a board by replaying (column, player) drops without alternation.
    fn board(line: &str, drops: &[(i64, Player)]) -> BoardEngine {
        let mut engine = BoardEngine::new(BoardConfig::parse_line(line).unwrap());
        for &(column, player) in drops {
            engine.apply_move(column, player).unwrap();
        }
        engine
    }

    #[test]
    fn test_line_through_clips_to_board() {
        let engine = board("7 6 4", &[(1, Player::One), (2, Player::Two)]);
        assert_eq!(
            line_through(&engine, 0, 0, Axis::Horizontal),
            vec![X, O, E, E]
        );
        // Only row 0 is retained, so nothing above it is read
        assert_eq!(line_through(&engine, 0, 0, Axis::Vertical), vec![X]);
        assert_eq!(line_through(&engine, 0, 1, Axis::Descending), vec![O]);
    }

    #[test]
    fn test_ascending_diagonal() {
        let p1 = Player::One;
        let p2 = Player::Two;
        // . . . X
        // . . X O
        // . X O O
        // X O O X
        let engine = board(
            "7 6 4",
            &[
                (1, p1),
                (2, p2),
                (2, p1),
                (3, p2),
                (3, p2),
                (3, p1),
                (4, p1),
                (4, p2),
                (4, p2),
                (4, p1),
            ],
        );
        assert!(completes_run(&engine, 3, 3, p1));
        assert_eq!(engine.status(), crate::games::connectz::GameStatus::Player1Win);
    }

    #[test]
    fn test_descending_diagonal() {
        let p1 = Player::One;
        let p2 = Player::Two;
        // X . . .
        // O X . .
        // O O X .
        // X O O X
        let engine = board(
            "7 6 4",
            &[
                (4, p1),
                (3, p2),
                (3, p1),
                (2, p2),
                (2, p2),
                (2, p1),
                (1, p1),
                (1, p2),
                (1, p2),
                (1, p1),
            ],
        );
        assert!(completes_run(&engine, 3, 0, p1));
        assert_eq!(engine.status(), crate::games::connectz::GameStatus::Player1Win);
    }

    #[test]
    fn test_gap_breaks_run() {
        let p1 = Player::One;
        let p2 = Player::Two;
        // X X O X X on the bottom row
        let engine = board(
            "7 6 4",
            &[(1, p1), (2, p1), (3, p2), (4, p1), (5, p1)],
        );
        assert!(!completes_run(&engine, 0, 4, p1));
        assert!(!completes_run(&engine, 0, 1, p1));
    }

    #[test]
    fn test_too_few_moves_skips_probe() {
        let engine = board("7 6 2", &[(1, Player::One)]);
        assert!(!completes_run(&engine, 0, 0, Player::One));
    }
}
