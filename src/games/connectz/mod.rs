//! # ConnectZ Game Implementation
//!
//! Connect-N on a configurable board: `width` columns, `height` rows, and a
//! winning run of `run_length` pieces.
//!
//! ## Rules
//! - Players alternate dropping pieces into columns, player 1 first
//! - Pieces fall onto the top of the stack in their column
//! - The first player with `run_length` pieces in a row (horizontally,
//!   vertically, or diagonally) wins
//! - The game is a draw once every cell is filled with no winner
//! - No move may be played after the game is decided
//!
//! ## Memory
//! The board keeps only a sliding window of rows. Rows sitting too far below
//! every column's stack to ever take part in a new run are evicted, so memory
//! grows with `run_length * width` rather than with `height`.

pub mod config;
pub mod engine;
pub mod probe;

pub use config::BoardConfig;
pub use engine::BoardEngine;

use crate::error::GameError;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// The two players. Player 1 always moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The player who moves after this one.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1 or 2.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// Contents of one board cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player(Player),
}

/// Where the game stands after the most recent move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameStatus {
    InProgress,
    Player1Win,
    Player2Win,
    Draw,
}

impl GameStatus {
    /// The winning status for `player`.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::One => GameStatus::Player1Win,
            Player::Two => GameStatus::Player2Win,
        }
    }

    /// True once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Final result of a replayed game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Outcome {
    Draw,
    Player1Win,
    Player2Win,
    Incomplete,
}

impl Outcome {
    /// Numeric code reported for this outcome.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Draw => 0,
            Outcome::Player1Win => 1,
            Outcome::Player2Win => 2,
            Outcome::Incomplete => 3,
        }
    }
}

impl From<GameStatus> for Outcome {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => Outcome::Incomplete,
            GameStatus::Player1Win => Outcome::Player1Win,
            GameStatus::Player2Win => Outcome::Player2Win,
            GameStatus::Draw => Outcome::Draw,
        }
    }
}

/// A move record: the 1-based column to drop a piece into.
///
/// Parsing only checks that the token is an integer. Range checks happen when
/// the move is applied, since they depend on the board. Integers too large for
/// `i64` saturate to `i64::MAX` / `i64::MIN`, which no board accepts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ConnectzMove(pub i64);

impl FromStr for ConnectzMove {
    type Err = GameError;

    /// Parses a move record such as `"3"` or `" 3\r"`.
    ///
    /// # Examples
    /// ```
    /// use std::str::FromStr;
    /// use connectz::games::connectz::ConnectzMove;
    /// let mv = ConnectzMove::from_str("3").unwrap();
    /// assert_eq!(mv.0, 3);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(c) => Ok(ConnectzMove(c)),
            // Still an integer, just off any board: saturate so the range check rejects it
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(ConnectzMove(i64::MAX)),
                IntErrorKind::NegOverflow => Ok(ConnectzMove(i64::MIN)),
                _ => Err(GameError::InvalidMoveToken(s.to_string())),
            },
        }
    }
}
