//! # ConnectZ
//!
//! Replays a recorded Connect-N game and reports how it ended.
//!
//! The board engine in [`games::connectz`] is a pure in-memory state machine:
//! it validates the board configuration, applies moves one at a time, and
//! checks for a win around each newly placed piece. [`replay`] drives it from
//! a text record stream and turns the result into a numeric code.

pub mod error;
pub mod games;
pub mod replay;

pub use error::GameError;
pub use games::connectz::{BoardConfig, BoardEngine, GameStatus, Outcome, Player};
