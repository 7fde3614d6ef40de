//! # Game Implementations Module
//!
//! Board engines live here, one submodule per game.
//!
//! ## Supported Games
//! - **ConnectZ**: Connect-N with configurable width, height and run length,
//!   replayed from a recorded move list

pub mod connectz;
