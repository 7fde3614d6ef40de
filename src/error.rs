use std::path::PathBuf;

/// Errors that abort a ConnectZ run.
///
/// Every variant is fatal: the engine that raised it must not be reused.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("a move was played after the game was already decided")]
    IllegalContinue,

    #[error("column {column} is already full ({height} rows)")]
    IllegalRow { column: usize, height: usize },

    #[error("column {column} is outside the board (1..={width})")]
    IllegalColumn { column: i64, width: usize },

    #[error("a {width}x{height} board cannot hold a run of {run_length}")]
    IllegalGame {
        width: usize,
        height: usize,
        run_length: usize,
    },

    #[error("invalid configuration record {0:?}: expected three positive integers")]
    InvalidConfig(String),

    #[error("invalid move token {0:?}: expected an integer column")]
    InvalidMoveToken(String),

    #[error("failed to read game file {}: {source}", path.display())]
    FileError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GameError {
    /// Numeric code reported for this error.
    ///
    /// Malformed configuration and malformed moves share code 8 ("invalid file").
    pub fn code(&self) -> u8 {
        match self {
            GameError::IllegalContinue => 4,
            GameError::IllegalRow { .. } => 5,
            GameError::IllegalColumn { .. } => 6,
            GameError::IllegalGame { .. } => 7,
            GameError::InvalidConfig(_) | GameError::InvalidMoveToken(_) => 8,
            GameError::FileError { .. } => 9,
        }
    }
}
