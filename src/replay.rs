//! # Game Replay
//!
//! Feeds a recorded game into a [`BoardEngine`]: record 0 is the board
//! configuration, every following record is one column. Players alternate,
//! starting with player 1. The first error ends the replay.

use crate::error::GameError;
use crate::games::connectz::{BoardConfig, BoardEngine, ConnectzMove, Outcome, Player};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Replays a game file from disk.
///
/// # Errors
/// `FileError` if `path` is not a readable regular file or reading fails
/// part way; otherwise whatever the records themselves raise.
pub fn replay_file(path: &Path) -> Result<Outcome, GameError> {
    let file_error = |source: io::Error| GameError::FileError {
        path: path.to_path_buf(),
        source,
    };
    if !path.is_file() {
        return Err(file_error(io::Error::new(
            io::ErrorKind::NotFound,
            "not a regular file",
        )));
    }
    let file = File::open(path).map_err(file_error)?;
    debug!(path = %path.display(), "replaying game file");
    replay_reader(BufReader::new(file), path)
}

/// Replays records read line by line from `reader`.
///
/// `origin` only labels read failures.
pub fn replay_reader<R: BufRead>(reader: R, origin: &Path) -> Result<Outcome, GameError> {
    replay_records(reader.lines().map(|line| {
        line.map_err(|source| GameError::FileError {
            path: origin.to_path_buf(),
            source,
        })
    }))
}

/// Replays an in-memory game, one record per line.
pub fn replay_str(input: &str) -> Result<Outcome, GameError> {
    replay_records(input.lines().map(|line| Ok(line.to_string())))
}

fn replay_records<I>(records: I) -> Result<Outcome, GameError>
where
    I: IntoIterator<Item = Result<String, GameError>>,
{
    let mut records = records.into_iter();
    let config_line = records
        .next()
        .transpose()?
        .ok_or_else(|| GameError::InvalidConfig(String::new()))?;
    let config = BoardConfig::parse_line(&config_line)?;
    debug!(
        width = config.width(),
        height = config.height(),
        run_length = config.run_length(),
        "board configured"
    );

    let mut engine = BoardEngine::new(config);
    let mut player = Player::One;
    for (index, record) in records.enumerate() {
        let mv: ConnectzMove = record?.parse()?;
        let status = engine.apply_move(mv.0, player)?;
        trace!(
            move_number = index + 1,
            column = mv.0,
            player = player.number(),
            ?status,
            retained_rows = engine.retained_rows(),
            "applied move"
        );
        player = player.other();
    }

    let outcome = engine.outcome();
    debug!(?outcome, moves = engine.move_count(), "replay finished");
    Ok(outcome)
}

/// The single number reported for a finished replay.
pub fn result_code(result: &Result<Outcome, GameError>) -> u8 {
    match result {
        Ok(outcome) => outcome.code(),
        Err(err) => err.code(),
    }
}
