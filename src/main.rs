//! # ConnectZ
//!
//! Command line entry point: replays one game file and prints a single code.
//!
//! ## Output
//! - `0` draw, `1` player 1 wins, `2` player 2 wins, `3` incomplete
//! - `4`..`9` for a game that could not be replayed (see [`connectz::GameError::code`])
//!
//! Diagnostics go to stderr and are off unless `-v` is given.
//!
//! ## Usage
//! `connectz games/classic.txt`

use clap::Parser;
use colored::Colorize;
use connectz::replay;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Game file: a `width height run_length` line followed by one column per line
    input: Option<PathBuf>,

    /// Log to stderr (-v info, -vv debug, -vvv every move)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut stdout = io::stdout().lock();
    let Some(input) = args.input else {
        writeln!(stdout, "connectz: Provide one {} file", "input".green())?;
        return Ok(());
    };

    let result = replay::replay_file(&input);
    match &result {
        Ok(outcome) => info!(?outcome, path = %input.display(), "game replayed"),
        Err(err) => warn!(code = err.code(), path = %input.display(), "{}", err),
    }
    writeln!(stdout, "{}", replay::result_code(&result))?;
    Ok(())
}
