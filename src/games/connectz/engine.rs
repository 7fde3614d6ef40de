use super::config::BoardConfig;
use super::probe;
use super::{Cell, GameStatus, Outcome, Player};
use crate::error::GameError;
use std::collections::VecDeque;

/// The incremental ConnectZ board.
///
/// Rows are addressed by their conceptual index on the full board (0 is the
/// bottom). Only a window of rows starting at `row_base` is physically
/// stored; every conceptual-to-physical translation goes through [`Self::slot`].
#[derive(Debug, Clone)]
pub struct BoardEngine {
    config: BoardConfig,
    /// Retained rows, bottom first. `grid[i]` is conceptual row `row_base + i`.
    grid: VecDeque<Vec<Cell>>,
    /// Conceptual index of `grid[0]`
    row_base: usize,
    /// Pieces dropped into each column so far, never reduced by eviction
    column_fill: Vec<usize>,
    move_count: u64,
    status: GameStatus,
}

impl BoardEngine {
    /// Creates an empty board for `config`.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            grid: VecDeque::new(),
            row_base: 0,
            column_fill: vec![0; config.width()],
            move_count: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Drops a piece for `player` into the 1-based `column`.
    ///
    /// Returns the status after the move: `InProgress` when play continues,
    /// otherwise the terminal status that was just reached.
    ///
    /// # Errors
    /// - `IllegalColumn` if `column` is outside `1..=width`
    /// - `IllegalContinue` if the game is already decided
    /// - `IllegalRow` if the column already holds `height` pieces
    pub fn apply_move(&mut self, column: i64, player: Player) -> Result<GameStatus, GameError> {
        let width = self.config.width();
        let col = usize::try_from(column)
            .ok()
            .filter(|c| (1..=width).contains(c))
            .ok_or(GameError::IllegalColumn { column, width })?
            - 1;

        if self.status.is_terminal() {
            return Err(GameError::IllegalContinue);
        }

        let row = self.column_fill[col];
        if row >= self.config.height() {
            return Err(GameError::IllegalRow {
                column: col + 1,
                height: self.config.height(),
            });
        }
        self.column_fill[col] += 1;

        while row >= self.row_base + self.grid.len() {
            self.grid.push_back(vec![Cell::Empty; width]);
        }
        let slot = self.slot_mut(row, col);
        debug_assert!(slot.is_some(), "landing row {row} is outside the window");
        if let Some(slot) = slot {
            *slot = Cell::Player(player);
        }

        self.evict_unreachable_rows();
        self.move_count += 1;

        if probe::completes_run(self, row, col, player) {
            self.status = GameStatus::win_for(player);
        } else if self.move_count == self.config.capacity() {
            self.status = GameStatus::Draw;
        }
        Ok(self.status)
    }

    /// Drops the bottom rows that no future probe can reach.
    ///
    /// A new piece always lands at or above the lowest column's fill, and a
    /// probe looks at most `run_length - 1` rows down from it. Once every
    /// column has stacked more than `run_length` pieces above a row, that row
    /// is out of reach for good.
    fn evict_unreachable_rows(&mut self) {
        let Some(&min_fill) = self.column_fill.iter().min() else {
            return;
        };
        while min_fill.saturating_sub(self.row_base) > self.config.run_length() {
            if self.grid.pop_front().is_none() {
                break;
            }
            self.row_base += 1;
        }
    }

    /// Translates conceptual coordinates into the retained window.
    fn slot(&self, row: usize, column: usize) -> Option<&Cell> {
        let physical = row.checked_sub(self.row_base)?;
        self.grid.get(physical)?.get(column)
    }

    fn slot_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        let physical = row.checked_sub(self.row_base)?;
        self.grid.get_mut(physical)?.get_mut(column)
    }

    /// Reads a cell by conceptual (0-based, bottom-up) coordinates.
    ///
    /// Returns `None` for cells that were evicted, are above the retained
    /// window, or are off the board.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.config.height() {
            return None;
        }
        self.slot(row, column).copied()
    }

    /// The board dimensions this engine was created with.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Where the game stands after the last accepted move.
    ///
    /// # Returns
    /// `InProgress` until a move wins or fills the board. Rejected moves
    /// never change it.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The outcome if the move stream ended now.
    pub fn outcome(&self) -> Outcome {
        Outcome::from(self.status)
    }

    /// Moves accepted so far.
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Pieces dropped into each column, indexed from 0.
    ///
    /// # Returns
    /// One entry per column. Counts include pieces in evicted rows, so each
    /// entry is also the conceptual row the next piece in that column lands on.
    pub fn column_fill(&self) -> &[usize] {
        &self.column_fill
    }

    /// Conceptual index of the lowest retained row.
    pub fn row_base(&self) -> usize {
        self.row_base
    }

    /// Number of rows physically held in memory.
    pub fn retained_rows(&self) -> usize {
        self.grid.len()
    }
}
