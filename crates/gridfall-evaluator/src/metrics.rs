//! Board features consumed by the heuristic evaluator.
//!
//! Four features summarize a resting board:
//!
//! - **aggregate height** - sum over columns of the height of the topmost
//!   occupied cell
//! - **complete lines** - fully occupied rows (line clearing is *not*
//!   applied before scoring; a completed row is a scored feature)
//! - **holes** - empty cells with at least one occupied cell above them in
//!   the same column
//! - **bumpiness** - sum of absolute height differences between adjacent
//!   columns

use gridfall_engine::{BOARD_HEIGHT, BOARD_WIDTH, Board};

/// Feature values extracted from one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardMetrics {
    column_heights: [u8; BOARD_WIDTH],
    aggregate_height: u32,
    complete_lines: u32,
    holes: u32,
    bumpiness: u32,
}

impl BoardMetrics {
    /// Computes all features from `board` in one pass per column.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_board(board: &Board) -> Self {
        let mut column_heights = [0u8; BOARD_WIDTH];
        let mut holes = 0u32;
        for (x, height) in column_heights.iter_mut().enumerate() {
            let mut found_block = false;
            for y in 0..BOARD_HEIGHT {
                if board.cell(x, y).is_some() {
                    if !found_block {
                        *height = (BOARD_HEIGHT - y) as u8;
                        found_block = true;
                    }
                } else if found_block {
                    holes += 1;
                }
            }
        }

        let aggregate_height = column_heights.iter().copied().map(u32::from).sum();
        let complete_lines = (0..BOARD_HEIGHT)
            .filter(|&y| board.is_complete_line(y))
            .count() as u32;
        let bumpiness = column_heights
            .windows(2)
            .map(|w| (i32::from(w[0]) - i32::from(w[1])).unsigned_abs())
            .sum();

        Self {
            column_heights,
            aggregate_height,
            complete_lines,
            holes,
            bumpiness,
        }
    }

    /// Per-column heights, 0 for an empty column.
    #[must_use]
    pub fn column_heights(&self) -> &[u8; BOARD_WIDTH] {
        &self.column_heights
    }

    /// Sum of all column heights.
    #[must_use]
    pub fn aggregate_height(&self) -> u32 {
        self.aggregate_height
    }

    /// Number of fully occupied rows.
    #[must_use]
    pub fn complete_lines(&self) -> u32 {
        self.complete_lines
    }

    /// Number of covered empty cells.
    #[must_use]
    pub fn holes(&self) -> u32 {
        self.holes
    }

    /// Sum of adjacent column height differences.
    #[must_use]
    pub fn bumpiness(&self) -> u32 {
        self.bumpiness
    }
}
