//! Linear heuristic over the four board features.
//!
//! A resting board scores
//!
//! ```text
//! score = a·aggregate_height + b·complete_lines + c·holes + d·bumpiness
//! ```
//!
//! The four coefficients are always supplied by the caller; there is no
//! default hidden here. Typical trained values make `a`, `c`, `d` negative
//! (height, holes, and bumpiness are liabilities) and `b` positive.

use std::str::FromStr;

use gridfall_engine::Board;
use serde::{Deserialize, Serialize};

use crate::metrics::BoardMetrics;

/// Number of heuristic coefficients.
pub const WEIGHT_COUNT: usize = 4;

/// The four coefficients of the placement heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    /// Coefficient on the sum of column heights.
    pub aggregate_height: f32,
    /// Coefficient on the number of fully occupied rows.
    pub complete_lines: f32,
    /// Coefficient on the number of covered empty cells.
    pub holes: f32,
    /// Coefficient on the surface bumpiness.
    pub bumpiness: f32,
}

impl HeuristicWeights {
    #[must_use]
    pub const fn new(aggregate_height: f32, complete_lines: f32, holes: f32, bumpiness: f32) -> Self {
        Self {
            aggregate_height,
            complete_lines,
            holes,
            bumpiness,
        }
    }

    /// Builds weights from a coefficient array in feature order
    /// (aggregate height, complete lines, holes, bumpiness).
    #[must_use]
    pub const fn from_array(values: [f32; WEIGHT_COUNT]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    /// Returns the coefficients in feature order.
    #[must_use]
    pub const fn to_array(self) -> [f32; WEIGHT_COUNT] {
        [
            self.aggregate_height,
            self.complete_lines,
            self.holes,
            self.bumpiness,
        ]
    }

    /// Scores pre-computed board features. Pure: identical inputs always
    /// produce identical output.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn score_metrics(&self, metrics: &BoardMetrics) -> f32 {
        self.aggregate_height * metrics.aggregate_height() as f32
            + self.complete_lines * metrics.complete_lines() as f32
            + self.holes * metrics.holes() as f32
            + self.bumpiness * metrics.bumpiness() as f32
    }

    /// Extracts features from `board` and scores them.
    #[must_use]
    pub fn score_board(&self, board: &Board) -> f32 {
        self.score_metrics(&BoardMetrics::from_board(board))
    }
}

/// Error parsing a `HeuristicWeights` value from a string.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("expected four comma-separated coefficients, got '{text}'")]
pub struct ParseWeightsError {
    text: String,
}

impl FromStr for HeuristicWeights {
    type Err = ParseWeightsError;

    /// Parses `"a,b,c,d"` in feature order, e.g. `"-0.5,0.76,-0.35,-0.18"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseWeightsError { text: s.to_owned() };
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let &[a, b, c, d] = parts.as_slice() else {
            return Err(error());
        };
        let parse = |part: &str| part.parse::<f32>().map_err(|_| error());
        Ok(Self::new(parse(a)?, parse(b)?, parse(c)?, parse(d)?))
    }
}
