//! Greedy single-game driver.
//!
//! Each turn enumerates every reachable resting board for the piece in
//! play, scores each under a fixed weight vector, and commits the highest
//! scoring one (first seen wins ties). The committed board then has its
//! complete lines removed and the removed-row count accrues to the score.
//!
//! Two conditions end a playout, and both are ordinary outcomes rather than
//! errors: the piece in play collides at its spawn position, or enumeration
//! yields no candidate at all. An empty candidate list never falls back to
//! replaying the previous board.

use std::mem;

use gridfall_engine::{Board, GameStats, Piece};
use rand::Rng;
use serde::Serialize;

use crate::{heuristic::HeuristicWeights, move_enumerator::enumerate_drops};

/// Result of advancing a playout by one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepOutcome {
    /// The piece was committed and `cleared_lines` rows were removed.
    Placed {
        /// Rows removed by this placement.
        cleared_lines: usize,
    },
    /// The playout is over: the piece either collided at spawn or had no
    /// reachable resting position.
    TopOut,
}

/// Read-only view of a running game for display collaborators.
///
/// The core supplies these snapshots and takes nothing back; rendering and
/// input handling live entirely outside this crate.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot<'a> {
    /// The live board.
    pub board: &'a Board,
    /// The piece currently in play.
    pub falling_piece: Piece,
    /// The piece that spawns after the current one commits.
    pub next_piece: Piece,
    /// Cumulative score (one point per cleared row).
    pub score: usize,
    /// Display level derived from the score.
    pub level: usize,
}

/// A greedy self-playing game with an injected random source.
///
/// Deterministic: the same weights and RNG state always produce the same
/// game.
#[derive(Debug, Clone)]
pub struct Playout<R> {
    board: Board,
    falling_piece: Piece,
    next_piece: Piece,
    stats: GameStats,
    weights: HeuristicWeights,
    rng: R,
}

impl<R: Rng> Playout<R> {
    /// Starts a game on an empty board, spawning the first two pieces from
    /// `rng`.
    pub fn new(weights: HeuristicWeights, mut rng: R) -> Self {
        let falling_piece = Piece::spawn(&mut rng);
        let next_piece = Piece::spawn(&mut rng);
        Self {
            board: Board::new(),
            falling_piece,
            next_piece,
            stats: GameStats::new(),
            weights,
            rng,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn falling_piece(&self) -> Piece {
        self.falling_piece
    }

    #[must_use]
    pub fn next_piece(&self) -> Piece {
        self.next_piece
    }

    /// Current read-only view for renderers.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            board: &self.board,
            falling_piece: self.falling_piece,
            next_piece: self.next_piece,
            score: self.stats.score(),
            level: self.stats.level(),
        }
    }

    /// Plays one piece: selects the best resting board, commits it, clears
    /// lines, and promotes the next piece.
    pub fn step(&mut self) -> StepOutcome {
        if !self.board.is_valid_position(&self.falling_piece, 0, 0) {
            return StepOutcome::TopOut;
        }

        let candidates = enumerate_drops(&self.board, &self.falling_piece);
        let Some(best) = select_best_board(candidates, &self.weights) else {
            return StepOutcome::TopOut;
        };

        self.board = best;
        let cleared_lines = self.board.remove_complete_lines();
        self.stats.complete_piece_drop(cleared_lines);
        self.falling_piece = mem::replace(&mut self.next_piece, Piece::spawn(&mut self.rng));
        StepOutcome::Placed { cleared_lines }
    }

    /// Plays until top-out or until `max_pieces` pieces have been placed,
    /// and returns the cumulative score. The piece budget guarantees
    /// termination; with budget N the Nth piece is the last one evaluated.
    pub fn run(&mut self, max_pieces: usize) -> usize {
        for _ in 0..max_pieces {
            if self.step().is_top_out() {
                break;
            }
        }
        self.stats.score()
    }
}

/// Plays one complete game and returns its score.
pub fn play_game<R: Rng>(weights: HeuristicWeights, rng: R, max_pieces: usize) -> usize {
    Playout::new(weights, rng).run(max_pieces)
}

/// Picks the candidate with the strictly greatest score; on ties the first
/// candidate in enumeration order wins. `None` when there are no candidates.
fn select_best_board(candidates: Vec<Board>, weights: &HeuristicWeights) -> Option<Board> {
    let mut best_score = f32::NEG_INFINITY;
    let mut best_board = None;
    for board in candidates {
        let score = weights.score_board(&board);
        if score > best_score {
            best_score = score;
            best_board = Some(board);
        }
    }
    best_board
}
