//! Placement evaluation and the greedy self-playing driver.
//!
//! This crate turns the board model of `gridfall-engine` into an agent:
//!
//! - [`move_enumerator`] - every reachable hard-drop resting board
//! - [`metrics`] - the four board features the heuristic reads
//! - [`heuristic`] - the caller-supplied 4-coefficient linear evaluator
//! - [`playout`] - the greedy game driver used standalone and as the
//!   training system's fitness oracle
//!
//! # Example
//!
//! ```
//! use gridfall_evaluator::{HeuristicWeights, Playout};
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64Mcg;
//!
//! let weights = HeuristicWeights::new(-0.516, 0.76, -0.356, -0.1844);
//! let mut playout = Playout::new(weights, Pcg64Mcg::seed_from_u64(7));
//! let score = playout.run(500);
//! assert_eq!(score, playout.stats().score());
//! ```

pub use self::{heuristic::*, metrics::*, move_enumerator::*, playout::*};

pub mod heuristic;
pub mod metrics;
pub mod move_enumerator;
pub mod playout;
