//! Population-based tuning of the placement heuristic's coefficients.
//!
//! A candidate solution is a 4-coefficient weight vector; its fitness is the
//! aggregate score of simulated games played with it. Two interchangeable
//! evolution strategies drive the search:
//!
//! - **generational** - replaces the whole generation each round, selecting
//!   survivors from parents + offspring by tournament
//! - **steady-state** - replaces a fixed batch of the weakest members each
//!   round and keeps every vector at unit Euclidean norm
//!
//! ```text
//! PopulationOptimizer
//!     ↓ breeds (vector operators)
//! Population of weight vectors
//!     ↓ scored by
//! FitnessFn (simulated playouts)
//!     ↓ reported as
//! RoundReport → run harness
//! ```
//!
//! Every randomized step draws from an injected RNG and fitness evaluation
//! is a pure function of `(weights, seed)`, so whole training runs are
//! reproducible from a single seed even though individuals are evaluated on
//! parallel worker threads.

pub use self::{fitness::*, optimizer::*, population::*, report::*};

pub mod fitness;
pub mod optimizer;
pub mod population;
pub mod report;
pub mod vector;
