//! Fitness functions scoring candidate weight vectors.

use gridfall_evaluator::{HeuristicWeights, play_game};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

use crate::vector::WeightVector;

/// Scores one candidate weight vector.
///
/// An implementation must be a pure function of `(weights, seed)`: the
/// optimizer evaluates many vectors concurrently and in no particular
/// order, so the result may not depend on call order, worker count, or any
/// shared mutable state.
pub trait FitnessFn: Sync {
    /// Returns the fitness of `weights` (higher is better). `seed` is the
    /// sole source of randomness.
    fn evaluate(&self, weights: &WeightVector, seed: u64) -> f32;
}

/// Fitness by simulated self-play: the summed score of a fixed number of
/// independent playouts, each with a fresh piece sequence derived from the
/// seed and capped at a fixed piece budget.
#[derive(Debug, Clone, Copy)]
pub struct PlayoutFitness {
    /// Playouts per evaluation.
    pub games_per_eval: usize,
    /// Piece budget per playout; bounds the cost of a single evaluation.
    pub max_pieces: usize,
}

impl FitnessFn for PlayoutFitness {
    #[expect(clippy::cast_precision_loss)]
    fn evaluate(&self, weights: &WeightVector, seed: u64) -> f32 {
        let heuristic = HeuristicWeights::from_array(*weights);
        let mut seed_rng = Pcg64Mcg::seed_from_u64(seed);
        let mut total = 0;
        for _ in 0..self.games_per_eval {
            let game_rng = Pcg64Mcg::from_rng(&mut seed_rng);
            total += play_game(heuristic, game_rng, self.max_pieces);
        }
        total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playout_fitness_is_deterministic_per_seed() {
        let fitness = PlayoutFitness {
            games_per_eval: 2,
            max_pieces: 50,
        };
        let weights = [-0.516, 0.76, -0.356, -0.1844];
        assert_eq!(fitness.evaluate(&weights, 17), fitness.evaluate(&weights, 17));
    }

    #[test]
    fn test_playout_fitness_is_non_negative() {
        let fitness = PlayoutFitness {
            games_per_eval: 1,
            max_pieces: 30,
        };
        // Scores are cleared-line counts, so any weights yield >= 0.
        assert!(fitness.evaluate(&[1.0, 0.0, 0.0, 0.0], 5) >= 0.0);
    }
}
