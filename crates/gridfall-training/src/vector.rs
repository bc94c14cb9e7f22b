//! Weight-vector operations for the population optimizer.
//!
//! These free functions implement the genetic operators both strategies are
//! built from:
//!
//! - **Initialization**: [`random`] draws each coefficient uniformly
//! - **Crossover**: [`single_point_crossover`] swaps the tails of two
//!   parents at a uniformly random split position
//! - **Mutation**: [`gaussian_mutate`] perturbs coefficients independently
//!   with Gaussian noise; [`perturb_one`] nudges a single random
//!   coefficient by a bounded delta
//! - **Normalization**: [`normalize_unit`] scales to unit Euclidean norm,
//!   leaving the degenerate all-zero vector untouched

use rand::Rng;
use rand_distr::Normal;

pub use gridfall_evaluator::WEIGHT_COUNT;

/// A candidate coefficient vector, in feature order
/// (aggregate height, complete lines, holes, bumpiness).
pub type WeightVector = [f32; WEIGHT_COUNT];

/// Draws a vector with each coefficient uniform in `[-1, 1]`.
pub fn random<R>(rng: &mut R) -> WeightVector
where
    R: Rng + ?Sized,
{
    std::array::from_fn(|_| rng.random_range(-1.0..=1.0))
}

/// Single-point crossover: the split index is uniform over the coefficient
/// positions; each child takes one parent's head and the other's tail.
///
/// A boundary split reproduces a parent unchanged; mutation and
/// renormalization downstream keep such clones from being exact copies for
/// long.
pub fn single_point_crossover<R>(
    p1: &WeightVector,
    p2: &WeightVector,
    rng: &mut R,
) -> (WeightVector, WeightVector)
where
    R: Rng + ?Sized,
{
    let split = rng.random_range(0..WEIGHT_COUNT);
    let mut a = *p1;
    let mut b = *p2;
    for i in split..WEIGHT_COUNT {
        a[i] = p2[i];
        b[i] = p1[i];
    }
    (a, b)
}

/// Applies Gaussian mutation in place: each coefficient independently gains
/// `N(0, sigma)` noise with probability `rate`.
pub fn gaussian_mutate<R>(weights: &mut WeightVector, sigma: f32, rate: f32, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let normal = Normal::new(0.0, sigma).expect("sigma must be finite and non-negative");
    for w in weights {
        if rng.random_bool(rate.into()) {
            *w += rng.sample(normal);
        }
    }
}

/// Adds a uniform delta in `[-max_delta, max_delta]` to one randomly chosen
/// coefficient.
pub fn perturb_one<R>(weights: &mut WeightVector, max_delta: f32, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let index = rng.random_range(0..WEIGHT_COUNT);
    weights[index] += rng.random_range(-max_delta..=max_delta);
}

/// Scales the vector to unit Euclidean norm in place.
///
/// The all-zero vector has no direction to preserve and is left unchanged
/// rather than divided by zero.
pub fn normalize_unit(weights: &mut WeightVector) {
    let norm = weights.iter().map(|w| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for w in weights {
            *w /= norm;
        }
    }
}
