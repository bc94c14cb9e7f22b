//! Candidate populations and parallel fitness evaluation.

use std::{iter, thread};

use rand::{Rng, RngCore};

use crate::{
    fitness::FitnessFn,
    vector::{self, WeightVector},
};

/// One candidate solution: a weight vector and its fitness, once scored.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    weights: WeightVector,
    fitness: Option<f32>,
}

impl Individual {
    pub(crate) fn new(weights: WeightVector) -> Self {
        Self {
            weights,
            fitness: None,
        }
    }

    /// Creates an individual with uniformly random weights.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::new(vector::random(rng))
    }

    #[must_use]
    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// Fitness assigned by the last evaluation, `None` before the first.
    #[must_use]
    pub fn fitness(&self) -> Option<f32> {
        self.fitness
    }

    /// Fitness for ranking purposes; unevaluated individuals rank below
    /// everything that has been scored.
    pub(crate) fn ranking_fitness(&self) -> f32 {
        self.fitness.unwrap_or(f32::MIN)
    }
}

/// An ordered collection of individuals.
///
/// The population is only ever mutated by the coordinating thread between
/// evaluation batches; the parallel workers each own exactly one individual
/// while a batch runs.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates a population of `count` random individuals.
    #[must_use]
    pub fn random<R>(count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let individuals = (0..count).map(|_| Individual::random(rng)).collect();
        Self { individuals }
    }

    pub(crate) fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub(crate) fn individuals_mut(&mut self) -> &mut Vec<Individual> {
        &mut self.individuals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Evaluates every individual and sorts the population by fitness
    /// descending.
    pub fn evaluate_fitness(&mut self, fitness: &dyn FitnessFn, rng: &mut dyn RngCore) {
        evaluate_individuals(&mut self.individuals, fitness, rng);
        self.sort_by_fitness();
    }

    pub(crate) fn sort_by_fitness(&mut self) {
        self.individuals
            .sort_by(|a, b| b.ranking_fitness().total_cmp(&a.ranking_fitness()));
    }
}

/// Evaluates a batch of individuals in parallel, one scoped thread each.
///
/// Seeds are drawn from `rng` before any worker starts, so the assigned
/// fitness values are independent of thread scheduling and identical to a
/// sequential evaluation.
pub(crate) fn evaluate_individuals(
    individuals: &mut [Individual],
    fitness: &dyn FitnessFn,
    rng: &mut dyn RngCore,
) {
    let seeds: Vec<u64> = individuals.iter().map(|_| rng.next_u64()).collect();
    thread::scope(|s| {
        for (ind, seed) in iter::zip(&mut *individuals, seeds) {
            s.spawn(move || {
                ind.fitness = Some(fitness.evaluate(&ind.weights, seed));
            });
        }
    });
}
