//! Per-round reports handed to the run harness.
//!
//! After every round the harness receives each individual's four
//! coefficients and its fitness. The report owns its data so it stays valid
//! while the optimizer mutates the population; serialization format is up
//! to the consumer (the CLI prints tables and optionally JSON).

use serde::Serialize;

use crate::{population::Population, vector::WeightVector};

/// One individual as reported to the harness.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportEntry {
    /// Coefficients in feature order.
    pub weights: WeightVector,
    /// Fitness from the round's evaluation, if the individual was scored.
    pub fitness: Option<f32>,
}

/// Snapshot of a population after one optimizer round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    /// Zero-based round index.
    pub round: usize,
    /// One entry per individual, in population order.
    pub entries: Vec<ReportEntry>,
}

impl RoundReport {
    /// Captures `population` as the report for round `round`.
    #[must_use]
    pub fn from_population(round: usize, population: &Population) -> Self {
        let entries = population
            .individuals()
            .iter()
            .map(|ind| ReportEntry {
                weights: *ind.weights(),
                fitness: ind.fitness(),
            })
            .collect();
        Self { round, entries }
    }

    /// The entry with the highest fitness, if any entry was scored.
    #[must_use]
    pub fn best(&self) -> Option<&ReportEntry> {
        self.entries
            .iter()
            .filter_map(|entry| entry.fitness.map(|fitness| (entry, fitness)))
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(entry, _)| entry)
    }

    /// Summary of the scored entries' fitness values.
    #[must_use]
    pub fn fitness_summary(&self) -> Option<FitnessSummary> {
        FitnessSummary::new(self.entries.iter().filter_map(|entry| entry.fitness))
    }
}

/// Minimum, maximum, and mean of a fitness sample.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FitnessSummary {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

impl FitnessSummary {
    /// Summarizes `values`; `None` for an empty sample.
    #[expect(clippy::cast_precision_loss)]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let (mut min, mut max, mut sum, mut count) = (first, first, first, 1_usize);
        for value in iter {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            count += 1;
        }
        Some(Self {
            min,
            max,
            mean: sum / count as f32,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use crate::fitness::FitnessFn;

    use super::*;

    struct ComponentSum;

    impl FitnessFn for ComponentSum {
        fn evaluate(&self, weights: &WeightVector, _seed: u64) -> f32 {
            weights.iter().sum()
        }
    }

    #[test]
    fn test_report_captures_every_individual() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let mut population = Population::random(5, &mut rng);
        population.evaluate_fitness(&ComponentSum, &mut rng);

        let report = RoundReport::from_population(3, &population);
        assert_eq!(report.round, 3);
        assert_eq!(report.entries.len(), 5);
        for (entry, ind) in report.entries.iter().zip(population.individuals()) {
            assert_eq!(&entry.weights, ind.weights());
            assert_eq!(entry.fitness, ind.fitness());
        }
    }

    #[test]
    fn test_best_and_summary() {
        let report = RoundReport {
            round: 0,
            entries: vec![
                ReportEntry {
                    weights: [0.0; 4],
                    fitness: Some(2.0),
                },
                ReportEntry {
                    weights: [1.0, 0.0, 0.0, 0.0],
                    fitness: Some(8.0),
                },
                ReportEntry {
                    weights: [0.0; 4],
                    fitness: None,
                },
            ],
        };
        assert_eq!(report.best().unwrap().weights, [1.0, 0.0, 0.0, 0.0]);
        let summary = report.fitness_summary().unwrap();
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 8.0);
        assert_eq!(summary.mean, 5.0);
    }

    #[test]
    fn test_empty_summary() {
        let report = RoundReport {
            round: 0,
            entries: vec![],
        };
        assert!(report.best().is_none());
        assert!(report.fitness_summary().is_none());
    }
}
