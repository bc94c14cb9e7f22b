use gridfall_training::{
    GenerationalOptimizer, PlayoutFitness, PopulationOptimizer, RoundReport, SteadyStateOptimizer,
};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// Gaussian mutation spread for the generational strategy.
const MUTATION_SIGMA: f32 = 0.2;
/// Perturbation bound for the steady-state strategy.
const MUTATION_DELTA: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Strategy {
    /// Whole-generation replacement with tournament survivor selection
    Generational,
    /// Batch replacement of the weakest members, unit-norm vectors
    SteadyState,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Evolution strategy
    #[arg(long, value_enum, default_value = "steady-state")]
    strategy: Strategy,
    /// Number of individuals in the population
    #[arg(long, default_value_t = 30)]
    population: usize,
    /// Optimizer rounds to run
    #[arg(long, default_value_t = 20)]
    rounds: usize,
    /// Tournament size (generational) or breeding sample size (steady-state)
    #[arg(long, default_value_t = 4)]
    sample_size: usize,
    /// Children bred per steady-state round
    #[arg(long, default_value_t = 9)]
    replacement: usize,
    /// Playouts per fitness evaluation
    #[arg(long, default_value_t = 3)]
    games_per_eval: usize,
    /// Piece budget per playout; bounds evaluation cost
    #[arg(long, default_value_t = 500)]
    max_pieces: usize,
    /// Mutation probability: per coefficient (generational) or per child
    /// (steady-state)
    #[arg(long, default_value_t = 0.1)]
    mutation_rate: f32,
    /// Seed for the whole run; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Emit one JSON round report per line on stdout
    #[arg(long)]
    json: bool,
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let optimizer: Box<dyn PopulationOptimizer> = match arg.strategy {
        Strategy::Generational => Box::new(GenerationalOptimizer {
            tournament_size: arg.sample_size,
            mutation_rate: arg.mutation_rate,
            mutation_sigma: MUTATION_SIGMA,
        }),
        Strategy::SteadyState => Box::new(SteadyStateOptimizer {
            sample_size: arg.sample_size,
            replacement_count: arg.replacement,
            mutation_rate: arg.mutation_rate,
            mutation_delta: MUTATION_DELTA,
        }),
    };
    let fitness = PlayoutFitness {
        games_per_eval: arg.games_per_eval,
        max_pieces: arg.max_pieces,
    };

    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    eprintln!(
        "Training ({:?}): population {}, {} round(s), seed {seed}",
        arg.strategy, arg.population, arg.rounds
    );

    let mut population = optimizer.initial_population(arg.population, &mut rng);
    let mut final_report = None;
    for round in 0..arg.rounds {
        optimizer.run_round(&mut population, &fitness, &mut rng);
        let report = RoundReport::from_population(round, &population);
        print_report(&report);
        if arg.json {
            println!("{}", serde_json::to_string(&report)?);
        }
        final_report = Some(report);
    }

    if let Some(report) = &final_report {
        if let Some(best) = report.best() {
            eprintln!("Best individual:");
            eprintln!("  weights: {:.4?}", best.weights);
            eprintln!("  fitness: {:.3}", best.fitness.unwrap_or_default());
        }
    }
    Ok(())
}

fn print_report(report: &RoundReport) {
    eprintln!("Round #{}:", report.round);
    for (i, entry) in report.entries.iter().enumerate() {
        match entry.fitness {
            Some(fitness) => eprintln!("  {i:2}: {:.3?} => {fitness:.3}", entry.weights),
            None => eprintln!("  {i:2}: {:.3?} => unevaluated", entry.weights),
        }
    }
    if let Some(summary) = report.fitness_summary() {
        eprintln!(
            "  fitness min {:.3} / mean {:.3} / max {:.3}",
            summary.min, summary.mean, summary.max
        );
    }
}
