use gridfall_engine::CellColor;
use gridfall_evaluator::{HeuristicWeights, Playout};
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Heuristic coefficients "a,b,c,d" for aggregate height, complete
    /// lines, holes, and bumpiness
    #[arg(long, default_value = "-0.516,0.76,-0.356,-0.1844")]
    weights: HeuristicWeights,
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,
    /// Piece budget per game
    #[arg(long, default_value_t = 10_000)]
    max_pieces: usize,
    /// Seed for the piece sequences; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Print the final board of each game
    #[arg(long)]
    show_board: bool,
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let mut seed_rng = Pcg64Mcg::seed_from_u64(seed);
    eprintln!("Simulating {} game(s) with seed {seed}:", arg.games);

    let mut total = 0;
    for game in 0..arg.games {
        let mut playout = Playout::new(arg.weights, Pcg64Mcg::from_rng(&mut seed_rng));
        let score = playout.run(arg.max_pieces);
        let stats = playout.stats();
        eprintln!(
            "  game {game}: score {score}, pieces {}, level {}",
            stats.completed_pieces(),
            stats.level(),
        );
        if arg.show_board {
            print_board(&playout);
        }
        total += score;
    }

    eprintln!("Total score: {total}");
    if arg.games > 1 {
        eprintln!("Mean score:  {:.1}", total as f64 / arg.games as f64);
    }
    Ok(())
}

fn print_board<R: Rng>(playout: &Playout<R>) {
    for row in playout.board().rows() {
        let line: String = row
            .iter()
            .map(|cell| cell.map_or('.', CellColor::as_char))
            .collect();
        eprintln!("    {line}");
    }
}
