use clap::{Parser, Subcommand};

use self::{simulate::SimulateArg, train::TrainArg};

mod simulate;
mod train;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play simulated games with fixed heuristic coefficients
    Simulate(SimulateArg),
    /// Tune the heuristic coefficients with a population optimizer
    Train(TrainArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Simulate(arg) => simulate::run(&arg),
        Mode::Train(arg) => train::run(&arg),
    }
}
