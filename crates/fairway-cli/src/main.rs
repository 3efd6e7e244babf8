mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG is set)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fairway=warn,fairway_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Handicap {
            index,
            slope,
            rating,
            par,
            allowance,
            json,
        } => commands::handicap::run(index, slope, rating, par, allowance, json),
        Command::Allocate { file, seed, json } => commands::allocate::run(&file, seed, json),
        Command::Score {
            file,
            method,
            seed,
            json,
        } => commands::score::run(&file, method.as_deref(), seed, json),
        Command::Estimate {
            strokes,
            holes,
            personal_par,
            playing_handicap,
            json,
        } => commands::estimate::run(strokes, holes, personal_par, playing_handicap, json),
        Command::Rules { policy, method } => {
            commands::rules::run(policy.as_deref(), method.as_deref())
        }
    }
}
