//! Score command: evaluate a round file under its scoring method.

use anyhow::{Context, Result};
use fairway_core::RoundFile;
use tracing::info;

use crate::output;

pub fn run(file: &str, method: Option<&str>, seed: Option<u64>, json: bool) -> Result<()> {
    let round = RoundFile::load(file).with_context(|| format!("Failed to load {}", file))?;
    let report = round.evaluate(method, seed)?;
    info!(
        "Scored {} holes for {} players",
        report.leaderboard.holes_played,
        report.leaderboard.standings.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", output::format_leaderboard(&report));
    }
    Ok(())
}
