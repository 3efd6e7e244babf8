//! Allocate command: per-hole strokes for every player in a round file.

use anyhow::{Context, Result};
use fairway_core::RoundFile;

use crate::output;

pub fn run(file: &str, seed: Option<u64>, json: bool) -> Result<()> {
    let round = RoundFile::load(file).with_context(|| format!("Failed to load {}", file))?;
    let setup = round.setup(seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&setup)?);
    } else {
        print!("{}", output::format_setup(&setup));
    }
    Ok(())
}
