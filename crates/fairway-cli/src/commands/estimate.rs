//! Estimate command: pace-based chance of beating personal par.

use anyhow::{Result, bail};
use fairway_core::PaceReport;

use crate::output;

pub fn run(
    strokes: u32,
    holes: u32,
    personal_par: i32,
    playing_handicap: i32,
    json: bool,
) -> Result<()> {
    if holes > 18 {
        bail!("--holes must be between 0 and 18, got {}", holes);
    }
    let report = PaceReport::new(strokes, holes, personal_par, playing_handicap);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", output::format_pace(&report));
    }
    Ok(())
}
