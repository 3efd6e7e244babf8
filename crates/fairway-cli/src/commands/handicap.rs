//! Handicap command: course and playing handicap for one tee box.

use anyhow::{Context, Result};
use fairway_core::{Allowance, HandicapProfile, TeeBoxRating};

use crate::output;

pub fn run(index: f64, slope: i32, rating: f64, par: i32, allowance: f64, json: bool) -> Result<()> {
    let tee = TeeBoxRating::new(slope, rating, par);
    tee.validate()?;
    let allowance = Allowance::new(allowance).context("Invalid --allowance")?;
    let profile = HandicapProfile::compute(index, &tee, allowance)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", output::format_profile(&profile, &tee));
    }
    Ok(())
}
