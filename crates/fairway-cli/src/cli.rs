//! CLI argument definitions for fairway.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fairway")]
#[command(about = "Golf handicap and scoring calculator", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute course and playing handicap for one tee box
    Handicap {
        /// Handicap index (negative for plus handicaps)
        #[arg(long, allow_negative_numbers = true)]
        index: f64,
        /// Slope rating of the tee box
        #[arg(long, default_value = "113")]
        slope: i32,
        /// Course rating of the tee box
        #[arg(long)]
        rating: f64,
        /// Course par
        #[arg(long, default_value = "72")]
        par: i32,
        /// Handicap allowance as a fraction (e.g., 0.95)
        #[arg(long, default_value = "1.0")]
        allowance: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the stroke allocation of every player in a round file
    Allocate {
        /// Round file (.toml or .json)
        #[arg(short, long, value_name = "FILE")]
        file: String,
        /// Seed for the random handicap policy
        #[arg(long)]
        seed: Option<u64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a round file and print the leaderboard
    Score {
        /// Round file (.toml or .json)
        #[arg(short, long, value_name = "FILE")]
        file: String,
        /// Scoring method (overrides the round file)
        #[arg(short, long)]
        method: Option<String>,
        /// Seed for the random handicap policy
        #[arg(long)]
        seed: Option<u64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Estimate the chance of finishing at or under personal par
    Estimate {
        /// Gross strokes so far
        #[arg(long)]
        strokes: u32,
        /// Holes played so far
        #[arg(long)]
        holes: u32,
        /// Course par plus playing handicap
        #[arg(long)]
        personal_par: i32,
        /// Playing handicap
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        playing_handicap: i32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List handicap policies and scoring methods
    Rules {
        /// Show a single handicap policy
        #[arg(long, conflicts_with = "method")]
        policy: Option<String>,
        /// Show a single scoring method
        #[arg(long)]
        method: Option<String>,
    },
}
