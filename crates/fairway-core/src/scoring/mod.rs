//! Scoring of a round in progress.
//!
//! This module contains:
//! - `ScoringMethod` - net score, match play, Stableford and skins
//! - `HoleScore`, `PlayerCard` - per-hole strokes of one player
//! - `Leaderboard`, `Standing`, `RunningScore` - ranked results
//!
//! Results are recomputed from the full cards on every call; nothing is cached.

mod card;
mod evaluator;
mod match_play;
mod method;
mod net;
mod skins;
mod stableford;
mod standings;

pub use card::*;
pub use evaluator::*;
pub use match_play::{MatchPlayScore, MatchStatus, match_status};
pub use method::*;
pub use net::{NetScore, format_score_to_par};
pub use skins::SkinsScore;
pub use stableford::{StablefordScore, stableford_points};
pub use standings::*;
