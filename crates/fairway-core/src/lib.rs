pub mod config;
pub mod course;
pub mod error;
pub mod handicap;
pub mod probability;
pub mod round;
pub mod scoring;

pub use course::{Course, Hole, ParTable, StrokeIndexTable, TeeBoxRating};
pub use error::{Error, Result};
pub use handicap::{
    AllocationContext, Allowance, GhostRound, GhostSource, HandicapPolicy, HandicapProfile,
    StrokeAllocation, allocate, course_handicap, match_handicap, playing_handicap,
};
pub use probability::{PaceReport, PerformanceMessage, ProbabilityTone, estimate};
pub use round::{PlayerEntry, PlayerSetup, RoundFile, RoundReport, RoundSetup};
pub use scoring::{
    HoleScore, Leaderboard, PlayerCard, RunningScore, ScoringMethod, Standing, evaluate, score,
};
