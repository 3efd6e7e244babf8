//! Rule constants.
//!
//! Grouped by the calculation that consumes them:
//! - `handicap` - World Handicap System inputs and allowances
//! - `round` - hole counts
//! - `probability` - pace heuristic tuning

/// World Handicap System constants.
pub mod handicap {
    use std::ops::RangeInclusive;

    /// Slope rating of a course of standard difficulty.
    pub const STANDARD_SLOPE: f64 = 113.0;

    /// Slope ratings issued by governing bodies fall in this range.
    /// Values outside it are accepted but logged.
    pub const TYPICAL_SLOPE: RangeInclusive<i32> = 55..=155;

    /// Accepted handicap index range. Negative values are plus handicaps.
    pub const INDEX_RANGE: RangeInclusive<f64> = -10.0..=54.0;

    /// Accepted course par range (nine-hole through long eighteen-hole layouts).
    pub const PAR_RANGE: RangeInclusive<i32> = 27..=90;

    /// Playing handicap allowance used by every game format in this crate.
    pub const FULL_ALLOWANCE: f64 = 1.0;

    /// Allowance recommended for individual stroke play.
    pub const INDIVIDUAL_STROKE_PLAY_ALLOWANCE: f64 = 0.95;
}

/// Round layout constants.
pub mod round {
    /// Holes in a full round.
    pub const HOLES: usize = 18;

    /// Last hole of the front nine.
    pub const FRONT_NINE_END: u8 = 9;
}

/// Success probability heuristic.
///
/// Every stroke ahead of pace adds 5 points, damped by the share of the
/// round already played, then clamped to 5..=95.
pub mod probability {
    /// Probability before any hole is played.
    pub const BASE: f64 = 50.0;

    /// Percentage points per stroke of pace difference.
    pub const POINTS_PER_STROKE: f64 = 5.0;

    pub const MIN: f64 = 5.0;
    pub const MAX: f64 = 95.0;
}
