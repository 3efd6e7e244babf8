use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::round::HOLES;
use crate::course::{ParTable, StrokeIndexTable, TeeBoxRating};
use crate::error::{Error, Result};

use super::{Allowance, GhostRound, HandicapPolicy, HandicapProfile, match_handicap};

/// Handicap strokes received on every hole. Entry `i` belongs to hole `i + 1`.
///
/// Computed once at game setup and not changed during the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct StrokeAllocation([u32; HOLES]);

impl StrokeAllocation {
    /// No strokes on any hole
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_strokes(strokes: &[u32]) -> Result<Self> {
        if strokes.len() != HOLES {
            return Err(Error::InvalidHoleScore(format!(
                "stroke allocation needs {} holes, got {}",
                HOLES,
                strokes.len()
            )));
        }
        let mut table = [0u32; HOLES];
        table.copy_from_slice(strokes);
        Ok(Self(table))
    }

    /// Strokes received on a hole (1-based); 0 outside the course
    pub fn strokes_on(&self, hole_number: u8) -> u32 {
        usize::from(hole_number)
            .checked_sub(1)
            .and_then(|idx| self.0.get(idx))
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Iterate `(hole_number, strokes)` in hole order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &strokes)| ((i + 1) as u8, strokes))
    }

    /// Par the player is measured against on a hole: hole par plus strokes received
    pub fn player_match_par(&self, hole_number: u8, pars: &ParTable) -> Option<u32> {
        pars.par(hole_number)
            .map(|par| u32::from(par) + self.strokes_on(hole_number))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl TryFrom<Vec<u32>> for StrokeAllocation {
    type Error = Error;

    fn try_from(value: Vec<u32>) -> Result<Self> {
        Self::from_strokes(&value)
    }
}

impl From<StrokeAllocation> for Vec<u32> {
    fn from(allocation: StrokeAllocation) -> Self {
        allocation.0.to_vec()
    }
}

/// Strokes received on a single hole under stroke-index-first allocation.
///
/// Every hole gets one stroke per full 18, and the `mh % 18` hardest holes get one more.
pub fn strokes_on_hole(stroke_index: u8, match_handicap: i32) -> u32 {
    if match_handicap <= 0 {
        return 0;
    }
    let mh = match_handicap as u32;
    let holes = HOLES as u32;
    let full_rounds = mh / holes;
    let remaining = mh % holes;
    if u32::from(stroke_index) <= remaining {
        full_rounds + 1
    } else {
        full_rounds
    }
}

/// Inputs beyond the player and course that some policies need
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocationContext<'a> {
    pub allowance: Allowance,
    /// Lowest playing handicap in the group (match play)
    pub group_lowest_ph: Option<i32>,
    /// Round the live player chases (ghost)
    pub ghost: Option<&'a GhostRound>,
    /// Seed for the random policy. A fresh seed is drawn and logged when absent.
    pub seed: Option<u64>,
}

/// Compute a player's stroke allocation under a handicap policy.
///
/// The allocation always sums to the player's match handicap.
pub fn allocate(
    handicap_index: f64,
    tee: &TeeBoxRating,
    stroke_indexes: &StrokeIndexTable,
    policy: HandicapPolicy,
    ctx: &AllocationContext<'_>,
) -> Result<StrokeAllocation> {
    let match_handicap = match policy {
        HandicapPolicy::None => 0,
        HandicapPolicy::Ghost => {
            if ctx.ghost.is_none() {
                return Err(Error::MissingGhostReference);
            }
            0
        }
        HandicapPolicy::MatchPlay | HandicapPolicy::StrokePlay | HandicapPolicy::Random => {
            let profile = HandicapProfile::compute(handicap_index, tee, ctx.allowance)?;
            match_handicap(policy, profile.playing_handicap, ctx.group_lowest_ph)?
        }
    };

    debug!("{} match handicap: {}", policy, match_handicap);
    Ok(distribute(
        match_handicap.max(0) as u32,
        stroke_indexes,
        policy,
        ctx.seed,
    ))
}

/// Spread `total` strokes over the course according to the policy.
pub fn distribute(
    total: u32,
    stroke_indexes: &StrokeIndexTable,
    policy: HandicapPolicy,
    seed: Option<u64>,
) -> StrokeAllocation {
    match policy {
        HandicapPolicy::Random => {
            let seed = seed.unwrap_or_else(|| {
                let seed = rand::rng().random();
                debug!("Random allocation seed: {}", seed);
                seed
            });
            random_distribution(total, seed)
        }
        HandicapPolicy::MatchPlay
        | HandicapPolicy::StrokePlay
        | HandicapPolicy::None
        | HandicapPolicy::Ghost => stroke_index_first(total, stroke_indexes),
    }
}

/// Give strokes to the hardest holes first, wrapping after 18
pub fn stroke_index_first(total: u32, stroke_indexes: &StrokeIndexTable) -> StrokeAllocation {
    let mut strokes = [0u32; HOLES];
    for (hole, si) in stroke_indexes.iter() {
        strokes[usize::from(hole) - 1] = strokes_on_hole(si, total as i32);
    }
    StrokeAllocation(strokes)
}

/// Drop `total` strokes one at a time on uniformly chosen holes.
///
/// A hole may receive any number of strokes. The same seed always gives
/// the same allocation.
pub fn random_distribution(total: u32, seed: u64) -> StrokeAllocation {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut strokes = [0u32; HOLES];
    for _ in 0..total {
        strokes[rng.random_range(0..HOLES)] += 1;
    }
    StrokeAllocation(strokes)
}
