use serde::{Deserialize, Serialize};

use super::{HoleScore, PlayerCard};

/// Points by net score against par, from three under (or better) to two over (or worse)
pub const STABLEFORD_POINTS: [u32; 6] = [5, 4, 3, 2, 1, 0];

/// Stableford points for a net score relative to par
pub fn stableford_points(net_to_par: i32) -> u32 {
    STABLEFORD_POINTS[(net_to_par.clamp(-3, 2) + 3) as usize]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StablefordScore {
    pub points: u32,
    /// Points per hole, `None` where unrecorded
    pub hole_points: Vec<Option<u32>>,
    pub birdies_or_better: u32,
    pub pars: u32,
    pub bogeys: u32,
}

pub(crate) fn stableford_score(card: &PlayerCard, holes: impl Iterator<Item = u8>) -> StablefordScore {
    let hole_points: Vec<Option<u32>> = holes
        .map(|hole| {
            card.score_on(hole).and_then(|score: &HoleScore| {
                score
                    .net(&card.allocation)
                    .map(|net| stableford_points(net - i32::from(score.par)))
            })
        })
        .collect();

    let recorded = || hole_points.iter().flatten();
    StablefordScore {
        points: recorded().sum(),
        birdies_or_better: recorded().filter(|&&p| p >= 3).count() as u32,
        pars: recorded().filter(|&&p| p == 2).count() as u32,
        bogeys: recorded().filter(|&&p| p == 1).count() as u32,
        hole_points,
    }
}
