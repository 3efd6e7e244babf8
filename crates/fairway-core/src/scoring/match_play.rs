use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::round::FRONT_NINE_END;
use crate::course::ParTable;

use super::PlayerCard;

/// Pairwise match play result of one player.
///
/// On every hole each pair of players with recorded scores is compared on
/// net strokes: a win is worth 1 point, a halve 0.5 to each side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayScore {
    pub points: f64,
    pub holes_won: u32,
    pub holes_halved: u32,
    pub holes_lost: u32,
    /// Points earned on each hole, index 0 is hole 1
    pub hole_points: Vec<f64>,
    /// Only set in two-player games
    pub status: Option<MatchStatus>,
}

impl MatchPlayScore {
    fn new(holes: usize) -> Self {
        Self {
            points: 0.0,
            holes_won: 0,
            holes_halved: 0,
            holes_lost: 0,
            hole_points: vec![0.0; holes],
            status: None,
        }
    }

    pub fn back_nine_points(&self) -> f64 {
        self.hole_points
            .iter()
            .skip(usize::from(FRONT_NINE_END))
            .sum()
    }

    /// Points, then pairwise holes won, then back nine points, then
    /// hole-by-hole countback from the last hole.
    pub(crate) fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .points
            .total_cmp(&self.points)
            .then(other.holes_won.cmp(&self.holes_won))
            .then(other.back_nine_points().total_cmp(&self.back_nine_points()))
            .then_with(|| {
                self.hole_points
                    .iter()
                    .rev()
                    .zip(other.hole_points.iter().rev())
                    .map(|(a, b)| b.total_cmp(a))
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
    }
}

pub(crate) fn match_play_scores(cards: &[PlayerCard], pars: &ParTable) -> Vec<MatchPlayScore> {
    let mut scores: Vec<MatchPlayScore> = cards.iter().map(|_| MatchPlayScore::new(pars.len())).collect();

    for hole in pars.holes() {
        let idx = usize::from(hole) - 1;
        let nets: Vec<Option<i32>> = cards.iter().map(|c| c.net_on(hole)).collect();

        for i in 0..cards.len() {
            for j in (i + 1)..cards.len() {
                let (Some(a), Some(b)) = (nets[i], nets[j]) else {
                    continue;
                };
                match a.cmp(&b) {
                    Ordering::Less => {
                        scores[i].hole_points[idx] += 1.0;
                        scores[i].holes_won += 1;
                        scores[j].holes_lost += 1;
                    }
                    Ordering::Greater => {
                        scores[j].hole_points[idx] += 1.0;
                        scores[j].holes_won += 1;
                        scores[i].holes_lost += 1;
                    }
                    Ordering::Equal => {
                        scores[i].hole_points[idx] += 0.5;
                        scores[j].hole_points[idx] += 0.5;
                        scores[i].holes_halved += 1;
                        scores[j].holes_halved += 1;
                    }
                }
            }
        }
    }

    for score in &mut scores {
        score.points = score.hole_points.iter().sum();
    }

    if let [first, second] = cards {
        let played = pars
            .holes()
            .filter(|&h| first.net_on(h).is_some() && second.net_on(h).is_some())
            .count() as u32;
        let total = pars.len() as u32;
        let (won, lost) = (scores[0].holes_won, scores[0].holes_lost);
        scores[0].status = Some(match_status(won, lost, played, total));
        scores[1].status = Some(match_status(lost, won, played, total));
    }

    scores
}

/// State of a two-player match from one player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MatchStatus {
    AllSquare,
    Up { margin: u32 },
    Down { margin: u32 },
    /// Leading by as many holes as remain
    Dormie { margin: u32 },
    /// Lead larger than the holes remaining
    Won { margin: u32, to_play: u32 },
    Lost { margin: u32, to_play: u32 },
}

/// Match status after `holes_played` of `total_holes`
pub fn match_status(holes_won: u32, holes_lost: u32, holes_played: u32, total_holes: u32) -> MatchStatus {
    let remaining = total_holes.saturating_sub(holes_played);
    let leading = holes_won > holes_lost;
    let margin = holes_won.abs_diff(holes_lost);

    if margin == 0 {
        MatchStatus::AllSquare
    } else if remaining > 0 && margin > remaining {
        if leading {
            MatchStatus::Won {
                margin,
                to_play: remaining,
            }
        } else {
            MatchStatus::Lost {
                margin,
                to_play: remaining,
            }
        }
    } else if leading && margin == remaining {
        MatchStatus::Dormie { margin }
    } else if leading {
        MatchStatus::Up { margin }
    } else {
        MatchStatus::Down { margin }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllSquare => write!(f, "All Square"),
            Self::Up { margin } => write!(f, "{} Up", margin),
            Self::Down { margin } => write!(f, "{} Down", margin),
            Self::Dormie { margin } => write!(f, "{} Up (Dormie)", margin),
            Self::Won { margin, to_play } => write!(f, "{} & {}", margin, to_play),
            Self::Lost { margin, to_play } => write!(f, "Lost {} & {}", margin, to_play),
        }
    }
}
