use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{MatchPlayScore, NetScore, ScoringMethod, SkinsScore, StablefordScore};

/// Aggregate score of one player under the game's scoring method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum RunningScore {
    NetScore(NetScore),
    MatchPlay(MatchPlayScore),
    Stableford(StablefordScore),
    Skins(SkinsScore),
}

impl RunningScore {
    /// Headline number: net total, points or skins
    pub fn total(&self) -> f64 {
        match self {
            Self::NetScore(s) => f64::from(s.net),
            Self::MatchPlay(s) => s.points,
            Self::Stableford(s) => f64::from(s.points),
            Self::Skins(s) => s.skins,
        }
    }

    /// Ordering where `Less` ranks first.
    ///
    /// Scores of different methods never meet in one leaderboard and compare equal.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::NetScore(a), Self::NetScore(b)) => a.rank_cmp(b),
            (Self::MatchPlay(a), Self::MatchPlay(b)) => a.rank_cmp(b),
            (Self::Stableford(a), Self::Stableford(b)) => b.points.cmp(&a.points),
            (Self::Skins(a), Self::Skins(b)) => b.skins.total_cmp(&a.skins),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: String,
    /// 1-based; fully tied players share a position
    pub position: usize,
    pub holes_played: usize,
    pub score: RunningScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub method: ScoringMethod,
    pub standings: Vec<Standing>,
    /// Holes with at least one recorded score
    pub holes_played: usize,
    pub total_holes: usize,
    /// Every player has recorded every hole
    pub is_complete: bool,
    /// Skins carried past the last contested hole and not yet won
    pub pending_skins: f64,
}

impl Leaderboard {
    pub fn leader(&self) -> Option<&Standing> {
        self.standings.first()
    }

    pub fn has_leader_tie(&self) -> bool {
        match (self.standings.first(), self.standings.get(1)) {
            (Some(first), Some(second)) => first.position == second.position,
            _ => false,
        }
    }

    pub fn standing(&self, player_id: &str) -> Option<&Standing> {
        self.standings.iter().find(|s| s.player_id == player_id)
    }
}

/// Sort standings best first and assign competition-style positions (1, 2, 2, 4).
pub(crate) fn rank(standings: &mut [Standing]) {
    standings.sort_by(|a, b| a.score.rank_cmp(&b.score));

    for i in 0..standings.len() {
        standings[i].position = if i > 0
            && standings[i].score.rank_cmp(&standings[i - 1].score) == Ordering::Equal
        {
            standings[i - 1].position
        } else {
            i + 1
        };
    }
}
