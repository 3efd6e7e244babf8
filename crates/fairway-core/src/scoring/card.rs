use serde::{Deserialize, Serialize};

use crate::config::round::HOLES;
use crate::error::{Error, Result};
use crate::handicap::{GhostRound, StrokeAllocation};

/// Strokes taken on one hole, `None` while unrecorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleScore {
    pub hole_number: u8,
    pub par: u8,
    pub strokes: Option<u32>,
}

impl HoleScore {
    pub fn new(hole_number: u8, par: u8, strokes: Option<u32>) -> Self {
        Self {
            hole_number,
            par,
            strokes,
        }
    }

    /// Gross strokes if the hole has been played
    pub fn recorded(&self) -> Option<u32> {
        self.strokes.filter(|&s| s > 0)
    }

    /// Gross strokes minus handicap strokes received
    pub fn net(&self, allocation: &StrokeAllocation) -> Option<i32> {
        self.recorded()
            .map(|s| s as i32 - allocation.strokes_on(self.hole_number) as i32)
    }
}

/// One player's scorecard for the round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub player_id: String,
    pub allocation: StrokeAllocation,
    pub scores: Vec<HoleScore>,
}

impl PlayerCard {
    pub fn new(player_id: impl Into<String>, allocation: StrokeAllocation) -> Self {
        Self {
            player_id: player_id.into(),
            allocation,
            scores: Vec::new(),
        }
    }

    /// Card for a ghost opponent, built from its frozen strokes and allocation
    pub fn from_ghost(ghost: &GhostRound, pars: &[u8]) -> Self {
        let scores = ghost
            .strokes
            .iter()
            .zip(pars)
            .enumerate()
            .map(|(i, (&strokes, &par))| HoleScore::new((i + 1) as u8, par, strokes))
            .collect();
        Self {
            player_id: ghost.label.clone(),
            allocation: ghost.allocation,
            scores,
        }
    }

    /// Enter or correct the score of a hole. Scores are never removed; pass
    /// `None` to mark the hole unrecorded again.
    pub fn record(&mut self, hole_number: u8, par: u8, strokes: Option<u32>) -> Result<()> {
        if hole_number == 0 || usize::from(hole_number) > HOLES {
            return Err(Error::InvalidHoleScore(format!(
                "hole {} is not on the course",
                hole_number
            )));
        }
        if strokes == Some(0) {
            return Err(Error::InvalidHoleScore(format!(
                "hole {} cannot be played in zero strokes",
                hole_number
            )));
        }

        match self.scores.iter_mut().find(|s| s.hole_number == hole_number) {
            Some(existing) => {
                existing.par = par;
                existing.strokes = strokes;
            }
            None => {
                self.scores.push(HoleScore::new(hole_number, par, strokes));
                self.scores.sort_by_key(|s| s.hole_number);
            }
        }
        Ok(())
    }

    pub fn score_on(&self, hole_number: u8) -> Option<&HoleScore> {
        self.scores.iter().find(|s| s.hole_number == hole_number)
    }

    /// Gross strokes on a hole if recorded
    pub fn gross_on(&self, hole_number: u8) -> Option<u32> {
        self.score_on(hole_number).and_then(HoleScore::recorded)
    }

    /// Net strokes on a hole if recorded
    pub fn net_on(&self, hole_number: u8) -> Option<i32> {
        self.score_on(hole_number)
            .and_then(|s| s.net(&self.allocation))
    }

    /// Recorded holes only
    pub fn recorded(&self) -> impl Iterator<Item = &HoleScore> {
        self.scores.iter().filter(|s| s.recorded().is_some())
    }

    pub fn holes_played(&self) -> usize {
        self.recorded().count()
    }

    pub fn gross_total(&self) -> u32 {
        self.recorded().filter_map(HoleScore::recorded).sum()
    }
}
