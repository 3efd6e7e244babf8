use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::round::HOLES;
use crate::error::{Error, Result};

use super::StrokeAllocation;

/// A frozen historical round replayed as an opponent.
///
/// The allocation is the one in force when the round was played and is
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhostRound {
    pub label: String,
    pub allocation: StrokeAllocation,
    /// Gross strokes per hole, `None` (or 0) where the hole was not recorded
    pub strokes: Vec<Option<u32>>,
}

impl GhostRound {
    pub fn new(
        label: impl Into<String>,
        allocation: StrokeAllocation,
        strokes: Vec<Option<u32>>,
    ) -> Result<Self> {
        let ghost = Self {
            label: label.into(),
            allocation,
            strokes,
        };
        ghost.validate()?;
        Ok(ghost)
    }

    pub fn validate(&self) -> Result<()> {
        if self.strokes.len() != HOLES {
            return Err(Error::InvalidHoleScore(format!(
                "ghost round {} has {} holes, expected {}",
                self.label,
                self.strokes.len(),
                HOLES
            )));
        }
        Ok(())
    }

    /// Net score per hole: gross minus the frozen allocation
    pub fn net_scores(&self) -> Vec<Option<i32>> {
        self.strokes
            .iter()
            .enumerate()
            .map(|(i, strokes)| {
                strokes
                    .filter(|&s| s > 0)
                    .map(|s| s as i32 - self.allocation.strokes_on((i + 1) as u8) as i32)
            })
            .collect()
    }
}

/// Read-only lookup of past rounds by identifier
pub trait GhostSource {
    fn ghost_round(&self, round_id: &str) -> Option<GhostRound>;
}

impl GhostSource for HashMap<String, GhostRound> {
    fn ghost_round(&self, round_id: &str) -> Option<GhostRound> {
        self.get(round_id).cloned()
    }
}
