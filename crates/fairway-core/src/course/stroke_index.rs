use serde::{Deserialize, Serialize};

use crate::config::round::HOLES;
use crate::error::{Error, Result};

/// Stroke index of every hole, 1 being the hardest.
///
/// Entry `i` belongs to hole `i + 1`. The values always form a permutation of 1..=18.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct StrokeIndexTable([u8; HOLES]);

impl StrokeIndexTable {
    pub fn new(indexes: &[u8]) -> Result<Self> {
        if indexes.len() != HOLES {
            return Err(Error::InvalidStrokeIndexTable(format!(
                "expected {} entries, got {}",
                HOLES,
                indexes.len()
            )));
        }

        let mut seen = [false; HOLES];
        for (i, &si) in indexes.iter().enumerate() {
            if si == 0 || usize::from(si) > HOLES {
                return Err(Error::InvalidStrokeIndexTable(format!(
                    "hole {} has stroke index {}, expected 1..={}",
                    i + 1,
                    si,
                    HOLES
                )));
            }
            let slot = &mut seen[usize::from(si) - 1];
            if *slot {
                return Err(Error::InvalidStrokeIndexTable(format!(
                    "stroke index {} appears more than once",
                    si
                )));
            }
            *slot = true;
        }

        let mut table = [0u8; HOLES];
        table.copy_from_slice(indexes);
        Ok(Self(table))
    }

    /// Hole `n` has stroke index `n`
    pub fn identity() -> Self {
        let mut table = [0u8; HOLES];
        for (i, si) in table.iter_mut().enumerate() {
            *si = (i + 1) as u8;
        }
        Self(table)
    }

    /// Stroke index of a hole (1-based), `None` outside the course
    pub fn stroke_index(&self, hole_number: u8) -> Option<u8> {
        let idx = usize::from(hole_number).checked_sub(1)?;
        self.0.get(idx).copied()
    }

    /// Iterate `(hole_number, stroke_index)` in hole order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &si)| ((i + 1) as u8, si))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for StrokeIndexTable {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<StrokeIndexTable> for Vec<u8> {
    fn from(table: StrokeIndexTable) -> Self {
        table.0.to_vec()
    }
}
