use serde::{Deserialize, Serialize};

use crate::config::round::HOLES;
use crate::error::{Error, Result};

use super::{StrokeIndexTable, TeeBoxRating};

/// One row of a scorecard header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole {
    pub number: u8,
    pub par: u8,
    pub stroke_index: u8,
}

/// Par of every hole. Entry `i` belongs to hole `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParTable(Vec<u8>);

impl ParTable {
    pub fn new(pars: Vec<u8>) -> Result<Self> {
        if pars.len() != HOLES {
            return Err(Error::InvalidRating(format!(
                "par table needs {} holes, got {}",
                HOLES,
                pars.len()
            )));
        }
        if let Some(pos) = pars.iter().position(|&p| !(3..=6).contains(&p)) {
            return Err(Error::InvalidRating(format!(
                "hole {} has par {}, expected 3..=6",
                pos + 1,
                pars[pos]
            )));
        }
        Ok(Self(pars))
    }

    /// Par of a hole (1-based)
    pub fn par(&self, hole_number: u8) -> Option<u8> {
        let idx = usize::from(hole_number).checked_sub(1)?;
        self.0.get(idx).copied()
    }

    pub fn total(&self) -> i32 {
        self.0.iter().map(|&p| i32::from(p)).sum()
    }

    /// Number of holes on the course
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last hole number, where unresolved skins are settled
    pub fn final_hole(&self) -> u8 {
        self.0.len() as u8
    }

    pub fn holes(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=self.0.len()).map(|n| n as u8)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

/// A course as described in a round file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub tee: TeeBoxRating,
    pub holes: Vec<Hole>,
}

impl Course {
    /// Build the validated lookup tables, ordering holes by number.
    pub fn tables(&self) -> Result<(StrokeIndexTable, ParTable)> {
        self.tee.validate()?;

        let mut holes = self.holes.clone();
        holes.sort_by_key(|h| h.number);
        for (i, hole) in holes.iter().enumerate() {
            if usize::from(hole.number) != i + 1 {
                return Err(Error::InvalidStrokeIndexTable(format!(
                    "holes must be numbered 1..={} without gaps, found hole {} at position {}",
                    HOLES,
                    hole.number,
                    i + 1
                )));
            }
        }

        let indexes: Vec<u8> = holes.iter().map(|h| h.stroke_index).collect();
        let stroke_indexes = StrokeIndexTable::new(&indexes)?;
        let pars = ParTable::new(holes.iter().map(|h| h.par).collect())?;

        if pars.total() != self.tee.par {
            return Err(Error::InvalidRating(format!(
                "tee par {} does not match hole pars totalling {}",
                self.tee.par,
                pars.total()
            )));
        }

        Ok((stroke_indexes, pars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> Course {
        let pars = [4, 5, 4, 4, 3, 5, 3, 4, 4, 4, 4, 3, 4, 5, 5, 4, 3, 5];
        let holes = pars
            .iter()
            .enumerate()
            .map(|(i, &par)| Hole {
                number: (i + 1) as u8,
                par,
                stroke_index: (i + 1) as u8,
            })
            .rev()
            .collect();
        Course {
            name: "Links".to_string(),
            tee: TeeBoxRating::new(130, 72.8, 73),
            holes,
        }
    }

    #[test]
    fn test_tables_sorts_holes() {
        let (si, pars) = sample_course().tables().unwrap();
        assert_eq!(si, StrokeIndexTable::identity());
        assert_eq!(pars.par(1), Some(4));
        assert_eq!(pars.par(18), Some(5));
        assert_eq!(pars.total(), 73);
        assert_eq!(pars.final_hole(), 18);
    }

    #[test]
    fn test_tables_rejects_par_mismatch() {
        let mut course = sample_course();
        course.tee.par = 72;
        assert!(matches!(course.tables(), Err(Error::InvalidRating(_))));
    }

    #[test]
    fn test_tables_rejects_missing_hole() {
        let mut course = sample_course();
        course.holes.retain(|h| h.number != 7);
        assert!(course.tables().is_err());
    }

    #[test]
    fn test_par_table_rejects_odd_par() {
        let mut pars = vec![4; 18];
        pars[3] = 9;
        assert!(ParTable::new(pars).is_err());
    }
}
