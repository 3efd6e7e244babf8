use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::handicap::{PAR_RANGE, TYPICAL_SLOPE};
use crate::error::{Error, Result};

/// Rating data for a single tee box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeeBoxRating {
    pub slope_rating: i32,
    pub course_rating: f64,
    pub par: i32,
}

impl TeeBoxRating {
    pub fn new(slope_rating: i32, course_rating: f64, par: i32) -> Self {
        Self {
            slope_rating,
            course_rating,
            par,
        }
    }

    /// Reject ratings the handicap formula cannot use.
    ///
    /// Slopes outside the published 55..=155 range still compute, with a warning.
    pub fn validate(&self) -> Result<()> {
        if self.slope_rating <= 0 {
            return Err(Error::InvalidRating(format!(
                "slope rating must be positive, got {}",
                self.slope_rating
            )));
        }
        if !self.course_rating.is_finite() {
            return Err(Error::InvalidRating(format!(
                "course rating must be finite, got {}",
                self.course_rating
            )));
        }
        if !PAR_RANGE.contains(&self.par) {
            return Err(Error::InvalidRating(format!(
                "par must be between {} and {}, got {}",
                PAR_RANGE.start(),
                PAR_RANGE.end(),
                self.par
            )));
        }
        if !TYPICAL_SLOPE.contains(&self.slope_rating) {
            warn!(
                "Slope rating {} is outside the usual {}..={} range",
                self.slope_rating,
                TYPICAL_SLOPE.start(),
                TYPICAL_SLOPE.end()
            );
        }
        Ok(())
    }

    /// Course rating minus par, the fixed part of the course handicap
    pub fn rating_adjustment(&self) -> f64 {
        self.course_rating - f64::from(self.par)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_standard_tee() {
        let tee = TeeBoxRating::new(113, 72.0, 72);
        assert!(tee.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_slope() {
        let tee = TeeBoxRating::new(0, 72.0, 72);
        assert!(matches!(tee.validate(), Err(Error::InvalidRating(_))));

        let tee = TeeBoxRating::new(-113, 72.0, 72);
        assert!(matches!(tee.validate(), Err(Error::InvalidRating(_))));
    }

    #[test]
    fn test_validate_rejects_bad_rating_and_par() {
        let tee = TeeBoxRating::new(113, f64::NAN, 72);
        assert!(matches!(tee.validate(), Err(Error::InvalidRating(_))));

        let tee = TeeBoxRating::new(113, 72.0, 100);
        assert!(matches!(tee.validate(), Err(Error::InvalidRating(_))));
    }

    #[test]
    fn test_unusual_slope_is_accepted() {
        let tee = TeeBoxRating::new(160, 74.1, 72);
        assert!(tee.validate().is_ok());
    }

    #[test]
    fn test_rating_adjustment() {
        let tee = TeeBoxRating::new(125, 71.3, 72);
        assert!((tee.rating_adjustment() - (-0.7)).abs() < 1e-9);
    }
}
