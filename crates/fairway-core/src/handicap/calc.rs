use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::handicap::{
    FULL_ALLOWANCE, INDEX_RANGE, INDIVIDUAL_STROKE_PLAY_ALLOWANCE, STANDARD_SLOPE,
};
use crate::course::TeeBoxRating;
use crate::error::{Error, Result};

use super::HandicapPolicy;

/// Round to the nearest integer with halves going up (2.5 -> 3, -2.5 -> -2).
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Share of the course handicap a player receives in a format
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Allowance(f64);

impl Allowance {
    pub const FULL: Self = Self(FULL_ALLOWANCE);
    pub const INDIVIDUAL_STROKE_PLAY: Self = Self(INDIVIDUAL_STROKE_PLAY_ALLOWANCE);

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidAllowance(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Allowance {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<f64> for Allowance {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Allowance> for f64 {
    fn from(allowance: Allowance) -> Self {
        allowance.0
    }
}

pub fn validate_handicap_index(handicap_index: f64) -> Result<()> {
    if handicap_index.is_finite() && INDEX_RANGE.contains(&handicap_index) {
        Ok(())
    } else {
        Err(Error::InvalidHandicapIndex(handicap_index))
    }
}

/// Course handicap: `HI × slope / 113 + (course rating − par)`, rounded
pub fn course_handicap(handicap_index: f64, tee: &TeeBoxRating) -> Result<i32> {
    validate_handicap_index(handicap_index)?;
    tee.validate()?;

    let raw = handicap_index * (f64::from(tee.slope_rating) / STANDARD_SLOPE)
        + tee.rating_adjustment();
    Ok(round_half_up(raw))
}

/// Playing handicap: course handicap scaled by the format allowance, rounded
pub fn playing_handicap(course_handicap: i32, allowance: Allowance) -> i32 {
    round_half_up(f64::from(course_handicap) * allowance.value())
}

/// Strokes a player receives under a policy, never negative.
///
/// `group_lowest_ph` is the lowest playing handicap in the group and is
/// required for match play.
pub fn match_handicap(
    policy: HandicapPolicy,
    playing_handicap: i32,
    group_lowest_ph: Option<i32>,
) -> Result<i32> {
    let mh = match policy {
        HandicapPolicy::MatchPlay => {
            let lowest = group_lowest_ph.ok_or(Error::MissingGroupContext)?;
            if lowest > playing_handicap {
                warn!(
                    "Group lowest playing handicap {} is above player's {}",
                    lowest, playing_handicap
                );
            }
            playing_handicap - lowest
        }
        HandicapPolicy::StrokePlay | HandicapPolicy::Random => playing_handicap,
        HandicapPolicy::None | HandicapPolicy::Ghost => 0,
    };
    Ok(mh.max(0))
}

/// Match handicaps for a whole group: the lowest plays off scratch.
pub fn match_handicaps(playing_handicaps: &[i32]) -> Vec<i32> {
    let Some(&lowest) = playing_handicaps.iter().min() else {
        return Vec::new();
    };
    playing_handicaps.iter().map(|ph| ph - lowest).collect()
}

/// Target total for a player: course par plus playing handicap
pub fn personal_par(course_par: i32, playing_handicap: i32) -> i32 {
    course_par + playing_handicap
}

/// Plus handicaps render as `+X.X`
pub fn format_handicap_index(handicap_index: f64) -> String {
    if handicap_index < 0.0 {
        format!("+{:.1}", handicap_index.abs())
    } else {
        format!("{:.1}", handicap_index)
    }
}

/// Derived handicaps of one player on one tee box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandicapProfile {
    pub handicap_index: f64,
    pub course_handicap: i32,
    pub playing_handicap: i32,
}

impl HandicapProfile {
    pub fn compute(handicap_index: f64, tee: &TeeBoxRating, allowance: Allowance) -> Result<Self> {
        let course_handicap = course_handicap(handicap_index, tee)?;
        let playing_handicap = playing_handicap(course_handicap, allowance);
        debug!(
            "HI {} on slope {}/{}: CH {}, PH {}",
            handicap_index, tee.slope_rating, tee.course_rating, course_handicap, playing_handicap
        );
        Ok(Self {
            handicap_index,
            course_handicap,
            playing_handicap,
        })
    }

    pub fn personal_par(&self, course_par: i32) -> i32 {
        personal_par(course_par, self.playing_handicap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee(slope: i32, rating: f64, par: i32) -> TeeBoxRating {
        TeeBoxRating::new(slope, rating, par)
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_course_handicap_neutral_course() {
        assert_eq!(course_handicap(18.0, &tee(113, 72.0, 72)).unwrap(), 18);
        assert_eq!(course_handicap(0.0, &tee(113, 72.0, 72)).unwrap(), 0);
    }

    #[test]
    fn test_course_handicap_with_slope_and_rating() {
        // 15.4 * 125 / 113 + (71.3 - 72) = 17.035 - 0.7 = 16.335
        assert_eq!(course_handicap(15.4, &tee(125, 71.3, 72)).unwrap(), 16);
        // 22.1 * 135 / 113 + (73.5 - 72) = 26.40 + 1.5 = 27.90
        assert_eq!(course_handicap(22.1, &tee(135, 73.5, 72)).unwrap(), 28);
    }

    #[test]
    fn test_course_handicap_plus_player() {
        // -2.0 * 113 / 113 + 0 = -2
        assert_eq!(course_handicap(-2.0, &tee(113, 72.0, 72)).unwrap(), -2);
    }

    #[test]
    fn test_course_handicap_is_deterministic() {
        let t = tee(128, 70.9, 71);
        let a = course_handicap(12.7, &t).unwrap();
        let b = course_handicap(12.7, &t).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_course_handicap_errors() {
        assert!(matches!(
            course_handicap(10.0, &tee(0, 72.0, 72)),
            Err(Error::InvalidRating(_))
        ));
        assert!(matches!(
            course_handicap(60.0, &tee(113, 72.0, 72)),
            Err(Error::InvalidHandicapIndex(_))
        ));
        assert!(matches!(
            course_handicap(f64::NAN, &tee(113, 72.0, 72)),
            Err(Error::InvalidHandicapIndex(_))
        ));
    }

    #[test]
    fn test_playing_handicap_allowances() {
        assert_eq!(playing_handicap(24, Allowance::FULL), 24);
        assert_eq!(playing_handicap(-3, Allowance::FULL), -3);
        // 24 * 0.95 = 22.8
        assert_eq!(playing_handicap(24, Allowance::INDIVIDUAL_STROKE_PLAY), 23);
        // 10 * 0.95 = 9.5
        assert_eq!(playing_handicap(10, Allowance::INDIVIDUAL_STROKE_PLAY), 10);
    }

    #[test]
    fn test_allowance_bounds() {
        assert!(Allowance::new(0.85).is_ok());
        assert!(matches!(
            Allowance::new(0.0),
            Err(Error::InvalidAllowance(_))
        ));
        assert!(matches!(
            Allowance::new(1.2),
            Err(Error::InvalidAllowance(_))
        ));
        assert!(Allowance::new(f64::NAN).is_err());
        assert_eq!(Allowance::default(), Allowance::FULL);
    }

    #[test]
    fn test_match_handicap_policies() {
        assert_eq!(match_handicap(HandicapPolicy::MatchPlay, 17, Some(9)).unwrap(), 8);
        assert_eq!(match_handicap(HandicapPolicy::MatchPlay, 9, Some(9)).unwrap(), 0);
        assert_eq!(match_handicap(HandicapPolicy::StrokePlay, 17, None).unwrap(), 17);
        assert_eq!(match_handicap(HandicapPolicy::Random, 17, None).unwrap(), 17);
        assert_eq!(match_handicap(HandicapPolicy::None, 17, Some(9)).unwrap(), 0);
        assert_eq!(match_handicap(HandicapPolicy::Ghost, 17, None).unwrap(), 0);
    }

    #[test]
    fn test_match_handicap_requires_group() {
        assert!(matches!(
            match_handicap(HandicapPolicy::MatchPlay, 17, None),
            Err(Error::MissingGroupContext)
        ));
    }

    #[test]
    fn test_match_handicap_never_negative() {
        assert_eq!(match_handicap(HandicapPolicy::StrokePlay, -3, None).unwrap(), 0);
        assert_eq!(match_handicap(HandicapPolicy::MatchPlay, 5, Some(9)).unwrap(), 0);
    }

    #[test]
    fn test_match_handicaps_group() {
        assert_eq!(match_handicaps(&[9, 17, 24]), vec![0, 8, 15]);
        assert_eq!(match_handicaps(&[-2, 4]), vec![0, 6]);
        assert!(match_handicaps(&[]).is_empty());
    }

    #[test]
    fn test_personal_par_and_format() {
        assert_eq!(personal_par(72, 23), 95);
        assert_eq!(format_handicap_index(8.2), "8.2");
        assert_eq!(format_handicap_index(-1.4), "+1.4");
        assert_eq!(format_handicap_index(0.0), "0.0");
    }

    #[test]
    fn test_profile_compute() {
        let profile = HandicapProfile::compute(23.0, &tee(113, 72.0, 72), Allowance::FULL).unwrap();
        assert_eq!(profile.course_handicap, 23);
        assert_eq!(profile.playing_handicap, 23);
        assert_eq!(profile.personal_par(72), 95);
    }
}
