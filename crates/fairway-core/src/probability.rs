//! Pace-based success heuristic.
//!
//! Estimates the chance of finishing at or under personal par (course par
//! plus playing handicap) from strokes taken so far. Display only.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::probability::{BASE, MAX, MIN, POINTS_PER_STROKE};
use crate::config::round::HOLES;
use crate::handicap::round_half_up;

const ROUND_HOLES: f64 = HOLES as f64;

/// Probability in percent, always within 5..=95.
///
/// `playing_handicap` is accepted for callers that track it but does not
/// change the result; personal par already includes it.
pub fn estimate(
    current_strokes: u32,
    holes_played: u32,
    personal_par: i32,
    _playing_handicap: i32,
) -> u8 {
    if holes_played == 0 {
        return BASE as u8;
    }
    let holes_played = f64::from(holes_played).min(ROUND_HOLES);

    let expected_so_far = f64::from(personal_par) * holes_played / ROUND_HOLES;
    let difference = expected_so_far - f64::from(current_strokes);
    let adjustment = difference * POINTS_PER_STROKE;
    let confidence = holes_played / ROUND_HOLES;

    let raw = BASE + adjustment * confidence;
    round_half_up(raw.clamp(MIN, MAX)) as u8
}

/// Strokes left before exceeding personal par; negative once over.
///
/// Saturates at `i32::MIN` for absurd stroke counts.
pub fn strokes_remaining(current_strokes: u32, personal_par: i32) -> i32 {
    let remaining = i64::from(personal_par) - i64::from(current_strokes);
    i32::try_from(remaining).unwrap_or(i32::MIN)
}

/// Strokes taken relative to expected pace: 1.0 on pace, below 1.0 ahead
pub fn performance_ratio(current_strokes: u32, holes_played: u32, personal_par: i32) -> f64 {
    if holes_played == 0 || personal_par <= 0 {
        return 1.0;
    }
    let expected = f64::from(personal_par) / ROUND_HOLES * f64::from(holes_played);
    f64::from(current_strokes) / expected
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceMessage {
    ToughDay,
    KeepFighting,
    LookingGreat,
    OnTrack,
    StayFocused,
    NeedBirdies,
    OneShotAtATime,
}

impl PerformanceMessage {
    pub fn from_pace(probability: u8, strokes_remaining: i32) -> Self {
        if strokes_remaining < -5 {
            Self::ToughDay
        } else if strokes_remaining < 0 {
            Self::KeepFighting
        } else if probability >= 80 {
            Self::LookingGreat
        } else if probability >= 60 {
            Self::OnTrack
        } else if probability >= 40 {
            Self::StayFocused
        } else if probability >= 20 {
            Self::NeedBirdies
        } else {
            Self::OneShotAtATime
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::ToughDay => "Tough day",
            Self::KeepFighting => "Keep fighting",
            Self::LookingGreat => "Looking great!",
            Self::OnTrack => "On track",
            Self::StayFocused => "Stay focused",
            Self::NeedBirdies => "Need birdies",
            Self::OneShotAtATime => "One shot at a time",
        }
    }
}

impl fmt::Display for PerformanceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Color class for a probability badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityTone {
    Success,
    Primary,
    Warning,
    Danger,
}

impl ProbabilityTone {
    pub fn from_probability(probability: u8) -> Self {
        match probability {
            70.. => Self::Success,
            50..=69 => Self::Primary,
            30..=49 => Self::Warning,
            _ => Self::Danger,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Primary => "primary",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Everything the pace widget shows for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceReport {
    pub probability: u8,
    pub strokes_remaining: i32,
    pub performance_ratio: f64,
    pub message: PerformanceMessage,
    pub tone: ProbabilityTone,
}

impl PaceReport {
    pub fn new(
        current_strokes: u32,
        holes_played: u32,
        personal_par: i32,
        playing_handicap: i32,
    ) -> Self {
        let probability = estimate(current_strokes, holes_played, personal_par, playing_handicap);
        let strokes_remaining = strokes_remaining(current_strokes, personal_par);
        Self {
            probability,
            strokes_remaining,
            performance_ratio: performance_ratio(current_strokes, holes_played, personal_par),
            message: PerformanceMessage::from_pace(probability, strokes_remaining),
            tone: ProbabilityTone::from_probability(probability),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_holes_played() {
        assert_eq!(estimate(0, 0, 95, 23), 50);
        assert_eq!(estimate(200, 0, 72, 0), 50);
    }

    #[test]
    fn test_on_pace() {
        // 9 holes of a 90 personal par: expected 45
        assert_eq!(estimate(45, 9, 90, 18), 50);
    }

    #[test]
    fn test_ahead_of_pace() {
        // 3 strokes ahead at halfway: 50 + 15 * 0.5 = 57.5
        assert_eq!(estimate(42, 9, 90, 18), 58);
    }

    #[test]
    fn test_full_round_has_no_damping() {
        // 4 strokes ahead after 18: 50 + 20
        assert_eq!(estimate(86, 18, 90, 18), 70);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(estimate(60, 18, 90, 18), 95);
        assert_eq!(estimate(130, 18, 90, 18), 5);
    }

    #[test]
    fn test_holes_played_capped() {
        assert_eq!(estimate(86, 27, 90, 18), estimate(86, 18, 90, 18));
    }

    #[test]
    fn test_companions() {
        assert_eq!(strokes_remaining(80, 95), 15);
        assert_eq!(strokes_remaining(100, 95), -5);
        assert_eq!(performance_ratio(50, 0, 90), 1.0);
        assert!((performance_ratio(45, 9, 90) - 1.0).abs() < 1e-9);
        assert!(performance_ratio(40, 9, 90) < 1.0);
    }

    #[test]
    fn test_strokes_remaining_saturates() {
        assert_eq!(strokes_remaining(u32::MAX / 2 + 1, 72), -2_147_483_576);
        assert_eq!(strokes_remaining(u32::MAX, -10), i32::MIN);
        assert_eq!(strokes_remaining(i32::MAX as u32, 0), -i32::MAX);

        let report = PaceReport::new(u32::MAX, 18, 90, 18);
        assert_eq!(report.probability, 5);
        assert_eq!(report.message, PerformanceMessage::ToughDay);
    }

    #[test]
    fn test_message_bands() {
        assert_eq!(PerformanceMessage::from_pace(90, -6), PerformanceMessage::ToughDay);
        assert_eq!(PerformanceMessage::from_pace(90, -1), PerformanceMessage::KeepFighting);
        assert_eq!(PerformanceMessage::from_pace(80, 3), PerformanceMessage::LookingGreat);
        assert_eq!(PerformanceMessage::from_pace(60, 3), PerformanceMessage::OnTrack);
        assert_eq!(PerformanceMessage::from_pace(40, 3), PerformanceMessage::StayFocused);
        assert_eq!(PerformanceMessage::from_pace(20, 3), PerformanceMessage::NeedBirdies);
        assert_eq!(PerformanceMessage::from_pace(5, 3), PerformanceMessage::OneShotAtATime);
        assert_eq!(PerformanceMessage::LookingGreat.to_string(), "Looking great!");
    }

    #[test]
    fn test_tone_bands() {
        assert_eq!(ProbabilityTone::from_probability(70), ProbabilityTone::Success);
        assert_eq!(ProbabilityTone::from_probability(50), ProbabilityTone::Primary);
        assert_eq!(ProbabilityTone::from_probability(30), ProbabilityTone::Warning);
        assert_eq!(ProbabilityTone::from_probability(29), ProbabilityTone::Danger);
    }

    #[test]
    fn test_pace_report() {
        let report = PaceReport::new(42, 9, 90, 18);
        assert_eq!(report.probability, 58);
        assert_eq!(report.strokes_remaining, 48);
        assert_eq!(report.tone, ProbabilityTone::Primary);
        assert_eq!(report.message, PerformanceMessage::StayFocused);
    }
}
