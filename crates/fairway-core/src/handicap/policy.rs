use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HandicapPolicy {
    /// Strokes relative to the lowest playing handicap in the group
    #[default]
    MatchPlay,
    /// Full playing handicap for everyone
    StrokePlay,
    /// Everyone plays to course par
    None,
    /// Full playing handicap scattered over random holes
    Random,
    /// Live player plays to par against a recorded round
    Ghost,
}

impl HandicapPolicy {
    /// Parse a policy name such as `match_play`
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse().map_err(|_| Error::UnknownPolicy {
            kind: "handicap policy",
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::MatchPlay => "Match Play Handicap",
            Self::StrokePlay => "Stroke Play Handicap",
            Self::None => "No Handicap",
            Self::Random => "Lucky Draw",
            Self::Ghost => "Ghost Mode",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::MatchPlay => "Relative handicap - lowest plays off scratch",
            Self::StrokePlay => "Full handicap for all players",
            Self::None => "All players play to course par",
            Self::Random => "Full handicap strokes dropped on random holes",
            Self::Ghost => "Compete against historical performances",
        }
    }

    /// Whether the allocator needs the lowest playing handicap of the group
    pub fn needs_group(&self) -> bool {
        matches!(self, Self::MatchPlay)
    }

    /// Whether the player's handicap index feeds the allocation
    pub fn uses_handicap_index(&self) -> bool {
        matches!(self, Self::MatchPlay | Self::StrokePlay | Self::Random)
    }
}
