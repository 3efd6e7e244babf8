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
pub enum ScoringMethod {
    /// Total net strokes, lower is better
    #[serde(alias = "stroke_play")]
    #[strum(to_string = "net_score", serialize = "stroke_play")]
    NetScore,
    /// Pairwise hole-by-hole points, higher is better
    #[default]
    MatchPlay,
    /// Points from net score against par, higher is better
    Stableford,
    /// Outright hole wins with carryover on ties
    Skins,
}

impl ScoringMethod {
    /// Parse a method name such as `stableford`
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse().map_err(|_| Error::UnknownPolicy {
            kind: "scoring method",
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::NetScore => "Net Score",
            Self::MatchPlay => "Match Play",
            Self::Stableford => "Stableford",
            Self::Skins => "Skins",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::NetScore => "Total strokes minus handicap",
            Self::MatchPlay => "Points for each hole won",
            Self::Stableford => "Points based on score vs par",
            Self::Skins => "Winner takes all on each hole",
        }
    }

    /// Whether a lower total ranks first
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Self::NetScore)
    }
}
