//! Round files.
//!
//! A round file describes a course, the game format and every player's
//! strokes so far. `.toml` files are read as TOML, anything else as JSON.
//! Strokes of `0` (or `null` in JSON) mark a hole as unrecorded.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::course::{Course, ParTable, StrokeIndexTable};
use crate::error::{Error, Result};
use crate::handicap::{
    AllocationContext, Allowance, GhostRound, HandicapPolicy, HandicapProfile, StrokeAllocation,
    allocate,
};
use crate::scoring::{Leaderboard, PlayerCard, ScoringMethod, evaluate};

fn default_policy() -> String {
    HandicapPolicy::default().name().to_string()
}

fn default_method() -> String {
    ScoringMethod::default().name().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    pub handicap_index: f64,
    /// Gross strokes by hole, starting at hole 1
    #[serde(default)]
    pub strokes: Vec<Option<u32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundFile {
    pub course: Course,
    #[serde(default = "default_policy")]
    pub handicap_policy: String,
    #[serde(default = "default_method")]
    pub scoring_method: String,
    /// Seed for the random handicap policy
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub allowance: Allowance,
    pub players: Vec<PlayerEntry>,
    #[serde(default)]
    pub ghost: Option<GhostRound>,
}

/// Handicaps and allocation of one player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    /// Absent when the policy ignores handicaps and the index is unusable
    pub profile: Option<HandicapProfile>,
    pub match_handicap: u32,
    pub allocation: StrokeAllocation,
}

/// Validated course tables and frozen allocations for a round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSetup {
    pub course: String,
    pub course_par: i32,
    pub handicap_policy: HandicapPolicy,
    /// Seed the allocations were drawn with (random policy only)
    pub seed: Option<u64>,
    pub stroke_indexes: StrokeIndexTable,
    pub pars: ParTable,
    pub players: Vec<PlayerSetup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    pub setup: RoundSetup,
    pub leaderboard: Leaderboard,
}

impl RoundFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let round = if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };
        info!(
            "Loaded round at {} with {} players from {:?}",
            round.course.name,
            round.players.len(),
            path
        );
        Ok(round)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate_players(&self) -> Result<()> {
        if self.players.is_empty() {
            return Err(Error::RoundFile("round has no players".to_string()));
        }
        let mut names = HashSet::new();
        for player in &self.players {
            if !names.insert(player.name.as_str()) {
                return Err(Error::RoundFile(format!(
                    "player name {} appears more than once",
                    player.name
                )));
            }
        }
        if let Some(ghost) = &self.ghost {
            ghost.validate()?;
            if names.contains(ghost.label.as_str()) {
                return Err(Error::RoundFile(format!(
                    "ghost label {} clashes with a player name",
                    ghost.label
                )));
            }
        }
        Ok(())
    }

    /// Validate the course and compute every player's allocation.
    ///
    /// `seed` overrides the file's seed. Under the random policy a seed is
    /// drawn when neither is given, and recorded in the setup.
    pub fn setup(&self, seed: Option<u64>) -> Result<RoundSetup> {
        self.validate_players()?;
        let (stroke_indexes, pars) = self.course.tables()?;
        let policy = HandicapPolicy::from_name(&self.handicap_policy)?;
        let tee = &self.course.tee;

        let profiles: Vec<Option<HandicapProfile>> = self
            .players
            .iter()
            .map(|p| {
                let profile = HandicapProfile::compute(p.handicap_index, tee, self.allowance);
                if policy.uses_handicap_index() {
                    profile.map(Some)
                } else {
                    Ok(profile.ok())
                }
            })
            .collect::<Result<_>>()?;
        let group_lowest_ph = if policy.needs_group() {
            profiles
                .iter()
                .flatten()
                .map(|p| p.playing_handicap)
                .min()
        } else {
            None
        };

        let seed = match policy {
            HandicapPolicy::Random => {
                Some(seed.or(self.seed).unwrap_or_else(|| rand::rng().random()))
            }
            _ => None,
        };
        if let Some(seed) = seed {
            debug!("Round seed: {}", seed);
        }

        let mut players = Vec::with_capacity(self.players.len());
        for (i, (entry, profile)) in self.players.iter().zip(profiles).enumerate() {
            let ctx = AllocationContext {
                allowance: self.allowance,
                group_lowest_ph,
                ghost: self.ghost.as_ref(),
                seed: seed.map(|s| s.wrapping_add(i as u64)),
            };
            let allocation = allocate(entry.handicap_index, tee, &stroke_indexes, policy, &ctx)?;
            players.push(PlayerSetup {
                name: entry.name.clone(),
                profile,
                match_handicap: allocation.total(),
                allocation,
            });
        }

        Ok(RoundSetup {
            course: self.course.name.clone(),
            course_par: tee.par,
            handicap_policy: policy,
            seed,
            stroke_indexes,
            pars,
            players,
        })
    }

    /// Scorecards for every player, plus the ghost under the ghost policy
    pub fn cards(&self, setup: &RoundSetup) -> Result<Vec<PlayerCard>> {
        let mut cards = Vec::with_capacity(self.players.len() + 1);
        for (entry, player) in self.players.iter().zip(&setup.players) {
            let mut card = PlayerCard::new(entry.name.clone(), player.allocation);
            for (i, strokes) in entry.strokes.iter().enumerate() {
                let hole = u8::try_from(i + 1).map_err(|_| {
                    Error::InvalidHoleScore(format!("{} has too many holes", entry.name))
                })?;
                let par = setup.pars.par(hole).ok_or_else(|| {
                    Error::InvalidHoleScore(format!(
                        "{} has a score for hole {}, which is not on the course",
                        entry.name, hole
                    ))
                })?;
                card.record(hole, par, strokes.filter(|&s| s > 0))?;
            }
            cards.push(card);
        }

        if setup.handicap_policy == HandicapPolicy::Ghost {
            let ghost = self.ghost.as_ref().ok_or(Error::MissingGhostReference)?;
            cards.push(PlayerCard::from_ghost(ghost, setup.pars.as_slice()));
        }
        Ok(cards)
    }

    /// Run the whole round: handicaps, allocations and standings.
    ///
    /// `method` overrides the file's scoring method.
    pub fn evaluate(&self, method: Option<&str>, seed: Option<u64>) -> Result<RoundReport> {
        let method = ScoringMethod::from_name(method.unwrap_or(&self.scoring_method))?;
        let setup = self.setup(seed)?;
        let cards = self.cards(&setup)?;
        let leaderboard = evaluate(method, &cards, &setup.pars);
        Ok(RoundReport { setup, leaderboard })
    }
}

impl RoundSetup {
    pub fn player(&self, name: &str) -> Option<&PlayerSetup> {
        self.players.iter().find(|p| p.name == name)
    }
}
