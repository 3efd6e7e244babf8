use tracing::debug;

use crate::course::ParTable;
use crate::error::Result;

use super::match_play::match_play_scores;
use super::net::net_score;
use super::skins::skins_scores;
use super::stableford::stableford_score;
use super::standings::rank;
use super::{Leaderboard, PlayerCard, RunningScore, ScoringMethod, Standing};

/// Score every card under a method given by name.
///
/// Fails only for an unknown method; partial cards give partial totals.
pub fn score(method: &str, cards: &[PlayerCard], pars: &ParTable) -> Result<Leaderboard> {
    let method = ScoringMethod::from_name(method)?;
    Ok(evaluate(method, cards, pars))
}

/// Score every card under a method and rank the players.
pub fn evaluate(method: ScoringMethod, cards: &[PlayerCard], pars: &ParTable) -> Leaderboard {
    let mut pending_skins = 0.0;

    let scores: Vec<RunningScore> = match method {
        ScoringMethod::NetScore => cards
            .iter()
            .map(|c| RunningScore::NetScore(net_score(c)))
            .collect(),
        ScoringMethod::MatchPlay => match_play_scores(cards, pars)
            .into_iter()
            .map(RunningScore::MatchPlay)
            .collect(),
        ScoringMethod::Stableford => cards
            .iter()
            .map(|c| RunningScore::Stableford(stableford_score(c, pars.holes())))
            .collect(),
        ScoringMethod::Skins => {
            let outcome = skins_scores(cards, pars);
            pending_skins = outcome.pending;
            outcome.scores.into_iter().map(RunningScore::Skins).collect()
        }
    };

    let mut standings: Vec<Standing> = cards
        .iter()
        .zip(scores)
        .map(|(card, score)| Standing {
            player_id: card.player_id.clone(),
            position: 0,
            holes_played: card.holes_played(),
            score,
        })
        .collect();
    rank(&mut standings);

    let holes_played = pars
        .holes()
        .filter(|&h| cards.iter().any(|c| c.gross_on(h).is_some()))
        .count();
    let is_complete = !cards.is_empty()
        && pars
            .holes()
            .all(|h| cards.iter().all(|c| c.gross_on(h).is_some()));

    debug!(
        "{}: {} players, {} holes played",
        method,
        cards.len(),
        holes_played
    );

    Leaderboard {
        method,
        standings,
        holes_played,
        total_holes: pars.len(),
        is_complete,
        pending_skins,
    }
}
