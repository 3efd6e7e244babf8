use serde::{Deserialize, Serialize};

use crate::course::ParTable;

use super::PlayerCard;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinsScore {
    /// Fractional when a final-hole tie is split
    pub skins: f64,
    /// Holes where this player took (or shared on the final hole) the pot
    pub holes_won: Vec<u8>,
}

pub(crate) struct SkinsOutcome {
    pub scores: Vec<SkinsScore>,
    pub pending: f64,
}

/// Award one skin per hole to the lowest net score.
///
/// Ties, holes where fewer than two players have a score, and holes nobody
/// has scored before the last recorded hole carry the pot to the next hole.
/// A tie on the final hole splits the pot between the tied players. Holes
/// after the last recorded one are not yet in play.
pub(crate) fn skins_scores(cards: &[PlayerCard], pars: &ParTable) -> SkinsOutcome {
    let mut scores: Vec<SkinsScore> = cards
        .iter()
        .map(|_| SkinsScore {
            skins: 0.0,
            holes_won: Vec::new(),
        })
        .collect();
    let mut carry = 0.0;
    let final_hole = pars.final_hole();
    let Some(last_played) = pars
        .holes()
        .filter(|&h| cards.iter().any(|c| c.net_on(h).is_some()))
        .max()
    else {
        return SkinsOutcome {
            scores,
            pending: carry,
        };
    };

    for hole in pars.holes().take_while(|&h| h <= last_played) {
        let nets: Vec<(usize, i32)> = cards
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.net_on(hole).map(|net| (i, net)))
            .collect();

        let pot = 1.0 + carry;
        if nets.len() < 2 {
            carry = pot;
            continue;
        }

        let best = nets.iter().map(|&(_, net)| net).min().unwrap_or_default();
        let winners: Vec<usize> = nets
            .iter()
            .filter(|&&(_, net)| net == best)
            .map(|&(i, _)| i)
            .collect();

        if winners.len() == 1 {
            let winner = &mut scores[winners[0]];
            winner.skins += pot;
            winner.holes_won.push(hole);
            carry = 0.0;
        } else if hole == final_hole {
            let share = pot / winners.len() as f64;
            for &i in &winners {
                scores[i].skins += share;
                scores[i].holes_won.push(hole);
            }
            carry = 0.0;
        } else {
            carry = pot;
        }
    }

    SkinsOutcome {
        scores,
        pending: carry,
    }
}
