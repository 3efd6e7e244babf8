use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::round::FRONT_NINE_END;

use super::PlayerCard;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetScore {
    pub gross: i32,
    pub net: i32,
    /// Net total minus par of the recorded holes
    pub to_par: i32,
    pub front_nine: i32,
    pub back_nine: i32,
}

impl NetScore {
    pub(crate) fn rank_cmp(&self, other: &Self) -> Ordering {
        self.to_par
            .cmp(&other.to_par)
            .then(self.net.cmp(&other.net))
    }
}

pub(crate) fn net_score(card: &PlayerCard) -> NetScore {
    let mut score = NetScore {
        gross: 0,
        net: 0,
        to_par: 0,
        front_nine: 0,
        back_nine: 0,
    };
    let mut par = 0;

    for hole in card.recorded() {
        let (Some(gross), Some(net)) = (hole.recorded(), hole.net(&card.allocation)) else {
            continue;
        };
        let gross = gross as i32;
        score.gross += gross;
        score.net += net;
        par += i32::from(hole.par);
        if hole.hole_number <= FRONT_NINE_END {
            score.front_nine += gross;
        } else {
            score.back_nine += gross;
        }
    }

    score.to_par = score.net - par;
    score
}

/// `E` for even, otherwise a signed number (`+5`, `-2`)
pub fn format_score_to_par(score_to_par: i32) -> String {
    match score_to_par.cmp(&0) {
        Ordering::Equal => "E".to_string(),
        Ordering::Greater => format!("+{}", score_to_par),
        Ordering::Less => score_to_par.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::StrokeIndexTable;
    use crate::handicap::{StrokeAllocation, stroke_index_first};

    #[test]
    fn test_net_total_is_gross_minus_allocation() {
        let allocation = stroke_index_first(18, &StrokeIndexTable::identity());
        let mut card = PlayerCard::new("ana", allocation);
        let strokes = [5, 4, 6, 5, 4, 6, 5, 4, 6];
        for (i, &s) in strokes.iter().enumerate() {
            card.record((i + 1) as u8, 4, Some(s)).unwrap();
        }

        let score = net_score(&card);
        assert_eq!(score.gross, 45);
        assert_eq!(score.net, 45 - 9);
        assert_eq!(score.to_par, 36 - 36);
        assert_eq!(score.front_nine, 45);
        assert_eq!(score.back_nine, 0);
    }

    #[test]
    fn test_unrecorded_holes_are_ignored() {
        let mut card = PlayerCard::new("ana", StrokeAllocation::zero());
        card.record(1, 4, Some(4)).unwrap();
        card.record(2, 5, None).unwrap();
        card.record(10, 3, Some(5)).unwrap();

        let score = net_score(&card);
        assert_eq!(score.net, 9);
        assert_eq!(score.to_par, 2);
        assert_eq!(score.back_nine, 5);
    }

    #[test]
    fn test_format_score_to_par() {
        assert_eq!(format_score_to_par(0), "E");
        assert_eq!(format_score_to_par(5), "+5");
        assert_eq!(format_score_to_par(-2), "-2");
    }
}
