//! Console output formatting with colored display

use std::fmt::Write as _;

use fairway_core::handicap::format_handicap_index;
use fairway_core::scoring::format_score_to_par;
use fairway_core::{
    HandicapProfile, PaceReport, ProbabilityTone, RoundReport, RoundSetup, RunningScore,
    TeeBoxRating,
};
use owo_colors::OwoColorize;

const BORDER_WIDTH: usize = 50;

fn border() -> String {
    "━".repeat(BORDER_WIDTH).dimmed().to_string()
}

pub fn format_profile(profile: &HandicapProfile, tee: &TeeBoxRating) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "  HANDICAP INDEX : {}",
        format_handicap_index(profile.handicap_index).bold()
    );
    let _ = writeln!(
        output,
        "  TEE            : slope {} / rating {:.1} / par {}",
        tee.slope_rating, tee.course_rating, tee.par
    );
    let _ = writeln!(output, "  COURSE HCP     : {}", profile.course_handicap);
    let _ = writeln!(
        output,
        "  PLAYING HCP    : {}",
        profile.playing_handicap.green()
    );
    let _ = writeln!(
        output,
        "  PERSONAL PAR   : {}",
        profile.personal_par(tee.par)
    );
    output
}

pub fn format_setup(setup: &RoundSetup) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", border());
    let _ = writeln!(
        output,
        "  {} (par {}) - {}",
        setup.course.bold(),
        setup.course_par,
        setup.handicap_policy.title()
    );
    if let Some(seed) = setup.seed {
        let _ = writeln!(output, "  {}", format!("seed {}", seed).dimmed());
    }
    let _ = writeln!(output, "{}", border());

    let mut header = format!("  {:<12} {:>3} {:>3} {:>3} |", "HOLE", "CH", "PH", "MH");
    let mut si_row = format!("  {:<12} {:>11} |", "SI", "");
    for (hole, si) in setup.stroke_indexes.iter() {
        let _ = write!(header, "{:>3}", hole);
        let _ = write!(si_row, "{:>3}", si);
    }
    let _ = writeln!(output, "{}", header.bold());
    let _ = writeln!(output, "{}", si_row.dimmed());

    for player in &setup.players {
        let (ch, ph) = match &player.profile {
            Some(profile) => (
                profile.course_handicap.to_string(),
                profile.playing_handicap.to_string(),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        let mut row = format!(
            "  {:<12} {:>3} {:>3} {:>3} |",
            player.name, ch, ph, player.match_handicap
        );
        for (_, strokes) in player.allocation.iter() {
            if strokes == 0 {
                let _ = write!(row, "{:>3}", "·");
            } else {
                let _ = write!(row, "{:>3}", strokes);
            }
        }
        let _ = writeln!(output, "{}", row);
    }
    output
}

fn format_running_score(score: &RunningScore) -> String {
    match score {
        RunningScore::NetScore(s) => format!(
            "net {} ({}) gross {}  out {} in {}",
            s.net,
            format_score_to_par(s.to_par),
            s.gross,
            s.front_nine,
            s.back_nine
        ),
        RunningScore::MatchPlay(s) => {
            let mut text = format!(
                "{} pts  W{} H{} L{}",
                s.points, s.holes_won, s.holes_halved, s.holes_lost
            );
            if let Some(status) = s.status {
                let _ = write!(text, "  {}", status);
            }
            text
        }
        RunningScore::Stableford(s) => format!(
            "{} pts  birdies+ {} pars {} bogeys {}",
            s.points, s.birdies_or_better, s.pars, s.bogeys
        ),
        RunningScore::Skins(s) => {
            let holes: Vec<String> = s.holes_won.iter().map(|h| h.to_string()).collect();
            if holes.is_empty() {
                format!("{} skins", s.skins)
            } else {
                format!("{} skins (holes {})", s.skins, holes.join(", "))
            }
        }
    }
}

pub fn format_leaderboard(report: &RoundReport) -> String {
    let board = &report.leaderboard;
    let mut output = String::new();
    let _ = writeln!(output, "{}", border());
    let _ = writeln!(
        output,
        "  {} - {} / {}",
        report.setup.course.bold(),
        board.method.title(),
        report.setup.handicap_policy.title()
    );
    let progress = if board.is_complete {
        "final".green().to_string()
    } else {
        format!("thru {} of {}", board.holes_played, board.total_holes)
            .yellow()
            .to_string()
    };
    let _ = writeln!(output, "  {}", progress);
    let _ = writeln!(output, "{}", border());

    for standing in &board.standings {
        let position = if board
            .standings
            .iter()
            .filter(|s| s.position == standing.position)
            .count()
            > 1
        {
            format!("T{}", standing.position)
        } else {
            standing.position.to_string()
        };
        let line = format!(
            "  {:>3}  {:<14} {}",
            position,
            standing.player_id,
            format_running_score(&standing.score)
        );
        if standing.position == 1 {
            let _ = writeln!(output, "{}", line.bold());
        } else {
            let _ = writeln!(output, "{}", line);
        }
    }

    if board.pending_skins > 0.0 {
        let _ = writeln!(
            output,
            "  {}",
            format!("{} skins carried over", board.pending_skins).dimmed()
        );
    }
    output
}

pub fn format_pace(report: &PaceReport) -> String {
    let probability = format!("{}%", report.probability);
    let probability = match report.tone {
        ProbabilityTone::Success => probability.green().to_string(),
        ProbabilityTone::Primary => probability.cyan().to_string(),
        ProbabilityTone::Warning => probability.yellow().to_string(),
        ProbabilityTone::Danger => probability.red().to_string(),
    };

    let mut output = String::new();
    let _ = writeln!(output, "  PROBABILITY : {}", probability.bold());
    let _ = writeln!(output, "  REMAINING   : {}", report.strokes_remaining);
    let _ = writeln!(output, "  PACE        : {:.2}", report.performance_ratio);
    let _ = writeln!(output, "  {}", report.message);
    output
}
