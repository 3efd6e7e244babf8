//! Round file loading and end-to-end scoring tests.

use std::io::Write;

use fairway_core::{Error, HandicapPolicy, RoundFile, RunningScore, ScoringMethod};
use tempfile::NamedTempFile;

const PARS: [u8; 18] = [4, 5, 4, 4, 3, 5, 3, 4, 4, 4, 4, 3, 4, 5, 5, 4, 3, 5];
const PEBBLE: [u8; 18] = [8, 10, 12, 16, 14, 2, 4, 6, 18, 7, 5, 17, 9, 11, 1, 13, 15, 3];

fn course_toml() -> String {
    let mut content = String::from(
        "[course]\nname = \"Cliffside\"\n\n[course.tee]\nslope_rating = 113\ncourse_rating = 73.0\npar = 73\n",
    );
    for (i, (par, si)) in PARS.iter().zip(PEBBLE).enumerate() {
        content.push_str(&format!(
            "\n[[course.holes]]\nnumber = {}\npar = {}\nstroke_index = {}\n",
            i + 1,
            par,
            si
        ));
    }
    content
}

fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn stableford_round() -> String {
    let mut content = String::from(
        "handicap_policy = \"stroke_play\"\nscoring_method = \"stableford\"\n\n",
    );
    content.push_str(&course_toml());
    // Ana plays off 2 (strokes on holes 15 and 6), Ben off scratch
    content.push_str(
        "\n[[players]]\nname = \"Ana\"\nhandicap_index = 2.0\nstrokes = [4, 5, 4, 4]\n",
    );
    content.push_str(
        "\n[[players]]\nname = \"Ben\"\nhandicap_index = 0.0\nstrokes = [3, 6, 0, 4]\n",
    );
    content
}

#[test]
fn test_load_toml_round() {
    let file = write_temp(".toml", &stableford_round());
    let round = RoundFile::load(file.path()).unwrap();
    assert_eq!(round.course.name, "Cliffside");
    assert_eq!(round.players.len(), 2);

    let report = round.evaluate(None, None).unwrap();
    let board = &report.leaderboard;
    assert_eq!(board.method, ScoringMethod::Stableford);
    assert_eq!(board.holes_played, 4);
    assert!(!board.is_complete);

    // Ana: four pars -> 8; Ben: birdie, bogey, unrecorded, par -> 6
    let ana = board.standing("Ana").unwrap();
    let ben = board.standing("Ben").unwrap();
    assert_eq!(ana.score.total(), 8.0);
    assert_eq!(ben.score.total(), 6.0);
    assert_eq!(ana.position, 1);
    assert_eq!(ben.holes_played, 3);
}

#[test]
fn test_load_json_round_matches_toml() {
    let toml_round = RoundFile::from_toml_str(&stableford_round()).unwrap();
    let json = toml_round.to_json().unwrap();
    let file = write_temp(".json", &json);

    let json_round = RoundFile::load(file.path()).unwrap();
    let a = toml_round.evaluate(Some("net_score"), None).unwrap();
    let b = json_round.evaluate(Some("net_score"), None).unwrap();
    assert_eq!(a.leaderboard, b.leaderboard);
}

#[test]
fn test_json_null_strokes_are_unrecorded() {
    let round = RoundFile::from_toml_str(&stableford_round()).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&round.to_json().unwrap()).unwrap();
    value["players"][0]["strokes"] = serde_json::json!([4, null, 4]);

    let round = RoundFile::from_json_str(&value.to_string()).unwrap();
    let report = round.evaluate(None, None).unwrap();
    assert_eq!(report.leaderboard.standing("Ana").unwrap().holes_played, 2);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = RoundFile::load(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_load_malformed_toml() {
    let file = write_temp(".toml", "players = 3");
    assert!(matches!(RoundFile::load(file.path()), Err(Error::Toml(_))));
}

#[test]
fn test_stroke_play_allocation_follows_stroke_index() {
    let round = RoundFile::from_toml_str(&stableford_round()).unwrap();
    let setup = round.setup(None).unwrap();
    assert_eq!(setup.handicap_policy, HandicapPolicy::StrokePlay);

    let ana = setup.player("Ana").unwrap();
    assert_eq!(ana.match_handicap, 2);
    // SI 1 and 2 are holes 15 and 6; SI 3 is hole 18
    assert_eq!(ana.allocation.strokes_on(15), 1);
    assert_eq!(ana.allocation.strokes_on(6), 1);
    assert_eq!(ana.allocation.strokes_on(18), 0);
    assert_eq!(setup.player("Ben").unwrap().allocation.total(), 0);
}

#[test]
fn test_ghost_round_from_file() {
    let mut content = String::from("handicap_policy = \"ghost\"\nscoring_method = \"net_score\"\n\n");
    content.push_str(&course_toml());
    content.push_str("\n[[players]]\nname = \"Ana\"\nhandicap_index = 14.0\nstrokes = [5, 5]\n");
    content.push_str("\n[ghost]\nlabel = \"Best round\"\n");
    content.push_str(&format!("allocation = {:?}\n", [1u32; 18]));
    content.push_str(&format!("strokes = {:?}\n", [5u32; 18]));

    let round = RoundFile::from_toml_str(&content).unwrap();
    let report = round.evaluate(None, None).unwrap();
    assert_eq!(report.setup.player("Ana").unwrap().match_handicap, 0);

    let ghost = report.leaderboard.standing("Best round").unwrap();
    assert_eq!(ghost.holes_played, 18);
    match &ghost.score {
        RunningScore::NetScore(score) => {
            assert_eq!(score.gross, 90);
            assert_eq!(score.net, 72);
        }
        other => panic!("unexpected score: {:?}", other),
    }
}

#[test]
fn test_ghost_policy_without_reference() {
    let mut content = String::from("handicap_policy = \"ghost\"\n\n");
    content.push_str(&course_toml());
    content.push_str("\n[[players]]\nname = \"Ana\"\nhandicap_index = 14.0\n");

    let round = RoundFile::from_toml_str(&content).unwrap();
    assert!(matches!(round.setup(None), Err(Error::MissingGhostReference)));
}
