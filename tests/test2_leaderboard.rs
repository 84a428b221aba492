use golf_trip::model::types::{Player, Round, Score, ScoringFormat, Team};
use golf_trip::scoring::{aggregate, aggregate_players, aggregate_teams, LeaderboardMode};

const AMENDOEIRA_PARS: [i64; 18] = [4, 3, 4, 5, 4, 3, 4, 4, 5, 4, 3, 4, 5, 4, 4, 3, 4, 5];

fn player(id: i64, first: &str, last: &str, handicap: Option<&str>, team_id: Option<i64>) -> Player {
    Player {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        handicap: handicap.map(str::to_string),
        team_id,
    }
}

fn score(id: i64, round_id: i64, player_id: i64, hole: i64, gross: i64) -> Score {
    Score {
        id,
        round_id,
        player_id,
        hole,
        score: gross,
        three_putt: false,
        picked_up: false,
        in_water: false,
        in_bunker: false,
    }
}

fn fixture() -> (Vec<Player>, Vec<Team>, Vec<Round>, Vec<Score>) {
    let players = vec![
        // Bogey golfer playing exactly to an 18 handicap.
        player(1, "John", "Doe", Some("18"), Some(1)),
        // Scratch player who only finished three holes.
        player(2, "Jane", "Smith", None, Some(2)),
        // Never teed off; must not appear anywhere.
        player(3, "Chris", "Slack", Some("7"), Some(1)),
    ];
    let teams = vec![
        Team {
            id: 1,
            name: "Team A".to_string(),
            captain_id: Some(1),
        },
        Team {
            id: 2,
            name: "Team B".to_string(),
            captain_id: None,
        },
    ];
    let rounds = vec![Round {
        id: 10,
        course: "amendoeira".to_string(),
        date: "2025-07-03".to_string(),
        format: ScoringFormat::Stroke,
        day: Some(2),
    }];

    let mut scores = Vec::new();
    let mut id = 0;
    for (i, par) in AMENDOEIRA_PARS.iter().enumerate() {
        id += 1;
        scores.push(score(id, 10, 1, i as i64 + 1, par + 1));
    }
    for (i, par) in AMENDOEIRA_PARS.iter().take(3).enumerate() {
        id += 1;
        scores.push(score(id, 10, 2, i as i64 + 1, *par));
    }
    (players, teams, rounds, scores)
}

#[test]
fn gross_ranks_by_to_par_ascending() {
    let (players, teams, rounds, scores) = fixture();
    let standings = aggregate_players(&players, &teams, &rounds, &scores, LeaderboardMode::Gross);

    assert_eq!(standings.len(), 2, "zero-score player must be excluded");
    // Jane only played 3 holes; unplayed holes contribute nothing, so her
    // 11 strokes sit far under the assumed 72 par.
    assert_eq!(standings[0].player_id, 2);
    assert_eq!(standings[0].total, 11);
    assert_eq!(standings[0].to_par, Some(11 - 72));
    assert_eq!(standings[1].player_id, 1);
    assert_eq!(standings[1].total, 90);
    assert_eq!(standings[1].to_par, Some(18));
    assert_eq!(standings[1].rounds_played, 1);
    assert_eq!(standings[1].best_round, Some(90));
    assert!((standings[1].average - 90.0).abs() < f64::EPSILON);
    assert_eq!(standings[1].team.as_deref(), Some("Team A"));
}

#[test]
fn net_subtracts_allocated_strokes_per_hole() {
    let (players, teams, rounds, scores) = fixture();
    let standings = aggregate_players(&players, &teams, &rounds, &scores, LeaderboardMode::Net);

    // An 18-handicap bogey round nets out to level par.
    let john = standings.iter().find(|s| s.player_id == 1).unwrap();
    assert_eq!(john.total, 72);
    assert_eq!(john.to_par, Some(0));
    // A missing handicap plays off scratch.
    let jane = standings.iter().find(|s| s.player_id == 2).unwrap();
    assert_eq!(jane.total, 11);
}

#[test]
fn stableford_ranks_by_points_descending() {
    let (players, teams, rounds, scores) = fixture();
    let standings =
        aggregate_players(&players, &teams, &rounds, &scores, LeaderboardMode::Stableford);

    // Net par every hole is 2 points a hole; three gross pars are 2 each.
    assert_eq!(standings[0].player_id, 1);
    assert_eq!(standings[0].total, 36);
    assert_eq!(standings[0].to_par, None);
    assert_eq!(standings[0].best_round, Some(36));
    assert_eq!(standings[1].player_id, 2);
    assert_eq!(standings[1].total, 6);
}

#[test]
fn team_standings_count_player_rounds() {
    let (players, teams, rounds, scores) = fixture();
    let standings = aggregate_teams(&players, &teams, &rounds, &scores, LeaderboardMode::Gross);

    assert_eq!(standings.len(), 2);
    let team_a = standings.iter().find(|s| s.team_id == 1).unwrap();
    // Chris never played, so Team A has one (player, round) pair.
    assert_eq!(team_a.rounds_played, 1);
    assert_eq!(team_a.players_count, 2);
    assert_eq!(team_a.total, 90);
    assert_eq!(team_a.to_par, Some(18));
    let team_b = standings.iter().find(|s| s.team_id == 2).unwrap();
    assert_eq!(team_b.total, 11);
    // Ascending by to-par puts Team B first.
    assert_eq!(standings[0].team_id, 2);
}

#[test]
fn teams_without_scores_are_excluded() {
    let (mut players, mut teams, rounds, scores) = fixture();
    teams.push(Team {
        id: 3,
        name: "Team C".to_string(),
        captain_id: None,
    });
    players.push(player(4, "Tom", "Miller", Some("5"), Some(3)));

    let standings = aggregate_teams(&players, &teams, &rounds, &scores, LeaderboardMode::Gross);
    assert!(standings.iter().all(|s| s.team_id != 3));
}

#[test]
fn aggregate_bundles_both_tables() {
    let (players, teams, rounds, scores) = fixture();
    let board = aggregate(&players, &teams, &rounds, &scores, LeaderboardMode::Stableford);
    assert_eq!(board.players.len(), 2);
    assert_eq!(board.teams.len(), 2);
    // Stableford team order is points-descending.
    assert_eq!(board.teams[0].team_id, 1);
}

#[test]
fn unknown_course_degrades_to_fallback_card() {
    let (players, teams, _, scores) = fixture();
    let rounds = vec![Round {
        id: 10,
        course: "not-a-course".to_string(),
        date: "2025-07-03".to_string(),
        format: ScoringFormat::Stroke,
        day: None,
    }];
    // Stroke index falls back to 18, so an 18 handicap still nets one a hole.
    let standings = aggregate_players(&players, &teams, &rounds, &scores, LeaderboardMode::Net);
    let john = standings.iter().find(|s| s.player_id == 1).unwrap();
    assert_eq!(john.total, 90 - 18);
}
