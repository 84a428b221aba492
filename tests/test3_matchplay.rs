use golf_trip::model::types::{IndividualMatch, Match, Player, Score};
use golf_trip::scoring::{derive_match_standing, derive_singles_standing, HoleWinner};

fn player(id: i64, handicap: Option<&str>) -> Player {
    Player {
        id,
        first_name: format!("Player{id}"),
        last_name: "Test".to_string(),
        handicap: handicap.map(str::to_string),
        team_id: None,
    }
}

fn score(round_id: i64, player_id: i64, hole: i64, gross: i64) -> Score {
    Score {
        id: player_id * 100 + hole,
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

fn fourball() -> Match {
    Match {
        id: 1,
        round_id: 1,
        team_a: 1,
        team_b: 2,
        pair_a_player1: 1,
        pair_a_player2: 2,
        pair_b_player1: 3,
        pair_b_player2: 4,
    }
}

#[test]
fn betterball_standing_over_partial_round() {
    let players: Vec<Player> = (1..=4).map(|id| player(id, Some("0"))).collect();
    // Amendoeira front: hole 1 par 4, hole 2 par 3, hole 3 par 4, hole 4 par 5.
    let scores = vec![
        // Hole 1: pair A's birdie beats two pars.
        score(1, 1, 1, 3),
        score(1, 2, 1, 5),
        score(1, 3, 1, 4),
        score(1, 4, 1, 4),
        // Hole 2: pair B's birdie two wins it back.
        score(1, 1, 2, 3),
        score(1, 2, 2, 4),
        score(1, 3, 2, 2),
        score(1, 4, 2, 3),
        // Hole 3: all square pars.
        score(1, 1, 3, 4),
        score(1, 2, 3, 4),
        score(1, 3, 3, 4),
        score(1, 4, 3, 4),
        // Hole 4: only one player recorded anything; the hole still counts.
        score(1, 1, 4, 5),
    ];

    let standing = derive_match_standing(&fourball(), &players, &scores, "amendoeira");

    assert_eq!(standing.holes_played, 4);
    assert_eq!(standing.holes_remaining, 14);
    assert_eq!(standing.holes_won_a, 2);
    assert_eq!(standing.holes_won_b, 1);
    assert_eq!(standing.holes_halved, 1);
    assert_eq!(standing.status, "1UP");
    assert_eq!(standing.leader, Some(HoleWinner::TeamA));

    // Unplayed holes are excluded outright, not recorded as ties.
    assert_eq!(standing.hole_results.len(), 4);
    assert_eq!(standing.hole_results[3].winner, HoleWinner::TeamA);
    assert_eq!(standing.hole_results[3].pair_b_points, vec![0, 0]);
}

#[test]
fn match_closes_out_when_lead_exceeds_holes_left() {
    let players = vec![player(1, Some("0")), player(2, Some("0"))];
    let singles = IndividualMatch {
        id: 1,
        round_id: 1,
        player1: 1,
        player2: 2,
    };

    let mut scores = Vec::new();
    const AMENDOEIRA_PARS: [i64; 18] = [4, 3, 4, 5, 4, 3, 4, 4, 5, 4, 3, 4, 5, 4, 4, 3, 4, 5];
    // Player 1 takes the first five holes, the next ten are halved, and the
    // last three are never played: won 5, fifteen played, three remaining.
    for hole in 1..=15 {
        let par = AMENDOEIRA_PARS[hole as usize - 1];
        scores.push(score(1, 1, hole, par));
        let p2_gross = if hole <= 5 { par + 2 } else { par };
        scores.push(score(1, 2, hole, p2_gross));
    }

    let standing = derive_singles_standing(&singles, &players, &scores, "amendoeira");

    assert_eq!(standing.holes_played, 15);
    assert_eq!(standing.holes_won_a, 5);
    assert_eq!(standing.holes_won_b, 0);
    assert_eq!(standing.holes_halved, 10);
    assert_eq!(standing.status, "5&4");
    assert_eq!(standing.leader, Some(HoleWinner::TeamA));
}

#[test]
fn handicap_strokes_decide_singles_holes() {
    // Hole 5 at Amendoeira: par 4, stroke index 9. A 9-handicap gets a shot
    // there; both players making gross 5 is a net win for the higher mark.
    let players = vec![player(1, Some("9")), player(2, Some("0"))];
    let singles = IndividualMatch {
        id: 1,
        round_id: 1,
        player1: 1,
        player2: 2,
    };
    let scores = vec![score(1, 1, 5, 5), score(1, 2, 5, 5)];

    let standing = derive_singles_standing(&singles, &players, &scores, "amendoeira");

    assert_eq!(standing.holes_played, 1);
    assert_eq!(standing.holes_won_a, 1);
    assert_eq!(standing.status, "1UP");
}

#[test]
fn unplayed_match_is_all_square() {
    let players: Vec<Player> = (1..=4).map(|id| player(id, None)).collect();
    let standing = derive_match_standing(&fourball(), &players, &[], "amendoeira");

    assert_eq!(standing.holes_played, 0);
    assert_eq!(standing.holes_remaining, 18);
    assert_eq!(standing.status, "AS");
    assert_eq!(standing.leader, None);
    assert!(standing.hole_results.is_empty());
}

#[test]
fn scores_from_other_rounds_are_ignored() {
    let players: Vec<Player> = (1..=4).map(|id| player(id, Some("0"))).collect();
    let scores = vec![score(2, 1, 1, 3), score(2, 3, 1, 5)];
    let standing = derive_match_standing(&fourball(), &players, &scores, "amendoeira");
    assert_eq!(standing.holes_played, 0);
    assert_eq!(standing.status, "AS");
}

#[test]
fn missing_roster_entries_contribute_nothing() {
    // Match references players that are not on file; their holes resolve
    // from whoever is actually present.
    let players = vec![player(1, Some("0"))];
    let scores = vec![score(1, 1, 1, 4)];
    let standing = derive_match_standing(&fourball(), &players, &scores, "amendoeira");
    assert_eq!(standing.holes_played, 1);
    assert_eq!(standing.holes_won_a, 1);
}
