use ahash::AHashMap;
use serde::Serialize;

use crate::model::course::{hole_par, hole_stroke_index, HOLES_PER_ROUND};
use crate::model::types::{IndividualMatch, Match, Player, Score};
use crate::scoring::stableford::hole_points;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoleWinner {
    #[serde(rename = "teamA")]
    TeamA,
    #[serde(rename = "teamB")]
    TeamB,
    #[serde(rename = "tie")]
    Tie,
}

/// Betterball hole resolution: the better of each pair's two Stableford
/// scores counts; the higher best wins, equal bests halve the hole.
#[must_use]
pub fn resolve_hole(pair_a: &[i64], pair_b: &[i64]) -> HoleWinner {
    let best_a = pair_a.iter().copied().max().unwrap_or(0);
    let best_b = pair_b.iter().copied().max().unwrap_or(0);
    if best_a > best_b {
        HoleWinner::TeamA
    } else if best_b > best_a {
        HoleWinner::TeamB
    } else {
        HoleWinner::Tie
    }
}

/// Standard matchplay status token.
///
/// "AS" when level; "{lead}UP" while the trailer can still draw level;
/// "{lead}&{remaining+1}" once the lead exceeds the holes remaining and the
/// match is mathematically decided.
#[must_use]
pub fn match_status(holes_won: i64, holes_lost: i64, holes_remaining: i64) -> String {
    let lead = holes_won - holes_lost;
    if lead == 0 {
        return "AS".to_string();
    }
    let margin = lead.abs();
    if margin > holes_remaining {
        format!("{margin}&{}", holes_remaining + 1)
    } else {
        format!("{margin}UP")
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HoleResult {
    pub hole: i64,
    pub par: i64,
    pub pair_a_points: Vec<i64>,
    pub pair_b_points: Vec<i64>,
    pub winner: HoleWinner,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MatchStanding {
    pub holes_won_a: i64,
    pub holes_won_b: i64,
    pub holes_halved: i64,
    pub holes_played: i64,
    pub holes_remaining: i64,
    pub status: String,
    /// Side currently ahead, if any.
    pub leader: Option<HoleWinner>,
    pub hole_results: Vec<HoleResult>,
}

struct Pairing<'a> {
    side_a: Vec<&'a Player>,
    side_b: Vec<&'a Player>,
}

fn find_players<'a>(players: &'a [Player], ids: &[i64]) -> Vec<&'a Player> {
    ids.iter()
        .filter_map(|id| players.iter().find(|p| p.id == *id))
        .collect()
}

/// Walk holes 1..=18, scoring only holes where at least one of the pairing's
/// players has a recorded gross score. Unplayed holes are excluded from the
/// tally entirely rather than halved.
fn derive_standing(pairing: &Pairing<'_>, scores: &[Score], round_id: i64, course_id: &str) -> MatchStanding {
    let mut by_player_hole: AHashMap<(i64, i64), i64> = AHashMap::new();
    for s in scores {
        if s.round_id == round_id {
            by_player_hole.insert((s.player_id, s.hole), s.score);
        }
    }

    let side_points = |side: &[&Player], hole: i64, par: i64| -> Vec<i64> {
        side.iter()
            .map(|p| {
                by_player_hole
                    .get(&(p.id, hole))
                    .map(|gross| {
                        hole_points(
                            *gross,
                            par,
                            p.handicap_value(),
                            hole_stroke_index(course_id, hole),
                        )
                    })
                    .unwrap_or(0)
            })
            .collect()
    };

    let mut standing = MatchStanding {
        holes_won_a: 0,
        holes_won_b: 0,
        holes_halved: 0,
        holes_played: 0,
        holes_remaining: HOLES_PER_ROUND,
        status: String::new(),
        leader: None,
        hole_results: Vec::new(),
    };

    for hole in 1..=HOLES_PER_ROUND {
        let played = pairing
            .side_a
            .iter()
            .chain(pairing.side_b.iter())
            .any(|p| by_player_hole.contains_key(&(p.id, hole)));
        if !played {
            continue;
        }

        let par = hole_par(course_id, hole);
        let pair_a_points = side_points(&pairing.side_a, hole, par);
        let pair_b_points = side_points(&pairing.side_b, hole, par);
        let winner = resolve_hole(&pair_a_points, &pair_b_points);

        match winner {
            HoleWinner::TeamA => standing.holes_won_a += 1,
            HoleWinner::TeamB => standing.holes_won_b += 1,
            HoleWinner::Tie => standing.holes_halved += 1,
        }
        standing.holes_played += 1;
        standing.hole_results.push(HoleResult {
            hole,
            par,
            pair_a_points,
            pair_b_points,
            winner,
        });
    }

    standing.holes_remaining = HOLES_PER_ROUND - standing.holes_played;
    standing.status = match_status(
        standing.holes_won_a,
        standing.holes_won_b,
        standing.holes_remaining,
    );
    standing.leader = if standing.holes_won_a > standing.holes_won_b {
        Some(HoleWinner::TeamA)
    } else if standing.holes_won_b > standing.holes_won_a {
        Some(HoleWinner::TeamB)
    } else {
        None
    };
    standing
}

/// Current standing of a betterball match, derived from raw gross scores.
/// Players missing from the roster simply contribute nothing.
#[must_use]
pub fn derive_match_standing(
    m: &Match,
    players: &[Player],
    scores: &[Score],
    course_id: &str,
) -> MatchStanding {
    let pairing = Pairing {
        side_a: find_players(players, &[m.pair_a_player1, m.pair_a_player2]),
        side_b: find_players(players, &[m.pair_b_player1, m.pair_b_player2]),
    };
    derive_standing(&pairing, scores, m.round_id, course_id)
}

/// Singles standing; same derivation with one player a side.
#[must_use]
pub fn derive_singles_standing(
    m: &IndividualMatch,
    players: &[Player],
    scores: &[Score],
    course_id: &str,
) -> MatchStanding {
    let pairing = Pairing {
        side_a: find_players(players, &[m.player1]),
        side_b: find_players(players, &[m.player2]),
    };
    derive_standing(&pairing, scores, m.round_id, course_id)
}
