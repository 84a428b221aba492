use ahash::AHashMap;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::model::course::{hole_par, hole_stroke_index};
use crate::model::types::{Player, Round, Score, Team};
use crate::scoring::handicap::strokes_received;
use crate::scoring::stableford::hole_points;

/// Assumed par per round for to-par arithmetic. The aggregator does not
/// consult the actual card, matching the original display behavior.
pub const ASSUMED_ROUND_PAR: i64 = 72;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardMode {
    Gross,
    Net,
    Stableford,
}

impl LeaderboardMode {
    #[must_use]
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "" | "gross" => Some(LeaderboardMode::Gross),
            "net" => Some(LeaderboardMode::Net),
            "stableford" => Some(LeaderboardMode::Stableford),
            _ => None,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStanding {
    pub player_id: i64,
    pub name: String,
    pub team: Option<String>,
    /// Strokes in gross/net mode, points in Stableford mode.
    pub total: i64,
    /// Only meaningful for gross/net; Stableford ranks on points alone.
    pub to_par: Option<i64>,
    pub rounds_played: i64,
    pub average: f64,
    /// Best single-round total: lowest for gross/net, highest for Stableford.
    pub best_round: Option<i64>,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_id: i64,
    pub name: String,
    pub players_count: i64,
    pub total: i64,
    pub to_par: Option<i64>,
    /// Distinct (player, round) pairs actually played.
    pub rounds_played: i64,
    pub average: f64,
}

fn course_of_round<'a>(rounds: &'a [Round], round_id: i64) -> &'a str {
    rounds
        .iter()
        .find(|r| r.id == round_id)
        .map_or("", |r| r.course.as_str())
}

/// Metric value of one score row under the given mode. Unknown course/hole
/// references degrade to the fallback card rather than failing.
fn score_value(mode: LeaderboardMode, s: &Score, handicap: f64, course_id: &str) -> i64 {
    match mode {
        LeaderboardMode::Gross => s.score,
        LeaderboardMode::Net => {
            s.score - strokes_received(handicap, hole_stroke_index(course_id, s.hole))
        }
        LeaderboardMode::Stableford => hole_points(
            s.score,
            hole_par(course_id, s.hole),
            handicap,
            hole_stroke_index(course_id, s.hole),
        ),
    }
}

fn rank(mode: LeaderboardMode, standings: &mut [PlayerStanding]) {
    match mode {
        // Stable sorts keep insertion order on ties.
        LeaderboardMode::Stableford => standings.sort_by_key(|s| std::cmp::Reverse(s.total)),
        _ => standings.sort_by_key(|s| s.to_par.unwrap_or(0)),
    }
}

/// Cross-round individual standings. Players without a single recorded score
/// are left out entirely, not ranked last.
#[must_use]
pub fn aggregate_players(
    players: &[Player],
    teams: &[Team],
    rounds: &[Round],
    scores: &[Score],
    mode: LeaderboardMode,
) -> Vec<PlayerStanding> {
    let mut standings = Vec::new();

    for player in players {
        let player_scores: Vec<&Score> =
            scores.iter().filter(|s| s.player_id == player.id).collect();
        if player_scores.is_empty() {
            continue;
        }

        let handicap = player.handicap_value();
        let mut round_totals: AHashMap<i64, i64> = AHashMap::new();
        for s in &player_scores {
            let value = score_value(mode, s, handicap, course_of_round(rounds, s.round_id));
            *round_totals.entry(s.round_id).or_insert(0) += value;
        }

        let rounds_played = round_totals.len() as i64;
        let total: i64 = round_totals.values().sum();
        let to_par = match mode {
            LeaderboardMode::Stableford => None,
            _ => Some(total - rounds_played * ASSUMED_ROUND_PAR),
        };
        let best_round = match mode {
            LeaderboardMode::Stableford => round_totals.values().copied().max(),
            _ => round_totals.values().copied().min(),
        };

        standings.push(PlayerStanding {
            player_id: player.id,
            name: player.full_name(),
            team: player
                .team_id
                .and_then(|tid| teams.iter().find(|t| t.id == tid))
                .map(|t| t.name.clone()),
            total,
            to_par,
            rounds_played,
            average: total as f64 / rounds_played as f64,
            best_round,
        });
    }

    rank(mode, &mut standings);
    standings
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub mode: LeaderboardMode,
    pub players: Vec<PlayerStanding>,
    pub teams: Vec<TeamStanding>,
}

/// Full leaderboard view over the whole score history.
#[must_use]
pub fn aggregate(
    players: &[Player],
    teams: &[Team],
    rounds: &[Round],
    scores: &[Score],
    mode: LeaderboardMode,
) -> Leaderboard {
    Leaderboard {
        mode,
        players: aggregate_players(players, teams, rounds, scores, mode),
        teams: aggregate_teams(players, teams, rounds, scores, mode),
    }
}

/// Team standings: the same metric summed over every player on the team,
/// with rounds counted per (player, round) pair for the activity indicator.
#[must_use]
pub fn aggregate_teams(
    players: &[Player],
    teams: &[Team],
    rounds: &[Round],
    scores: &[Score],
    mode: LeaderboardMode,
) -> Vec<TeamStanding> {
    let mut standings = Vec::new();

    for team in teams {
        let roster: Vec<&Player> = players
            .iter()
            .filter(|p| p.team_id == Some(team.id))
            .collect();

        let mut total = 0i64;
        let mut played: BTreeSet<(i64, i64)> = BTreeSet::new();
        for player in &roster {
            let handicap = player.handicap_value();
            for s in scores.iter().filter(|s| s.player_id == player.id) {
                total += score_value(mode, s, handicap, course_of_round(rounds, s.round_id));
                played.insert((s.player_id, s.round_id));
            }
        }

        if played.is_empty() {
            continue;
        }

        let rounds_played = played.len() as i64;
        let to_par = match mode {
            LeaderboardMode::Stableford => None,
            _ => Some(total - rounds_played * ASSUMED_ROUND_PAR),
        };

        standings.push(TeamStanding {
            team_id: team.id,
            name: team.name.clone(),
            players_count: roster.len() as i64,
            total,
            to_par,
            rounds_played,
            average: total as f64 / rounds_played as f64,
        });
    }

    match mode {
        LeaderboardMode::Stableford => standings.sort_by_key(|s| std::cmp::Reverse(s.total)),
        _ => standings.sort_by_key(|s| s.to_par.unwrap_or(0)),
    }
    standings
}
