use golf_trip::model::types::{InsertPlayer, InsertRound, InsertTeam, ScoringFormat};
use golf_trip::storage::{MemStorage, Storage};
use std::sync::Arc;

pub fn mem_storage() -> Arc<dyn Storage> {
    Arc::new(MemStorage::new())
}

pub struct SeededTrip {
    pub team_a: i64,
    pub team_b: i64,
    /// Four players per team, in creation order.
    pub team_a_players: Vec<i64>,
    pub team_b_players: Vec<i64>,
    pub round: i64,
}

/// Two teams of four on one betterball round at Amendoeira.
pub async fn seed_trip(storage: &dyn Storage) -> SeededTrip {
    let team_a = storage
        .create_team(InsertTeam {
            name: "Team A".to_string(),
            captain_id: None,
        })
        .await
        .unwrap()
        .id;
    let team_b = storage
        .create_team(InsertTeam {
            name: "Team B".to_string(),
            captain_id: None,
        })
        .await
        .unwrap()
        .id;

    let roster = [
        ("John", "Doe", "8", team_a),
        ("Jane", "Smith", "12", team_a),
        ("Chris", "Slack", "18", team_a),
        ("Mike", "Johnson", "4", team_a),
        ("Sarah", "Wilson", "22", team_b),
        ("David", "Brown", "0", team_b),
        ("Emma", "Davis", "15", team_b),
        ("Tom", "Miller", "9", team_b),
    ];
    let mut team_a_players = Vec::new();
    let mut team_b_players = Vec::new();
    for (first, last, handicap, team) in roster {
        let player = storage
            .create_player(InsertPlayer {
                first_name: first.to_string(),
                last_name: last.to_string(),
                handicap: Some(handicap.to_string()),
                team_id: Some(team),
            })
            .await
            .unwrap();
        if team == team_a {
            team_a_players.push(player.id);
        } else {
            team_b_players.push(player.id);
        }
    }

    let round = storage
        .create_round(InsertRound {
            course: "amendoeira".to_string(),
            date: "2025-07-03".to_string(),
            format: ScoringFormat::Betterball,
            day: Some(2),
        })
        .await
        .unwrap()
        .id;

    SeededTrip {
        team_a,
        team_b,
        team_a_players,
        team_b_players,
        round,
    }
}
