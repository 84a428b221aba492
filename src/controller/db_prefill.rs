use serde_json::Value;
use std::collections::HashMap;
use tracing::info;

use crate::error::AppError;
use crate::model::types::{InsertPlayer, InsertRound, InsertTeam, ScoringFormat};
use crate::storage::Storage;

/// Seed the store from a JSON document of this shape:
///
/// ```json
/// {
///   "teams": [{ "name": "Team A" }],
///   "players": [{ "firstName": "John", "lastName": "Doe",
///                 "handicap": "12.4", "team": "Team A" }],
///   "rounds": [{ "course": "nau", "date": "2025-07-02",
///                "day": 1, "format": "stroke" }]
/// }
/// ```
///
/// Entities already present (matched by name, or course+date for rounds) are
/// skipped, so re-running on a populated store is harmless.
///
/// # Errors
///
/// Returns an error when a storage write fails.
pub async fn db_prefill(json: &Value, storage: &dyn Storage) -> Result<(), AppError> {
    let mut team_ids: HashMap<String, i64> = storage
        .get_teams()
        .await?
        .into_iter()
        .map(|t| (t.name, t.id))
        .collect();

    if let Some(teams) = json.get("teams").and_then(Value::as_array) {
        for team in teams {
            let Some(name) = team.get("name").and_then(Value::as_str) else {
                continue;
            };
            if team_ids.contains_key(name) {
                info!("team '{name}' already present, skipping");
                continue;
            }
            let created = storage
                .create_team(InsertTeam {
                    name: name.to_string(),
                    captain_id: None,
                })
                .await?;
            team_ids.insert(created.name, created.id);
        }
    }

    let existing_players: Vec<String> = storage
        .get_players()
        .await?
        .iter()
        .map(|p| p.full_name())
        .collect();

    if let Some(players) = json.get("players").and_then(Value::as_array) {
        for player in players {
            let first = player.get("firstName").and_then(Value::as_str);
            let last = player.get("lastName").and_then(Value::as_str);
            let (Some(first), Some(last)) = (first, last) else {
                continue;
            };
            if existing_players.contains(&format!("{first} {last}")) {
                info!("player '{first} {last}' already present, skipping");
                continue;
            }
            let team_id = player
                .get("team")
                .and_then(Value::as_str)
                .and_then(|name| team_ids.get(name).copied());
            storage
                .create_player(InsertPlayer {
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    handicap: player
                        .get("handicap")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    team_id,
                })
                .await?;
        }
    }

    let existing_rounds = storage.get_rounds().await?;
    if let Some(rounds) = json.get("rounds").and_then(Value::as_array) {
        for round in rounds {
            let course = round.get("course").and_then(Value::as_str);
            let date = round.get("date").and_then(Value::as_str);
            let (Some(course), Some(date)) = (course, date) else {
                continue;
            };
            if existing_rounds
                .iter()
                .any(|r| r.course == course && r.date == date)
            {
                info!("round {course}/{date} already present, skipping");
                continue;
            }
            storage
                .create_round(InsertRound {
                    course: course.to_string(),
                    date: date.to_string(),
                    format: round
                        .get("format")
                        .and_then(Value::as_str)
                        .map_or(ScoringFormat::Stroke, ScoringFormat::from_tag),
                    day: round.get("day").and_then(Value::as_i64),
                })
                .await?;
        }
    }

    Ok(())
}
