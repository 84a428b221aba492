use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if any of the semicolon-separated files is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    let files = file.split(';');
    for file in files {
        let path = PathBuf::from(file);
        if !path.is_file() || fs::metadata(&path).is_err() {
            return Err(format!("The sql startup script '{file}' is not readable."));
        }
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("Could not read '{file}': {e}"))?;
    let json: Value =
        serde_json::from_str(&contents).map_err(|e| format!("'{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(json)
}

/// Expected shape:
/// { "teams": [{"name": ...}], "players": [{"firstName": ..., "lastName": ...,
/// "handicap"?: ..., "team"?: ...}], "rounds": [{"course": ..., "date": ...,
/// "day"?: ..., "format"?: ...}] }
///
/// All three arrays are optional; present ones must carry their required keys.
fn validate_json_format(json: &Value) -> Result<(), String> {
    if !json.is_object() {
        return Err("The json file is not in the correct format. Expected an object.".to_string());
    }

    if let Some(teams) = json.get("teams") {
        let teams = teams
            .as_array()
            .ok_or_else(|| "The json key teams must be an array.".to_string())?;
        for team in teams {
            if !team["name"].is_string() {
                return Err(
                    "The json key teams is not in the correct format. Expected objects with a name key."
                        .to_string(),
                );
            }
        }
    }

    if let Some(players) = json.get("players") {
        let players = players
            .as_array()
            .ok_or_else(|| "The json key players must be an array.".to_string())?;
        for player in players {
            if !player["firstName"].is_string() || !player["lastName"].is_string() {
                return Err(
                    "The json key players is not in the correct format. Expected objects with firstName and lastName keys."
                        .to_string(),
                );
            }
        }
    }

    if let Some(rounds) = json.get("rounds") {
        let rounds = rounds
            .as_array()
            .ok_or_else(|| "The json key rounds must be an array.".to_string())?;
        for round in rounds {
            if !round["course"].is_string() || !round["date"].is_string() {
                return Err(
                    "The json key rounds is not in the correct format. Expected objects with course and date keys."
                        .to_string(),
                );
            }
        }
    }

    Ok(())
}
