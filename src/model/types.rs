use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Stored as a decimal string ("12.4"); missing or unparseable means scratch.
    pub handicap: Option<String>,
    pub team_id: Option<i64>,
}

impl Player {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Lenient handicap parse: missing, empty, or malformed values play off 0.
    #[must_use]
    pub fn handicap_value(&self) -> f64 {
        self.handicap
            .as_deref()
            .and_then(|h| h.trim().parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InsertPlayer {
    pub first_name: String,
    pub last_name: String,
    pub handicap: Option<String>,
    pub team_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub handicap: Option<Option<String>>,
    pub team_id: Option<Option<i64>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub captain_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InsertTeam {
    pub name: String,
    pub captain_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeam {
    pub name: Option<String>,
    pub captain_id: Option<Option<i64>>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoringFormat {
    Stroke,
    Betterball,
    Matchplay,
}

impl Default for ScoringFormat {
    fn default() -> Self {
        ScoringFormat::Stroke
    }
}

impl fmt::Display for ScoringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoringFormat::Stroke => "stroke",
            ScoringFormat::Betterball => "betterball",
            ScoringFormat::Matchplay => "matchplay",
        };
        write!(f, "{s}")
    }
}

impl ScoringFormat {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "betterball" => ScoringFormat::Betterball,
            "matchplay" => ScoringFormat::Matchplay,
            _ => ScoringFormat::Stroke,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: i64,
    /// Course id into the static course table ("nau", "amendoeira", "quinta").
    pub course: String,
    pub date: String,
    #[serde(default)]
    pub format: ScoringFormat,
    /// Trip day number (1, 2, or 3).
    pub day: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InsertRound {
    pub course: String,
    pub date: String,
    #[serde(default)]
    pub format: ScoringFormat,
    pub day: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRound {
    pub course: Option<String>,
    pub date: Option<String>,
    pub format: Option<ScoringFormat>,
    pub day: Option<Option<i64>>,
}

/// One gross stroke count for a (round, player, hole) triple. At most one row
/// exists per triple; re-entry overwrites in place.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub id: i64,
    pub round_id: i64,
    pub player_id: i64,
    pub hole: i64,
    pub score: i64,
    #[serde(default)]
    pub three_putt: bool,
    #[serde(default)]
    pub picked_up: bool,
    #[serde(default)]
    pub in_water: bool,
    #[serde(default)]
    pub in_bunker: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InsertScore {
    pub round_id: i64,
    pub player_id: i64,
    pub hole: i64,
    pub score: i64,
    #[serde(default)]
    pub three_putt: bool,
    #[serde(default)]
    pub picked_up: bool,
    #[serde(default)]
    pub in_water: bool,
    #[serde(default)]
    pub in_bunker: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScore {
    pub score: Option<i64>,
    pub three_putt: Option<bool>,
    pub picked_up: Option<bool>,
    pub in_water: Option<bool>,
    pub in_bunker: Option<bool>,
}

/// A betterball pairing: two players per side, at most two matches per round.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i64,
    pub round_id: i64,
    pub team_a: i64,
    pub team_b: i64,
    pub pair_a_player1: i64,
    pub pair_a_player2: i64,
    pub pair_b_player1: i64,
    pub pair_b_player2: i64,
}

impl Match {
    #[must_use]
    pub fn player_ids(&self) -> [i64; 4] {
        [
            self.pair_a_player1,
            self.pair_a_player2,
            self.pair_b_player1,
            self.pair_b_player2,
        ]
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InsertMatch {
    pub round_id: i64,
    pub team_a: i64,
    pub team_b: i64,
    pub pair_a_player1: i64,
    pub pair_a_player2: i64,
    pub pair_b_player1: i64,
    pub pair_b_player2: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatch {
    pub team_a: Option<i64>,
    pub team_b: Option<i64>,
    pub pair_a_player1: Option<i64>,
    pub pair_a_player2: Option<i64>,
    pub pair_b_player1: Option<i64>,
    pub pair_b_player2: Option<i64>,
}

/// Day-3 singles pairing.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IndividualMatch {
    pub id: i64,
    pub round_id: i64,
    pub player1: i64,
    pub player2: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InsertIndividualMatch {
    pub round_id: i64,
    pub player1: i64,
    pub player2: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Fine {
    pub id: i64,
    pub player_id: i64,
    #[serde(rename = "type")]
    pub fine_type: String,
    pub amount: i64,
    pub description: Option<String>,
    pub golf_day: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InsertFine {
    pub player_id: i64,
    #[serde(rename = "type")]
    pub fine_type: String,
    pub amount: i64,
    pub description: Option<String>,
    pub golf_day: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: i64,
    pub activity: String,
    pub count: i64,
}
