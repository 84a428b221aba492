pub mod database;
pub mod memory;

pub use database::DbStorage;
pub use memory::MemStorage;

use async_trait::async_trait;
use std::error::Error;
use std::fmt;

use crate::model::types::{
    Fine, IndividualMatch, InsertFine, InsertIndividualMatch, InsertMatch, InsertPlayer,
    InsertRound, InsertScore, InsertTeam, Match, Player, Round, Score, Team, UpdateMatch,
    UpdatePlayer, UpdateRound, UpdateScore, UpdateTeam, Vote,
};

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(entity: &str, id: i64) -> Self {
        Self::new(format!("{entity} {id} not found"))
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Record store for all trip entities. Two implementations exist: an
/// in-memory map store and a sql-middleware-backed relational store. The
/// scoring core only ever sees snapshots read through this trait.
#[async_trait]
pub trait Storage: Send + Sync {
    // players
    async fn get_players(&self) -> Result<Vec<Player>, StorageError>;
    async fn get_player(&self, id: i64) -> Result<Option<Player>, StorageError>;
    async fn create_player(&self, player: InsertPlayer) -> Result<Player, StorageError>;
    async fn update_player(&self, id: i64, player: UpdatePlayer) -> Result<Player, StorageError>;
    async fn delete_player(&self, id: i64) -> Result<(), StorageError>;

    // teams
    async fn get_teams(&self) -> Result<Vec<Team>, StorageError>;
    async fn get_team(&self, id: i64) -> Result<Option<Team>, StorageError>;
    async fn get_team_players(&self, team_id: i64) -> Result<Vec<Player>, StorageError>;
    async fn create_team(&self, team: InsertTeam) -> Result<Team, StorageError>;
    async fn update_team(&self, id: i64, team: UpdateTeam) -> Result<Team, StorageError>;
    async fn delete_team(&self, id: i64) -> Result<(), StorageError>;

    // rounds
    async fn get_rounds(&self) -> Result<Vec<Round>, StorageError>;
    async fn create_round(&self, round: InsertRound) -> Result<Round, StorageError>;
    async fn update_round(&self, id: i64, round: UpdateRound) -> Result<Round, StorageError>;
    /// Deleting a round also deletes its scores.
    async fn delete_round(&self, id: i64) -> Result<(), StorageError>;

    // scores
    async fn get_scores(&self, round_id: i64) -> Result<Vec<Score>, StorageError>;
    async fn get_all_scores(&self) -> Result<Vec<Score>, StorageError>;
    /// Overwrites any existing row for the (round, player, hole) triple;
    /// at most one row ever exists per triple. Last write wins.
    async fn upsert_score(&self, score: InsertScore) -> Result<Score, StorageError>;
    async fn update_score(&self, id: i64, score: UpdateScore) -> Result<Score, StorageError>;
    async fn clear_round_scores(&self, round_id: i64) -> Result<(), StorageError>;

    // matches
    async fn get_matches(&self, round_id: i64) -> Result<Vec<Match>, StorageError>;
    async fn get_match(&self, id: i64) -> Result<Option<Match>, StorageError>;
    async fn create_match(&self, m: InsertMatch) -> Result<Match, StorageError>;
    async fn update_match(&self, id: i64, m: UpdateMatch) -> Result<Match, StorageError>;
    async fn delete_match(&self, id: i64) -> Result<(), StorageError>;
    /// Bulk removal used when a round's pairings are re-created from scratch.
    async fn delete_matches_for_round(&self, round_id: i64) -> Result<(), StorageError>;

    // individual matches
    async fn get_individual_matches(
        &self,
        round_id: i64,
    ) -> Result<Vec<IndividualMatch>, StorageError>;
    async fn get_individual_match(&self, id: i64)
        -> Result<Option<IndividualMatch>, StorageError>;
    async fn create_individual_match(
        &self,
        m: InsertIndividualMatch,
    ) -> Result<IndividualMatch, StorageError>;

    // fines
    async fn get_fines(&self) -> Result<Vec<Fine>, StorageError>;
    async fn get_fines_by_player_and_day(
        &self,
        player_id: i64,
        golf_day: &str,
    ) -> Result<Vec<Fine>, StorageError>;
    async fn create_fine(&self, fine: InsertFine) -> Result<Fine, StorageError>;

    // votes
    async fn get_votes(&self) -> Result<Vec<Vote>, StorageError>;
    async fn get_vote_by_activity(&self, activity: &str) -> Result<Option<Vote>, StorageError>;
    async fn create_vote(&self, activity: &str, count: i64) -> Result<Vote, StorageError>;
    async fn update_vote(&self, id: i64, count: i64) -> Result<Vote, StorageError>;
}
