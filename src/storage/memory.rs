use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::model::types::{
    Fine, IndividualMatch, InsertFine, InsertIndividualMatch, InsertMatch, InsertPlayer,
    InsertRound, InsertScore, InsertTeam, Match, Player, Round, Score, Team, UpdateMatch,
    UpdatePlayer, UpdateRound, UpdateScore, UpdateTeam, Vote,
};
use crate::storage::{Storage, StorageError};

#[derive(Default)]
struct Tables {
    next_id: i64,
    players: BTreeMap<i64, Player>,
    teams: BTreeMap<i64, Team>,
    rounds: BTreeMap<i64, Round>,
    scores: BTreeMap<i64, Score>,
    matches: BTreeMap<i64, Match>,
    individual_matches: BTreeMap<i64, IndividualMatch>,
    fines: BTreeMap<i64, Fine>,
    votes: BTreeMap<i64, Vote>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Map-backed store. Used by tests and as a zero-setup fallback; shares the
/// [`Storage`] contract with the relational implementation.
#[derive(Default)]
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_players(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.tables.read().await.players.values().cloned().collect())
    }

    async fn get_player(&self, id: i64) -> Result<Option<Player>, StorageError> {
        Ok(self.tables.read().await.players.get(&id).cloned())
    }

    async fn create_player(&self, player: InsertPlayer) -> Result<Player, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        let player = Player {
            id,
            first_name: player.first_name,
            last_name: player.last_name,
            handicap: player.handicap,
            team_id: player.team_id,
        };
        tables.players.insert(id, player.clone());
        Ok(player)
    }

    async fn update_player(&self, id: i64, update: UpdatePlayer) -> Result<Player, StorageError> {
        let mut tables = self.tables.write().await;
        let player = tables
            .players
            .get_mut(&id)
            .ok_or_else(|| StorageError::not_found("player", id))?;
        if let Some(first_name) = update.first_name {
            player.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            player.last_name = last_name;
        }
        if let Some(handicap) = update.handicap {
            player.handicap = handicap;
        }
        if let Some(team_id) = update.team_id {
            player.team_id = team_id;
        }
        Ok(player.clone())
    }

    async fn delete_player(&self, id: i64) -> Result<(), StorageError> {
        self.tables.write().await.players.remove(&id);
        Ok(())
    }

    async fn get_teams(&self) -> Result<Vec<Team>, StorageError> {
        Ok(self.tables.read().await.teams.values().cloned().collect())
    }

    async fn get_team(&self, id: i64) -> Result<Option<Team>, StorageError> {
        Ok(self.tables.read().await.teams.get(&id).cloned())
    }

    async fn get_team_players(&self, team_id: i64) -> Result<Vec<Player>, StorageError> {
        Ok(self
            .tables
            .read()
            .await
            .players
            .values()
            .filter(|p| p.team_id == Some(team_id))
            .cloned()
            .collect())
    }

    async fn create_team(&self, team: InsertTeam) -> Result<Team, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        let team = Team {
            id,
            name: team.name,
            captain_id: team.captain_id,
        };
        tables.teams.insert(id, team.clone());
        Ok(team)
    }

    async fn update_team(&self, id: i64, update: UpdateTeam) -> Result<Team, StorageError> {
        let mut tables = self.tables.write().await;
        let team = tables
            .teams
            .get_mut(&id)
            .ok_or_else(|| StorageError::not_found("team", id))?;
        if let Some(name) = update.name {
            team.name = name;
        }
        if let Some(captain_id) = update.captain_id {
            team.captain_id = captain_id;
        }
        Ok(team.clone())
    }

    async fn delete_team(&self, id: i64) -> Result<(), StorageError> {
        self.tables.write().await.teams.remove(&id);
        Ok(())
    }

    async fn get_rounds(&self) -> Result<Vec<Round>, StorageError> {
        Ok(self.tables.read().await.rounds.values().cloned().collect())
    }

    async fn create_round(&self, round: InsertRound) -> Result<Round, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        let round = Round {
            id,
            course: round.course,
            date: round.date,
            format: round.format,
            day: round.day,
        };
        tables.rounds.insert(id, round.clone());
        Ok(round)
    }

    async fn update_round(&self, id: i64, update: UpdateRound) -> Result<Round, StorageError> {
        let mut tables = self.tables.write().await;
        let round = tables
            .rounds
            .get_mut(&id)
            .ok_or_else(|| StorageError::not_found("round", id))?;
        if let Some(course) = update.course {
            round.course = course;
        }
        if let Some(date) = update.date {
            round.date = date;
        }
        if let Some(format) = update.format {
            round.format = format;
        }
        if let Some(day) = update.day {
            round.day = day;
        }
        Ok(round.clone())
    }

    async fn delete_round(&self, id: i64) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        tables.rounds.remove(&id);
        tables.scores.retain(|_, s| s.round_id != id);
        Ok(())
    }

    async fn get_scores(&self, round_id: i64) -> Result<Vec<Score>, StorageError> {
        Ok(self
            .tables
            .read()
            .await
            .scores
            .values()
            .filter(|s| s.round_id == round_id)
            .cloned()
            .collect())
    }

    async fn get_all_scores(&self) -> Result<Vec<Score>, StorageError> {
        Ok(self.tables.read().await.scores.values().cloned().collect())
    }

    async fn upsert_score(&self, insert: InsertScore) -> Result<Score, StorageError> {
        let mut tables = self.tables.write().await;
        let existing_id = tables
            .scores
            .values()
            .find(|s| {
                s.round_id == insert.round_id
                    && s.player_id == insert.player_id
                    && s.hole == insert.hole
            })
            .map(|s| s.id);
        let id = match existing_id {
            Some(id) => id,
            None => tables.next_id(),
        };
        let score = Score {
            id,
            round_id: insert.round_id,
            player_id: insert.player_id,
            hole: insert.hole,
            score: insert.score,
            three_putt: insert.three_putt,
            picked_up: insert.picked_up,
            in_water: insert.in_water,
            in_bunker: insert.in_bunker,
        };
        tables.scores.insert(id, score.clone());
        Ok(score)
    }

    async fn update_score(&self, id: i64, update: UpdateScore) -> Result<Score, StorageError> {
        let mut tables = self.tables.write().await;
        let score = tables
            .scores
            .get_mut(&id)
            .ok_or_else(|| StorageError::not_found("score", id))?;
        if let Some(gross) = update.score {
            score.score = gross;
        }
        if let Some(v) = update.three_putt {
            score.three_putt = v;
        }
        if let Some(v) = update.picked_up {
            score.picked_up = v;
        }
        if let Some(v) = update.in_water {
            score.in_water = v;
        }
        if let Some(v) = update.in_bunker {
            score.in_bunker = v;
        }
        Ok(score.clone())
    }

    async fn clear_round_scores(&self, round_id: i64) -> Result<(), StorageError> {
        self.tables
            .write()
            .await
            .scores
            .retain(|_, s| s.round_id != round_id);
        Ok(())
    }

    async fn get_matches(&self, round_id: i64) -> Result<Vec<Match>, StorageError> {
        Ok(self
            .tables
            .read()
            .await
            .matches
            .values()
            .filter(|m| m.round_id == round_id)
            .cloned()
            .collect())
    }

    async fn get_match(&self, id: i64) -> Result<Option<Match>, StorageError> {
        Ok(self.tables.read().await.matches.get(&id).cloned())
    }

    async fn create_match(&self, insert: InsertMatch) -> Result<Match, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        let m = Match {
            id,
            round_id: insert.round_id,
            team_a: insert.team_a,
            team_b: insert.team_b,
            pair_a_player1: insert.pair_a_player1,
            pair_a_player2: insert.pair_a_player2,
            pair_b_player1: insert.pair_b_player1,
            pair_b_player2: insert.pair_b_player2,
        };
        tables.matches.insert(id, m.clone());
        Ok(m)
    }

    async fn update_match(&self, id: i64, update: UpdateMatch) -> Result<Match, StorageError> {
        let mut tables = self.tables.write().await;
        let m = tables
            .matches
            .get_mut(&id)
            .ok_or_else(|| StorageError::not_found("match", id))?;
        if let Some(v) = update.team_a {
            m.team_a = v;
        }
        if let Some(v) = update.team_b {
            m.team_b = v;
        }
        if let Some(v) = update.pair_a_player1 {
            m.pair_a_player1 = v;
        }
        if let Some(v) = update.pair_a_player2 {
            m.pair_a_player2 = v;
        }
        if let Some(v) = update.pair_b_player1 {
            m.pair_b_player1 = v;
        }
        if let Some(v) = update.pair_b_player2 {
            m.pair_b_player2 = v;
        }
        Ok(m.clone())
    }

    async fn delete_match(&self, id: i64) -> Result<(), StorageError> {
        self.tables.write().await.matches.remove(&id);
        Ok(())
    }

    async fn delete_matches_for_round(&self, round_id: i64) -> Result<(), StorageError> {
        self.tables
            .write()
            .await
            .matches
            .retain(|_, m| m.round_id != round_id);
        Ok(())
    }

    async fn get_individual_matches(
        &self,
        round_id: i64,
    ) -> Result<Vec<IndividualMatch>, StorageError> {
        Ok(self
            .tables
            .read()
            .await
            .individual_matches
            .values()
            .filter(|m| m.round_id == round_id)
            .cloned()
            .collect())
    }

    async fn get_individual_match(
        &self,
        id: i64,
    ) -> Result<Option<IndividualMatch>, StorageError> {
        Ok(self.tables.read().await.individual_matches.get(&id).cloned())
    }

    async fn create_individual_match(
        &self,
        insert: InsertIndividualMatch,
    ) -> Result<IndividualMatch, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        let m = IndividualMatch {
            id,
            round_id: insert.round_id,
            player1: insert.player1,
            player2: insert.player2,
        };
        tables.individual_matches.insert(id, m.clone());
        Ok(m)
    }

    async fn get_fines(&self) -> Result<Vec<Fine>, StorageError> {
        Ok(self.tables.read().await.fines.values().cloned().collect())
    }

    async fn get_fines_by_player_and_day(
        &self,
        player_id: i64,
        golf_day: &str,
    ) -> Result<Vec<Fine>, StorageError> {
        Ok(self
            .tables
            .read()
            .await
            .fines
            .values()
            .filter(|f| f.player_id == player_id && f.golf_day == golf_day)
            .cloned()
            .collect())
    }

    async fn create_fine(&self, insert: InsertFine) -> Result<Fine, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        let fine = Fine {
            id,
            player_id: insert.player_id,
            fine_type: insert.fine_type,
            amount: insert.amount,
            description: insert.description,
            golf_day: insert.golf_day,
        };
        tables.fines.insert(id, fine.clone());
        Ok(fine)
    }

    async fn get_votes(&self) -> Result<Vec<Vote>, StorageError> {
        Ok(self.tables.read().await.votes.values().cloned().collect())
    }

    async fn get_vote_by_activity(&self, activity: &str) -> Result<Option<Vote>, StorageError> {
        Ok(self
            .tables
            .read()
            .await
            .votes
            .values()
            .find(|v| v.activity == activity)
            .cloned())
    }

    async fn create_vote(&self, activity: &str, count: i64) -> Result<Vote, StorageError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        let vote = Vote {
            id,
            activity: activity.to_string(),
            count,
        };
        tables.votes.insert(id, vote.clone());
        Ok(vote)
    }

    async fn update_vote(&self, id: i64, count: i64) -> Result<Vote, StorageError> {
        let mut tables = self.tables.write().await;
        let vote = tables
            .votes
            .get_mut(&id)
            .ok_or_else(|| StorageError::not_found("vote", id))?;
        vote.count = count;
        Ok(vote.clone())
    }
}
