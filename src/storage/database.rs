use async_trait::async_trait;
use sql_middleware::middleware::{
    ConfigAndPool, ConversionMode, MiddlewarePool, MiddlewarePoolConnection, ResultSet,
};
use sql_middleware::middleware::{QueryAndParams, RowValues};
use sql_middleware::{convert_sql_params, SqlMiddlewareDbError, SqliteParamsExecute, SqliteParamsQuery};

use crate::model::types::{
    Fine, IndividualMatch, InsertFine, InsertIndividualMatch, InsertMatch, InsertPlayer,
    InsertRound, InsertScore, InsertTeam, Match, Player, Round, Score, ScoringFormat, Team,
    UpdateMatch, UpdatePlayer, UpdateRound, UpdateScore, UpdateTeam, Vote,
};
use crate::storage::{Storage, StorageError};

impl From<SqlMiddlewareDbError> for StorageError {
    fn from(err: SqlMiddlewareDbError) -> Self {
        StorageError::new(err.to_string())
    }
}

/// Relational store over sql-middleware pools. Row-level reads and writes run
/// on the SQLite path; Postgres pools are accepted for startup scripts but
/// row operations follow the same per-backend dispatch used elsewhere.
#[derive(Clone)]
pub struct DbStorage {
    config_and_pool: ConfigAndPool,
}

impl DbStorage {
    #[must_use]
    pub fn new(config_and_pool: ConfigAndPool) -> Self {
        Self { config_and_pool }
    }

    async fn connection(&self) -> Result<MiddlewarePoolConnection, SqlMiddlewareDbError> {
        let pool = self.config_and_pool.pool.get().await?;
        MiddlewarePool::get_connection(pool).await
    }

    async fn query(
        &self,
        query: &str,
        params: Vec<RowValues>,
    ) -> Result<ResultSet, SqlMiddlewareDbError> {
        let conn = self.connection().await?;
        let query_and_params = QueryAndParams {
            query: query.to_string(),
            params,
        };

        match &conn {
            MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
                let result = sqlite_conn
                    .interact(move |db_conn| {
                        let converted_params = convert_sql_params::<SqliteParamsQuery>(
                            &query_and_params.params,
                            ConversionMode::Query,
                        )?;
                        let tx = db_conn.transaction()?;

                        let result_set = {
                            let mut stmt = tx.prepare(&query_and_params.query)?;
                            sql_middleware::sqlite_build_result_set(&mut stmt, &converted_params.0)?
                        };
                        tx.commit()?;
                        Ok::<_, SqlMiddlewareDbError>(result_set)
                    })
                    .await??;

                Ok(result)
            }
            _ => Err(SqlMiddlewareDbError::Other(
                "Database type not supported for this operation".to_string(),
            )),
        }
    }

    /// Run one write statement; returns the last insert rowid.
    async fn execute(
        &self,
        query: &str,
        params: Vec<RowValues>,
    ) -> Result<i64, SqlMiddlewareDbError> {
        let conn = self.connection().await?;
        let query_and_params = QueryAndParams {
            query: query.to_string(),
            params,
        };

        match &conn {
            MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
                let rowid = sqlite_conn
                    .interact(move |db_conn| {
                        let converted_params = convert_sql_params::<SqliteParamsExecute>(
                            &query_and_params.params,
                            ConversionMode::Execute,
                        )?;
                        let tx = db_conn.transaction()?;
                        tx.execute(&query_and_params.query, converted_params.0)?;
                        let rowid = tx.last_insert_rowid();
                        tx.commit()?;
                        Ok::<_, SqlMiddlewareDbError>(rowid)
                    })
                    .await??;

                Ok(rowid)
            }
            _ => Err(SqlMiddlewareDbError::Other(
                "Database type not supported for this operation".to_string(),
            )),
        }
    }
}

fn opt_int(v: Option<i64>) -> RowValues {
    v.map_or(RowValues::Null, RowValues::Int)
}

fn opt_text(v: Option<String>) -> RowValues {
    v.map_or(RowValues::Null, RowValues::Text)
}

fn get_int(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> i64 {
    row.get(field).and_then(|v| v.as_int()).map_or(0, |&v| v)
}

fn get_opt_int(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> Option<i64> {
    row.get(field).and_then(|v| v.as_int()).copied()
}

fn get_string(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> String {
    row.get(field)
        .and_then(|v| v.as_text())
        .unwrap_or_default()
        .to_string()
}

fn get_opt_string(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> Option<String> {
    row.get(field).and_then(|v| v.as_text()).map(str::to_string)
}

// Flags are stored as 0/1 integers.
fn get_flag(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> bool {
    get_int(row, field) != 0
}

fn player_from_row(row: &sql_middleware::middleware::CustomDbRow) -> Player {
    Player {
        id: get_int(row, "id"),
        first_name: get_string(row, "first_name"),
        last_name: get_string(row, "last_name"),
        handicap: get_opt_string(row, "handicap"),
        team_id: get_opt_int(row, "team_id"),
    }
}

fn team_from_row(row: &sql_middleware::middleware::CustomDbRow) -> Team {
    Team {
        id: get_int(row, "id"),
        name: get_string(row, "name"),
        captain_id: get_opt_int(row, "captain_id"),
    }
}

fn round_from_row(row: &sql_middleware::middleware::CustomDbRow) -> Round {
    Round {
        id: get_int(row, "id"),
        course: get_string(row, "course"),
        date: get_string(row, "date"),
        format: ScoringFormat::from_tag(&get_string(row, "format")),
        day: get_opt_int(row, "day"),
    }
}

fn score_from_row(row: &sql_middleware::middleware::CustomDbRow) -> Score {
    Score {
        id: get_int(row, "id"),
        round_id: get_int(row, "round_id"),
        player_id: get_int(row, "player_id"),
        hole: get_int(row, "hole"),
        score: get_int(row, "score"),
        three_putt: get_flag(row, "three_putt"),
        picked_up: get_flag(row, "picked_up"),
        in_water: get_flag(row, "in_water"),
        in_bunker: get_flag(row, "in_bunker"),
    }
}

fn match_from_row(row: &sql_middleware::middleware::CustomDbRow) -> Match {
    Match {
        id: get_int(row, "id"),
        round_id: get_int(row, "round_id"),
        team_a: get_int(row, "team_a"),
        team_b: get_int(row, "team_b"),
        pair_a_player1: get_int(row, "pair_a_player1"),
        pair_a_player2: get_int(row, "pair_a_player2"),
        pair_b_player1: get_int(row, "pair_b_player1"),
        pair_b_player2: get_int(row, "pair_b_player2"),
    }
}

fn individual_match_from_row(row: &sql_middleware::middleware::CustomDbRow) -> IndividualMatch {
    IndividualMatch {
        id: get_int(row, "id"),
        round_id: get_int(row, "round_id"),
        player1: get_int(row, "player1"),
        player2: get_int(row, "player2"),
    }
}

fn fine_from_row(row: &sql_middleware::middleware::CustomDbRow) -> Fine {
    Fine {
        id: get_int(row, "id"),
        player_id: get_int(row, "player_id"),
        fine_type: get_string(row, "fine_type"),
        amount: get_int(row, "amount"),
        description: get_opt_string(row, "description"),
        golf_day: get_string(row, "golf_day"),
    }
}

fn vote_from_row(row: &sql_middleware::middleware::CustomDbRow) -> Vote {
    Vote {
        id: get_int(row, "id"),
        activity: get_string(row, "activity"),
        count: get_int(row, "count"),
    }
}

const SELECT_PLAYER: &str = "SELECT id, first_name, last_name, handicap, team_id FROM players";
const SELECT_SCORE: &str = "SELECT id, round_id, player_id, hole, score, three_putt, picked_up, in_water, in_bunker FROM scores";
const SELECT_MATCH: &str = "SELECT id, round_id, team_a, team_b, pair_a_player1, pair_a_player2, pair_b_player1, pair_b_player2 FROM matches";

#[async_trait]
impl Storage for DbStorage {
    async fn get_players(&self) -> Result<Vec<Player>, StorageError> {
        let res = self
            .query(&format!("{SELECT_PLAYER} ORDER BY id"), vec![])
            .await?;
        Ok(res.results.iter().map(player_from_row).collect())
    }

    async fn get_player(&self, id: i64) -> Result<Option<Player>, StorageError> {
        let res = self
            .query(
                &format!("{SELECT_PLAYER} WHERE id = ?1"),
                vec![RowValues::Int(id)],
            )
            .await?;
        Ok(res.results.first().map(player_from_row))
    }

    async fn create_player(&self, player: InsertPlayer) -> Result<Player, StorageError> {
        let id = self
            .execute(
                "INSERT INTO players (first_name, last_name, handicap, team_id) VALUES (?1, ?2, ?3, ?4)",
                vec![
                    RowValues::Text(player.first_name.clone()),
                    RowValues::Text(player.last_name.clone()),
                    opt_text(player.handicap.clone()),
                    opt_int(player.team_id),
                ],
            )
            .await?;
        Ok(Player {
            id,
            first_name: player.first_name,
            last_name: player.last_name,
            handicap: player.handicap,
            team_id: player.team_id,
        })
    }

    async fn update_player(&self, id: i64, update: UpdatePlayer) -> Result<Player, StorageError> {
        let mut player = self
            .get_player(id)
            .await?
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
        self.execute(
            "UPDATE players SET first_name = ?1, last_name = ?2, handicap = ?3, team_id = ?4 WHERE id = ?5",
            vec![
                RowValues::Text(player.first_name.clone()),
                RowValues::Text(player.last_name.clone()),
                opt_text(player.handicap.clone()),
                opt_int(player.team_id),
                RowValues::Int(id),
            ],
        )
        .await?;
        Ok(player)
    }

    async fn delete_player(&self, id: i64) -> Result<(), StorageError> {
        self.execute("DELETE FROM players WHERE id = ?1", vec![RowValues::Int(id)])
            .await?;
        Ok(())
    }

    async fn get_teams(&self) -> Result<Vec<Team>, StorageError> {
        let res = self
            .query("SELECT id, name, captain_id FROM teams ORDER BY id", vec![])
            .await?;
        Ok(res.results.iter().map(team_from_row).collect())
    }

    async fn get_team(&self, id: i64) -> Result<Option<Team>, StorageError> {
        let res = self
            .query(
                "SELECT id, name, captain_id FROM teams WHERE id = ?1",
                vec![RowValues::Int(id)],
            )
            .await?;
        Ok(res.results.first().map(team_from_row))
    }

    async fn get_team_players(&self, team_id: i64) -> Result<Vec<Player>, StorageError> {
        let res = self
            .query(
                &format!("{SELECT_PLAYER} WHERE team_id = ?1 ORDER BY id"),
                vec![RowValues::Int(team_id)],
            )
            .await?;
        Ok(res.results.iter().map(player_from_row).collect())
    }

    async fn create_team(&self, team: InsertTeam) -> Result<Team, StorageError> {
        let id = self
            .execute(
                "INSERT INTO teams (name, captain_id) VALUES (?1, ?2)",
                vec![RowValues::Text(team.name.clone()), opt_int(team.captain_id)],
            )
            .await?;
        Ok(Team {
            id,
            name: team.name,
            captain_id: team.captain_id,
        })
    }

    async fn update_team(&self, id: i64, update: UpdateTeam) -> Result<Team, StorageError> {
        let mut team = self
            .get_team(id)
            .await?
            .ok_or_else(|| StorageError::not_found("team", id))?;
        if let Some(name) = update.name {
            team.name = name;
        }
        if let Some(captain_id) = update.captain_id {
            team.captain_id = captain_id;
        }
        self.execute(
            "UPDATE teams SET name = ?1, captain_id = ?2 WHERE id = ?3",
            vec![
                RowValues::Text(team.name.clone()),
                opt_int(team.captain_id),
                RowValues::Int(id),
            ],
        )
        .await?;
        Ok(team)
    }

    async fn delete_team(&self, id: i64) -> Result<(), StorageError> {
        self.execute("DELETE FROM teams WHERE id = ?1", vec![RowValues::Int(id)])
            .await?;
        Ok(())
    }

    async fn get_rounds(&self) -> Result<Vec<Round>, StorageError> {
        let res = self
            .query(
                "SELECT id, course, date, format, day FROM rounds ORDER BY id",
                vec![],
            )
            .await?;
        Ok(res.results.iter().map(round_from_row).collect())
    }

    async fn create_round(&self, round: InsertRound) -> Result<Round, StorageError> {
        let id = self
            .execute(
                "INSERT INTO rounds (course, date, format, day) VALUES (?1, ?2, ?3, ?4)",
                vec![
                    RowValues::Text(round.course.clone()),
                    RowValues::Text(round.date.clone()),
                    RowValues::Text(round.format.to_string()),
                    opt_int(round.day),
                ],
            )
            .await?;
        Ok(Round {
            id,
            course: round.course,
            date: round.date,
            format: round.format,
            day: round.day,
        })
    }

    async fn update_round(&self, id: i64, update: UpdateRound) -> Result<Round, StorageError> {
        let res = self
            .query(
                "SELECT id, course, date, format, day FROM rounds WHERE id = ?1",
                vec![RowValues::Int(id)],
            )
            .await?;
        let mut round = res
            .results
            .first()
            .map(round_from_row)
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
        self.execute(
            "UPDATE rounds SET course = ?1, date = ?2, format = ?3, day = ?4 WHERE id = ?5",
            vec![
                RowValues::Text(round.course.clone()),
                RowValues::Text(round.date.clone()),
                RowValues::Text(round.format.to_string()),
                opt_int(round.day),
                RowValues::Int(id),
            ],
        )
        .await?;
        Ok(round)
    }

    async fn delete_round(&self, id: i64) -> Result<(), StorageError> {
        // Scores go with their round.
        self.execute(
            "DELETE FROM scores WHERE round_id = ?1",
            vec![RowValues::Int(id)],
        )
        .await?;
        self.execute("DELETE FROM rounds WHERE id = ?1", vec![RowValues::Int(id)])
            .await?;
        Ok(())
    }

    async fn get_scores(&self, round_id: i64) -> Result<Vec<Score>, StorageError> {
        let res = self
            .query(
                &format!("{SELECT_SCORE} WHERE round_id = ?1 ORDER BY player_id, hole"),
                vec![RowValues::Int(round_id)],
            )
            .await?;
        Ok(res.results.iter().map(score_from_row).collect())
    }

    async fn get_all_scores(&self) -> Result<Vec<Score>, StorageError> {
        let res = self
            .query(
                &format!("{SELECT_SCORE} ORDER BY round_id, player_id, hole"),
                vec![],
            )
            .await?;
        Ok(res.results.iter().map(score_from_row).collect())
    }

    async fn upsert_score(&self, insert: InsertScore) -> Result<Score, StorageError> {
        // The UNIQUE(round_id, player_id, hole) constraint makes re-entry an
        // overwrite rather than a duplicate row.
        self.execute(
            "INSERT INTO scores (round_id, player_id, hole, score, three_putt, picked_up, in_water, in_bunker) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
             ON CONFLICT(round_id, player_id, hole) DO UPDATE SET \
             score = excluded.score, three_putt = excluded.three_putt, \
             picked_up = excluded.picked_up, in_water = excluded.in_water, \
             in_bunker = excluded.in_bunker",
            vec![
                RowValues::Int(insert.round_id),
                RowValues::Int(insert.player_id),
                RowValues::Int(insert.hole),
                RowValues::Int(insert.score),
                RowValues::Int(i64::from(insert.three_putt)),
                RowValues::Int(i64::from(insert.picked_up)),
                RowValues::Int(i64::from(insert.in_water)),
                RowValues::Int(i64::from(insert.in_bunker)),
            ],
        )
        .await?;

        let res = self
            .query(
                &format!("{SELECT_SCORE} WHERE round_id = ?1 AND player_id = ?2 AND hole = ?3"),
                vec![
                    RowValues::Int(insert.round_id),
                    RowValues::Int(insert.player_id),
                    RowValues::Int(insert.hole),
                ],
            )
            .await?;
        res.results
            .first()
            .map(score_from_row)
            .ok_or_else(|| StorageError::new("score upsert did not persist"))
    }

    async fn update_score(&self, id: i64, update: UpdateScore) -> Result<Score, StorageError> {
        let res = self
            .query(
                &format!("{SELECT_SCORE} WHERE id = ?1"),
                vec![RowValues::Int(id)],
            )
            .await?;
        let mut score = res
            .results
            .first()
            .map(score_from_row)
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
        self.execute(
            "UPDATE scores SET score = ?1, three_putt = ?2, picked_up = ?3, in_water = ?4, in_bunker = ?5 WHERE id = ?6",
            vec![
                RowValues::Int(score.score),
                RowValues::Int(i64::from(score.three_putt)),
                RowValues::Int(i64::from(score.picked_up)),
                RowValues::Int(i64::from(score.in_water)),
                RowValues::Int(i64::from(score.in_bunker)),
                RowValues::Int(id),
            ],
        )
        .await?;
        Ok(score)
    }

    async fn clear_round_scores(&self, round_id: i64) -> Result<(), StorageError> {
        self.execute(
            "DELETE FROM scores WHERE round_id = ?1",
            vec![RowValues::Int(round_id)],
        )
        .await?;
        Ok(())
    }

    async fn get_matches(&self, round_id: i64) -> Result<Vec<Match>, StorageError> {
        let res = self
            .query(
                &format!("{SELECT_MATCH} WHERE round_id = ?1 ORDER BY id"),
                vec![RowValues::Int(round_id)],
            )
            .await?;
        Ok(res.results.iter().map(match_from_row).collect())
    }

    async fn get_match(&self, id: i64) -> Result<Option<Match>, StorageError> {
        let res = self
            .query(
                &format!("{SELECT_MATCH} WHERE id = ?1"),
                vec![RowValues::Int(id)],
            )
            .await?;
        Ok(res.results.first().map(match_from_row))
    }

    async fn create_match(&self, insert: InsertMatch) -> Result<Match, StorageError> {
        let id = self
            .execute(
                "INSERT INTO matches (round_id, team_a, team_b, pair_a_player1, pair_a_player2, pair_b_player1, pair_b_player2) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                vec![
                    RowValues::Int(insert.round_id),
                    RowValues::Int(insert.team_a),
                    RowValues::Int(insert.team_b),
                    RowValues::Int(insert.pair_a_player1),
                    RowValues::Int(insert.pair_a_player2),
                    RowValues::Int(insert.pair_b_player1),
                    RowValues::Int(insert.pair_b_player2),
                ],
            )
            .await?;
        Ok(Match {
            id,
            round_id: insert.round_id,
            team_a: insert.team_a,
            team_b: insert.team_b,
            pair_a_player1: insert.pair_a_player1,
            pair_a_player2: insert.pair_a_player2,
            pair_b_player1: insert.pair_b_player1,
            pair_b_player2: insert.pair_b_player2,
        })
    }

    async fn update_match(&self, id: i64, update: UpdateMatch) -> Result<Match, StorageError> {
        let mut m = self
            .get_match(id)
            .await?
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
        self.execute(
            "UPDATE matches SET team_a = ?1, team_b = ?2, pair_a_player1 = ?3, pair_a_player2 = ?4, \
             pair_b_player1 = ?5, pair_b_player2 = ?6 WHERE id = ?7",
            vec![
                RowValues::Int(m.team_a),
                RowValues::Int(m.team_b),
                RowValues::Int(m.pair_a_player1),
                RowValues::Int(m.pair_a_player2),
                RowValues::Int(m.pair_b_player1),
                RowValues::Int(m.pair_b_player2),
                RowValues::Int(id),
            ],
        )
        .await?;
        Ok(m)
    }

    async fn delete_match(&self, id: i64) -> Result<(), StorageError> {
        self.execute("DELETE FROM matches WHERE id = ?1", vec![RowValues::Int(id)])
            .await?;
        Ok(())
    }

    async fn delete_matches_for_round(&self, round_id: i64) -> Result<(), StorageError> {
        self.execute(
            "DELETE FROM matches WHERE round_id = ?1",
            vec![RowValues::Int(round_id)],
        )
        .await?;
        Ok(())
    }

    async fn get_individual_matches(
        &self,
        round_id: i64,
    ) -> Result<Vec<IndividualMatch>, StorageError> {
        let res = self
            .query(
                "SELECT id, round_id, player1, player2 FROM individual_matches WHERE round_id = ?1 ORDER BY id",
                vec![RowValues::Int(round_id)],
            )
            .await?;
        Ok(res.results.iter().map(individual_match_from_row).collect())
    }

    async fn get_individual_match(
        &self,
        id: i64,
    ) -> Result<Option<IndividualMatch>, StorageError> {
        let res = self
            .query(
                "SELECT id, round_id, player1, player2 FROM individual_matches WHERE id = ?1",
                vec![RowValues::Int(id)],
            )
            .await?;
        Ok(res.results.first().map(individual_match_from_row))
    }

    async fn create_individual_match(
        &self,
        insert: InsertIndividualMatch,
    ) -> Result<IndividualMatch, StorageError> {
        let id = self
            .execute(
                "INSERT INTO individual_matches (round_id, player1, player2) VALUES (?1, ?2, ?3)",
                vec![
                    RowValues::Int(insert.round_id),
                    RowValues::Int(insert.player1),
                    RowValues::Int(insert.player2),
                ],
            )
            .await?;
        Ok(IndividualMatch {
            id,
            round_id: insert.round_id,
            player1: insert.player1,
            player2: insert.player2,
        })
    }

    async fn get_fines(&self) -> Result<Vec<Fine>, StorageError> {
        let res = self
            .query(
                "SELECT id, player_id, fine_type, amount, description, golf_day FROM fines ORDER BY id",
                vec![],
            )
            .await?;
        Ok(res.results.iter().map(fine_from_row).collect())
    }

    async fn get_fines_by_player_and_day(
        &self,
        player_id: i64,
        golf_day: &str,
    ) -> Result<Vec<Fine>, StorageError> {
        let res = self
            .query(
                "SELECT id, player_id, fine_type, amount, description, golf_day FROM fines \
                 WHERE player_id = ?1 AND golf_day = ?2 ORDER BY id",
                vec![
                    RowValues::Int(player_id),
                    RowValues::Text(golf_day.to_string()),
                ],
            )
            .await?;
        Ok(res.results.iter().map(fine_from_row).collect())
    }

    async fn create_fine(&self, insert: InsertFine) -> Result<Fine, StorageError> {
        let id = self
            .execute(
                "INSERT INTO fines (player_id, fine_type, amount, description, golf_day) VALUES (?1, ?2, ?3, ?4, ?5)",
                vec![
                    RowValues::Int(insert.player_id),
                    RowValues::Text(insert.fine_type.clone()),
                    RowValues::Int(insert.amount),
                    opt_text(insert.description.clone()),
                    RowValues::Text(insert.golf_day.clone()),
                ],
            )
            .await?;
        Ok(Fine {
            id,
            player_id: insert.player_id,
            fine_type: insert.fine_type,
            amount: insert.amount,
            description: insert.description,
            golf_day: insert.golf_day,
        })
    }

    async fn get_votes(&self) -> Result<Vec<Vote>, StorageError> {
        let res = self
            .query(
                "SELECT id, activity, count FROM votes ORDER BY id",
                vec![],
            )
            .await?;
        Ok(res.results.iter().map(vote_from_row).collect())
    }

    async fn get_vote_by_activity(&self, activity: &str) -> Result<Option<Vote>, StorageError> {
        let res = self
            .query(
                "SELECT id, activity, count FROM votes WHERE activity = ?1",
                vec![RowValues::Text(activity.to_string())],
            )
            .await?;
        Ok(res.results.first().map(vote_from_row))
    }

    async fn create_vote(&self, activity: &str, count: i64) -> Result<Vote, StorageError> {
        let id = self
            .execute(
                "INSERT INTO votes (activity, count) VALUES (?1, ?2)",
                vec![RowValues::Text(activity.to_string()), RowValues::Int(count)],
            )
            .await?;
        Ok(Vote {
            id,
            activity: activity.to_string(),
            count,
        })
    }

    async fn update_vote(&self, id: i64, count: i64) -> Result<Vote, StorageError> {
        self.execute(
            "UPDATE votes SET count = ?1 WHERE id = ?2",
            vec![RowValues::Int(count), RowValues::Int(id)],
        )
        .await?;
        let res = self
            .query(
                "SELECT id, activity, count FROM votes WHERE id = ?1",
                vec![RowValues::Int(id)],
            )
            .await?;
        res.results
            .first()
            .map(vote_from_row)
            .ok_or_else(|| StorageError::not_found("vote", id))
    }
}
