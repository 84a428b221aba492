use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use tracing::error;

use crate::model::types::{InsertIndividualMatch, InsertMatch, Round, UpdateMatch};
use crate::scoring::{derive_match_standing, derive_singles_standing, HoleWinner};
use crate::storage::Storage;
use crate::view::matchplay::{render_matchplay_page, MatchDisplay};

pub async fn get_matches(
    query: web::Query<HashMap<String, String>>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let round_param = query.get("roundId").map(|s| s.trim().parse::<i64>());
    match round_param {
        Some(Ok(round_id)) => match storage.get_matches(round_id).await {
            Ok(matches) => HttpResponse::Ok().json(matches),
            Err(e) => {
                error!("failed to fetch matches: {e}");
                HttpResponse::InternalServerError()
                    .json(json!({"error": "Failed to fetch matches"}))
            }
        },
        Some(Err(_)) => {
            HttpResponse::BadRequest().json(json!({"error": "roundId must be an integer"}))
        }
        // No round given: collect every round's matches for the leaderboard.
        None => {
            let rounds = match storage.get_rounds().await {
                Ok(rounds) => rounds,
                Err(e) => {
                    error!("failed to fetch rounds: {e}");
                    return HttpResponse::InternalServerError()
                        .json(json!({"error": "Failed to fetch matches"}));
                }
            };
            let mut all = Vec::new();
            for round in rounds {
                match storage.get_matches(round.id).await {
                    Ok(mut matches) => all.append(&mut matches),
                    Err(e) => {
                        error!("failed to fetch matches for round {}: {e}", round.id);
                        return HttpResponse::InternalServerError()
                            .json(json!({"error": "Failed to fetch matches"}));
                    }
                }
            }
            HttpResponse::Ok().json(all)
        }
    }
}

pub async fn get_round_matches(path: web::Path<i64>, storage: Data<dyn Storage>) -> impl Responder {
    match storage.get_matches(path.into_inner()).await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => {
            error!("failed to fetch matches: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch matches"}))
        }
    }
}

/// Round setup invariants: at most two fourballs per round, and no player in
/// more than one of them. Violations are rejected writes, not corrections.
pub async fn create_match(
    payload: web::Json<InsertMatch>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let insert = payload.into_inner();

    let existing = match storage.get_matches(insert.round_id).await {
        Ok(matches) => matches,
        Err(e) => {
            error!("failed to fetch existing matches: {e}");
            return HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to create match"}));
        }
    };

    if existing.len() >= 2 {
        return HttpResponse::BadRequest().json(json!({
            "error": "Maximum 2 fourballs allowed per day",
            "code": "FOURBALL_LIMIT_EXCEEDED"
        }));
    }

    let mut assigned: HashSet<i64> = existing.iter().flat_map(|m| m.player_ids()).collect();
    for player_id in [
        insert.pair_a_player1,
        insert.pair_a_player2,
        insert.pair_b_player1,
        insert.pair_b_player2,
    ] {
        if !assigned.insert(player_id) {
            return HttpResponse::BadRequest().json(json!({
                "error": "Player already assigned to another fourball",
                "code": "PLAYER_ALREADY_ASSIGNED"
            }));
        }
    }

    match storage.create_match(insert).await {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => {
            error!("match creation failed: {e}");
            HttpResponse::BadRequest().json(json!({"error": "Invalid match data"}))
        }
    }
}

pub async fn update_match(
    path: web::Path<i64>,
    payload: web::Json<UpdateMatch>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    match storage
        .update_match(path.into_inner(), payload.into_inner())
        .await
    {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    }
}

pub async fn delete_match(path: web::Path<i64>, storage: Data<dyn Storage>) -> impl Responder {
    match storage.delete_match(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(json!({"success": true})),
        Err(e) => {
            error!("match deletion failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to delete match"}))
        }
    }
}

/// Wipe a round's pairings so they can be recreated from scratch.
pub async fn delete_round_matches(
    query: web::Query<HashMap<String, String>>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let round_id: i64 = match query.get("roundId").map(|s| s.trim().parse()) {
        Some(Ok(id)) => id,
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "roundId parameter is required"}));
        }
    };
    match storage.delete_matches_for_round(round_id).await {
        Ok(()) => HttpResponse::Ok().json(json!({"success": true})),
        Err(e) => {
            error!("bulk match deletion failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to delete matches"}))
        }
    }
}

fn course_for_round(rounds: &[Round], round_id: i64) -> String {
    rounds
        .iter()
        .find(|r| r.id == round_id)
        .map(|r| r.course.clone())
        .unwrap_or_default()
}

/// Current standing of one betterball match, derived from raw scores on
/// every request; nothing is persisted.
pub async fn get_match_standing(
    path: web::Path<i64>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let id = path.into_inner();
    let m = match storage.get_match(id).await {
        Ok(Some(m)) => m,
        Ok(None) => return HttpResponse::NotFound().json(json!({"error": "Match not found"})),
        Err(e) => {
            error!("failed to fetch match {id}: {e}");
            return HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to fetch match"}));
        }
    };

    let Ok((players, rounds, scores)) = futures::try_join!(
        storage.get_players(),
        storage.get_rounds(),
        storage.get_scores(m.round_id),
    ) else {
        return HttpResponse::InternalServerError()
            .json(json!({"error": "Failed to derive match standing"}));
    };

    let course = course_for_round(&rounds, m.round_id);
    let standing = derive_match_standing(&m, &players, &scores, &course);
    HttpResponse::Ok().json(standing)
}

pub async fn get_individual_matches(
    path: web::Path<i64>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    match storage.get_individual_matches(path.into_inner()).await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => {
            error!("failed to fetch individual matches: {e}");
            HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to fetch individual matches"}))
        }
    }
}

pub async fn create_individual_match(
    payload: web::Json<InsertIndividualMatch>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let insert = payload.into_inner();
    if insert.player1 == insert.player2 {
        return HttpResponse::BadRequest()
            .json(json!({"error": "A player cannot play themselves"}));
    }
    match storage.create_individual_match(insert).await {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => {
            error!("individual match creation failed: {e}");
            HttpResponse::BadRequest().json(json!({"error": "Invalid individual match data"}))
        }
    }
}

/// HTML page with every pairing and derived standing for one round.
pub async fn matchplay_page(
    query: web::Query<HashMap<String, String>>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let round_id: i64 = match query.get("round").map(|s| s.trim().parse()) {
        Some(Ok(id)) => id,
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "round parameter is required"}));
        }
    };

    let Ok((players, teams, rounds, matches, singles, scores)) = futures::try_join!(
        storage.get_players(),
        storage.get_teams(),
        storage.get_rounds(),
        storage.get_matches(round_id),
        storage.get_individual_matches(round_id),
        storage.get_scores(round_id),
    ) else {
        return HttpResponse::InternalServerError()
            .json(json!({"error": "Failed to load matchplay data"}));
    };

    let course = course_for_round(&rounds, round_id);
    let team_name = |id: i64| {
        teams
            .iter()
            .find(|t| t.id == id)
            .map_or_else(|| format!("Team {id}"), |t| t.name.clone())
    };
    let player_name = |id: i64| {
        players
            .iter()
            .find(|p| p.id == id)
            .map_or_else(|| format!("Player {id}"), |p| p.full_name())
    };

    let fourballs: Vec<MatchDisplay> = matches
        .iter()
        .map(|m| {
            let standing = derive_match_standing(m, &players, &scores, &course);
            MatchDisplay {
                title: format!("{} vs {}", team_name(m.team_a), team_name(m.team_b)),
                leader_name: match standing.leader {
                    Some(HoleWinner::TeamA) => Some(team_name(m.team_a)),
                    Some(HoleWinner::TeamB) => Some(team_name(m.team_b)),
                    _ => None,
                },
                standing,
            }
        })
        .collect();
    let singles: Vec<MatchDisplay> = singles
        .iter()
        .map(|m| {
            let standing = derive_singles_standing(m, &players, &scores, &course);
            MatchDisplay {
                title: format!("{} vs {}", player_name(m.player1), player_name(m.player2)),
                leader_name: match standing.leader {
                    Some(HoleWinner::TeamA) => Some(player_name(m.player1)),
                    Some(HoleWinner::TeamB) => Some(player_name(m.player2)),
                    _ => None,
                },
                standing,
            }
        })
        .collect();

    let markup = render_matchplay_page(round_id, &fourballs, &singles);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
