use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use tracing::error;

use crate::model::course::HOLES_PER_ROUND;
use crate::model::types::{InsertScore, UpdateScore};
use crate::storage::Storage;

pub async fn get_all_scores(storage: Data<dyn Storage>) -> impl Responder {
    match storage.get_all_scores().await {
        Ok(scores) => HttpResponse::Ok().json(scores),
        Err(e) => {
            error!("failed to fetch all scores: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch all scores"}))
        }
    }
}

pub async fn get_round_scores(path: web::Path<i64>, storage: Data<dyn Storage>) -> impl Responder {
    let round_id = path.into_inner();
    match storage.get_scores(round_id).await {
        Ok(scores) => HttpResponse::Ok().json(scores),
        Err(e) => {
            error!("failed to fetch scores for round {round_id}: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch scores"}))
        }
    }
}

/// Fallback form taking the round as a query parameter; no round means an
/// empty list, not an error.
pub async fn get_scores_by_query(
    query: web::Query<HashMap<String, String>>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let round_id: i64 = match query.get("roundId").map(|s| s.trim().parse()) {
        Some(Ok(id)) => id,
        Some(Err(_)) => {
            return HttpResponse::BadRequest().json(json!({"error": "roundId must be an integer"}));
        }
        None => return HttpResponse::Ok().json(json!([])),
    };
    match storage.get_scores(round_id).await {
        Ok(scores) => HttpResponse::Ok().json(scores),
        Err(e) => {
            error!("failed to fetch scores for round {round_id}: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch scores"}))
        }
    }
}

/// Score entry. Re-submitting the same (round, player, hole) overwrites the
/// stored row; exactly one row per triple survives.
pub async fn submit_score(
    payload: web::Json<InsertScore>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let insert = payload.into_inner();
    if !(1..=HOLES_PER_ROUND).contains(&insert.hole) {
        return HttpResponse::BadRequest()
            .json(json!({"error": "hole must be between 1 and 18"}));
    }
    if insert.score < 1 {
        return HttpResponse::BadRequest()
            .json(json!({"error": "score must be a positive stroke count"}));
    }
    match storage.upsert_score(insert).await {
        Ok(score) => HttpResponse::Ok().json(score),
        Err(e) => {
            error!("score submission failed: {e}");
            HttpResponse::BadRequest().json(json!({"error": "Invalid score data"}))
        }
    }
}

pub async fn update_score(
    path: web::Path<i64>,
    payload: web::Json<UpdateScore>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    match storage
        .update_score(path.into_inner(), payload.into_inner())
        .await
    {
        Ok(score) => HttpResponse::Ok().json(score),
        Err(e) => {
            error!("score update failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to update score"}))
        }
    }
}
