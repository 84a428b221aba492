use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::storage::Storage;

#[derive(Deserialize)]
pub struct VotePayload {
    pub activity: String,
}

pub async fn get_votes(storage: Data<dyn Storage>) -> impl Responder {
    match storage.get_votes().await {
        Ok(votes) => HttpResponse::Ok().json(votes),
        Err(e) => {
            error!("failed to fetch votes: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch votes"}))
        }
    }
}

/// One vote per request: bump the activity's counter, creating it on first
/// vote.
pub async fn cast_vote(
    payload: web::Json<VotePayload>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let activity = payload.into_inner().activity;
    if activity.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "activity is required"}));
    }

    let existing = match storage.get_vote_by_activity(&activity).await {
        Ok(vote) => vote,
        Err(e) => {
            error!("failed to look up vote: {e}");
            return HttpResponse::InternalServerError()
                .json(json!({"error": "Invalid vote data"}));
        }
    };

    let result = match existing {
        Some(vote) => storage.update_vote(vote.id, vote.count + 1).await,
        None => storage.create_vote(&activity, 1).await,
    };
    match result {
        Ok(vote) => HttpResponse::Ok().json(vote),
        Err(e) => {
            error!("vote write failed: {e}");
            HttpResponse::BadRequest().json(json!({"error": "Invalid vote data"}))
        }
    }
}
