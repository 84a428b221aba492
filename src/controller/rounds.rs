use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use tracing::error;

use crate::model::course::course_by_id;
use crate::model::types::{InsertRound, UpdateRound};
use crate::storage::Storage;

pub async fn get_rounds(storage: Data<dyn Storage>) -> impl Responder {
    match storage.get_rounds().await {
        Ok(rounds) => HttpResponse::Ok().json(rounds),
        Err(e) => {
            error!("failed to fetch rounds: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch rounds"}))
        }
    }
}

pub async fn create_round(
    payload: web::Json<InsertRound>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let round = payload.into_inner();
    if course_by_id(&round.course).is_none() {
        return HttpResponse::BadRequest()
            .json(json!({"error": format!("Unknown course '{}'", round.course)}));
    }
    match storage.create_round(round).await {
        Ok(round) => HttpResponse::Ok().json(round),
        Err(e) => {
            error!("round creation failed: {e}");
            HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
        }
    }
}

pub async fn update_round(
    path: web::Path<i64>,
    payload: web::Json<UpdateRound>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let update = payload.into_inner();
    if let Some(course) = &update.course {
        if course_by_id(course).is_none() {
            return HttpResponse::BadRequest()
                .json(json!({"error": format!("Unknown course '{course}'")}));
        }
    }
    match storage.update_round(path.into_inner(), update).await {
        Ok(round) => HttpResponse::Ok().json(round),
        Err(e) => {
            error!("round update failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to update round"}))
        }
    }
}

pub async fn delete_round(path: web::Path<i64>, storage: Data<dyn Storage>) -> impl Responder {
    match storage.delete_round(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(json!({"message": "Round deleted successfully"})),
        Err(e) => {
            error!("round deletion failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to delete round"}))
        }
    }
}

pub async fn clear_round_scores(
    path: web::Path<i64>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    match storage.clear_round_scores(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(json!({"message": "Round scores cleared successfully"})),
        Err(e) => {
            error!("clearing round scores failed: {e}");
            HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to clear round scores"}))
        }
    }
}
