use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use tracing::error;

use crate::model::types::InsertFine;
use crate::storage::Storage;

pub async fn get_fines(storage: Data<dyn Storage>) -> impl Responder {
    match storage.get_fines().await {
        Ok(fines) => HttpResponse::Ok().json(fines),
        Err(e) => {
            error!("failed to fetch fines: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch fines"}))
        }
    }
}

pub async fn get_player_day_fines(
    path: web::Path<(i64, String)>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let (player_id, golf_day) = path.into_inner();
    match storage
        .get_fines_by_player_and_day(player_id, &golf_day)
        .await
    {
        Ok(fines) => HttpResponse::Ok().json(fines),
        Err(e) => {
            error!("failed to fetch player fines: {e}");
            HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to fetch player fines"}))
        }
    }
}

pub async fn create_fine(
    payload: web::Json<InsertFine>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    match storage.create_fine(payload.into_inner()).await {
        Ok(fine) => HttpResponse::Ok().json(fine),
        Err(e) => {
            error!("fine creation failed: {e}");
            HttpResponse::BadRequest().json(json!({"error": "Invalid fine data"}))
        }
    }
}
