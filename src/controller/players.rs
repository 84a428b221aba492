use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use tracing::error;

use crate::model::types::{InsertPlayer, UpdatePlayer};
use crate::storage::Storage;

pub async fn get_players(storage: Data<dyn Storage>) -> impl Responder {
    match storage.get_players().await {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => {
            error!("failed to fetch players: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch players"}))
        }
    }
}

pub async fn get_player(path: web::Path<i64>, storage: Data<dyn Storage>) -> impl Responder {
    let id = path.into_inner();
    match storage.get_player(id).await {
        Ok(Some(player)) => HttpResponse::Ok().json(player),
        Ok(None) => HttpResponse::NotFound().json(json!({"error": "Player not found"})),
        Err(e) => {
            error!("failed to fetch player {id}: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch player"}))
        }
    }
}

pub async fn create_player(
    payload: web::Json<InsertPlayer>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    match storage.create_player(payload.into_inner()).await {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => {
            error!("player creation failed: {e}");
            HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
        }
    }
}

pub async fn update_player(
    path: web::Path<i64>,
    payload: web::Json<UpdatePlayer>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    match storage
        .update_player(path.into_inner(), payload.into_inner())
        .await
    {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    }
}

pub async fn delete_player(path: web::Path<i64>, storage: Data<dyn Storage>) -> impl Responder {
    match storage.delete_player(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(json!({"success": true})),
        Err(e) => {
            error!("player deletion failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to delete player"}))
        }
    }
}
