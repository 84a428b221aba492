use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use tracing::error;

use crate::model::types::{InsertTeam, UpdateTeam};
use crate::storage::Storage;

pub async fn get_teams(storage: Data<dyn Storage>) -> impl Responder {
    match storage.get_teams().await {
        Ok(teams) => HttpResponse::Ok().json(teams),
        Err(e) => {
            error!("failed to fetch teams: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch teams"}))
        }
    }
}

pub async fn get_team(path: web::Path<i64>, storage: Data<dyn Storage>) -> impl Responder {
    match storage.get_team(path.into_inner()).await {
        Ok(Some(team)) => HttpResponse::Ok().json(team),
        Ok(None) => HttpResponse::NotFound().json(json!({"error": "Team not found"})),
        Err(e) => {
            error!("failed to fetch team: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch team"}))
        }
    }
}

pub async fn get_team_players(path: web::Path<i64>, storage: Data<dyn Storage>) -> impl Responder {
    match storage.get_team_players(path.into_inner()).await {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => {
            error!("failed to fetch team players: {e}");
            HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to fetch team players"}))
        }
    }
}

pub async fn create_team(
    payload: web::Json<InsertTeam>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    match storage.create_team(payload.into_inner()).await {
        Ok(team) => HttpResponse::Ok().json(team),
        Err(e) => {
            error!("team creation failed: {e}");
            HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
        }
    }
}

pub async fn update_team(
    path: web::Path<i64>,
    payload: web::Json<UpdateTeam>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    match storage
        .update_team(path.into_inner(), payload.into_inner())
        .await
    {
        Ok(team) => HttpResponse::Ok().json(team),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    }
}

pub async fn delete_team(path: web::Path<i64>, storage: Data<dyn Storage>) -> impl Responder {
    match storage.delete_team(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(json!({"success": true})),
        Err(e) => {
            error!("team deletion failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to delete team"}))
        }
    }
}
