use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use tracing::error;

use crate::cache::{self, LeaderboardCache};
use crate::scoring::{aggregate, Leaderboard, LeaderboardMode};
use crate::storage::Storage;
use crate::view::leaderboard::render_leaderboard;

fn mode_key(mode: LeaderboardMode) -> &'static str {
    match mode {
        LeaderboardMode::Gross => "gross",
        LeaderboardMode::Net => "net",
        LeaderboardMode::Stableford => "stableford",
    }
}

async fn compute(storage: &dyn Storage, mode: LeaderboardMode) -> Option<Leaderboard> {
    let Ok((players, teams, rounds, scores)) = futures::try_join!(
        storage.get_players(),
        storage.get_teams(),
        storage.get_rounds(),
        storage.get_all_scores(),
    ) else {
        return None;
    };
    Some(aggregate(&players, &teams, &rounds, &scores, mode))
}

/// Ranked standings across every round. `mode` selects gross, net, or
/// Stableford; `json=1` returns the raw data, otherwise the HTML table.
/// Results are cached briefly per mode; `cache=0` forces a recompute.
pub async fn leaderboard(
    query: web::Query<HashMap<String, String>>,
    storage: Data<dyn Storage>,
    lb_cache: Data<LeaderboardCache>,
) -> impl Responder {
    let mode_str = query.get("mode").map(String::as_str).unwrap_or("gross");
    let Some(mode) = LeaderboardMode::from_param(mode_str.trim()) else {
        return HttpResponse::BadRequest()
            .json(json!({"error": "mode must be gross, net, or stableford"}));
    };

    let json_out = matches!(query.get("json").map(String::as_str), Some("1" | "true"));
    let use_cache = !matches!(query.get("cache").map(String::as_str), Some("0" | "false"));

    let key = mode_key(mode);
    let data = if use_cache {
        cache::get_fresh(lb_cache.get_ref(), key).await
    } else {
        None
    };
    let data = match data {
        Some(data) => data,
        None => {
            let Some(computed) = compute(storage.get_ref(), mode).await else {
                error!("leaderboard aggregation failed for mode {key}");
                return HttpResponse::InternalServerError()
                    .json(json!({"error": "Failed to compute leaderboard"}));
            };
            cache::put(lb_cache.get_ref(), key, computed.clone()).await;
            computed
        }
    };

    if json_out {
        HttpResponse::Ok().json(data)
    } else {
        let markup = render_leaderboard(&data);
        HttpResponse::Ok()
            .content_type("text/html")
            .body(markup.into_string())
    }
}
