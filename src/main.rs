use deadpool_postgres::{ManagerConfig, RecyclingMethod};
use golf_trip::args;
use golf_trip::cache;
use golf_trip::controller::{
    db_prefill, fines, leaderboard, matches, players, reference, rounds, scores, teams, votes,
};
use golf_trip::storage::{DbStorage, Storage};
use golf_trip::view::index::{render_index_template, DEFAULT_INDEX_TITLE};
use sql_middleware::middleware::{
    ConfigAndPool, DatabaseType, MiddlewarePool, MiddlewarePoolConnection, QueryAndParams,
};
use sql_middleware::SqlMiddlewareDbError;

use actix_files::Files;
use actix_web::web::{self, Data};
use actix_web::{App, HttpResponse, HttpServer, Responder};
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = args::args_checks();

    let cfg = deadpool_postgres::Config::new();
    let config_and_pool: ConfigAndPool;
    if args.db_type == DatabaseType::Postgres {
        let mut postgres_config = cfg;
        postgres_config.dbname = Some(args.db_name.clone());
        postgres_config.host = args.db_host.clone();
        postgres_config.port = args.db_port;
        postgres_config.user = args.db_user.clone();
        postgres_config.password = args.db_password.clone();
        postgres_config.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });
        config_and_pool = ConfigAndPool::new_postgres(postgres_config).await?;
    } else {
        match ConfigAndPool::new_sqlite(args.db_name.clone()).await {
            Ok(pool) => {
                config_and_pool = pool;
            }
            Err(e) => {
                eprintln!(
                    "Error: {}\nBacktrace: {:?}",
                    e,
                    std::backtrace::Backtrace::capture()
                );
                std::process::exit(1);
            }
        }
    }

    if args.db_startup_script.is_some() {
        let query_and_params = QueryAndParams {
            query: args.combined_sql_script.clone(),
            params: vec![],
        };

        let pool = config_and_pool.pool.get().await?;
        let sconn = MiddlewarePool::get_connection(pool).await?;
        (match sconn {
            MiddlewarePoolConnection::Postgres(mut client) => {
                let tx = client.transaction().await?;
                tx.batch_execute(&query_and_params.query).await?;
                tx.commit().await?;
                Ok::<_, SqlMiddlewareDbError>(())
            }
            MiddlewarePoolConnection::Sqlite(conn) => {
                conn.interact(move |db_conn| {
                    let tx = db_conn.transaction()?;
                    tx.execute_batch(&query_and_params.query)?;
                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(())
                })
                .await?
            }
        })?;
    }

    let storage: Arc<dyn Storage> = Arc::new(DbStorage::new(config_and_pool.clone()));

    if let Some(json) = &args.db_populate_json {
        db_prefill::db_prefill(json, storage.as_ref()).await?;
    }

    let leaderboard_cache = cache::new_cache();

    info!("listening on {}", args.bind_addr);
    HttpServer::new(move || {
        App::new()
            .app_data(Data::from(storage.clone()))
            .app_data(Data::new(leaderboard_cache.clone()))
            .route("/", web::get().to(index))
            .route("/health", web::get().to(HttpResponse::Ok))
            .route("/leaderboard", web::get().to(leaderboard::leaderboard))
            .route("/matchplay", web::get().to(matches::matchplay_page))
            // players
            .route("/api/players", web::get().to(players::get_players))
            .route("/api/players", web::post().to(players::create_player))
            .route("/api/players/{id}", web::get().to(players::get_player))
            .route("/api/players/{id}", web::patch().to(players::update_player))
            .route("/api/players/{id}", web::delete().to(players::delete_player))
            // teams
            .route("/api/teams", web::get().to(teams::get_teams))
            .route("/api/teams", web::post().to(teams::create_team))
            .route("/api/teams/{id}", web::get().to(teams::get_team))
            .route("/api/teams/{id}", web::patch().to(teams::update_team))
            .route("/api/teams/{id}", web::delete().to(teams::delete_team))
            .route("/api/teams/{id}/players", web::get().to(teams::get_team_players))
            // rounds
            .route("/api/rounds", web::get().to(rounds::get_rounds))
            .route("/api/rounds", web::post().to(rounds::create_round))
            .route("/api/rounds/{id}", web::patch().to(rounds::update_round))
            .route("/api/rounds/{id}", web::delete().to(rounds::delete_round))
            .route("/api/rounds/{id}/clear", web::post().to(rounds::clear_round_scores))
            // scores
            .route("/api/scores/all", web::get().to(scores::get_all_scores))
            .route("/api/scores", web::get().to(scores::get_scores_by_query))
            .route("/api/scores", web::post().to(scores::submit_score))
            .route("/api/scores/{round_id}", web::get().to(scores::get_round_scores))
            .route("/api/scores/{id}", web::patch().to(scores::update_score))
            // matches
            .route("/api/matches", web::get().to(matches::get_matches))
            .route("/api/matches", web::post().to(matches::create_match))
            .route("/api/matches", web::delete().to(matches::delete_round_matches))
            .route("/api/matches/{id}/standing", web::get().to(matches::get_match_standing))
            .route("/api/matches/{round_id}", web::get().to(matches::get_round_matches))
            .route("/api/matches/{id}", web::patch().to(matches::update_match))
            .route("/api/matches/{id}", web::delete().to(matches::delete_match))
            .route(
                "/api/individual-matches/{round_id}",
                web::get().to(matches::get_individual_matches),
            )
            .route(
                "/api/individual-matches",
                web::post().to(matches::create_individual_match),
            )
            // fines
            .route("/api/fines", web::get().to(fines::get_fines))
            .route("/api/fines", web::post().to(fines::create_fine))
            .route(
                "/api/fines/{player_id}/{golf_day}",
                web::get().to(fines::get_player_day_fines),
            )
            // votes
            .route("/api/votes", web::get().to(votes::get_votes))
            .route("/api/votes", web::post().to(votes::cast_vote))
            // static reference data
            .route("/api/courses", web::get().to(reference::get_courses))
            .route("/api/schedule", web::get().to(reference::get_schedule))
            .route("/api/fine-schedule", web::get().to(reference::get_fine_schedule))
            .route("/api/activities", web::get().to(reference::get_activities))
            .service(Files::new("/static", "./static"))
    })
    .bind(args.bind_addr.clone())?
    .run()
    .await?;
    Ok(())
}

async fn index() -> impl Responder {
    let markup = render_index_template(DEFAULT_INDEX_TITLE);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
