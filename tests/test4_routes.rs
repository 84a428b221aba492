mod common;

use actix_web::web::{self, Data};
use actix_web::{test, App};
use serde_json::{json, Value};

use golf_trip::cache;
use golf_trip::controller::{leaderboard, matches, players, scores, votes};

#[actix_web::test]
async fn player_crud_round_trip() {
    let storage = common::mem_storage();
    let app = test::init_service(
        App::new()
            .app_data(Data::from(storage.clone()))
            .route("/api/players", web::get().to(players::get_players))
            .route("/api/players", web::post().to(players::create_player))
            .route("/api/players/{id}", web::patch().to(players::update_player))
            .route("/api/players/{id}", web::get().to(players::get_player)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({"firstName": "John", "lastName": "Doe", "handicap": "12.4", "teamId": null}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["firstName"], "John");
    assert_eq!(created["handicap"], "12.4");
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/players/{id}"))
        .set_json(json!({"handicap": "11.0"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["handicap"], "11.0");
    assert_eq!(updated["lastName"], "Doe");

    let req = test::TestRequest::get().uri("/api/players").to_request();
    let listing: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listing.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get().uri("/api/players/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn score_resubmission_overwrites_in_place() {
    let storage = common::mem_storage();
    let app = test::init_service(
        App::new()
            .app_data(Data::from(storage.clone()))
            .route("/api/scores", web::post().to(scores::submit_score))
            .route("/api/scores/{round_id}", web::get().to(scores::get_round_scores)),
    )
    .await;

    for gross in [6, 4] {
        let req = test::TestRequest::post()
            .uri("/api/scores")
            .set_json(json!({"roundId": 1, "playerId": 7, "hole": 4, "score": gross}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let req = test::TestRequest::get().uri("/api/scores/1").to_request();
    let listing: Value = test::call_and_read_body_json(&app, req).await;
    let rows = listing.as_array().unwrap();
    assert_eq!(rows.len(), 1, "the triple must hold exactly one row");
    assert_eq!(rows[0]["score"], 4, "the later write wins");
}

#[actix_web::test]
async fn score_entry_rejects_bad_holes() {
    let storage = common::mem_storage();
    let app = test::init_service(
        App::new()
            .app_data(Data::from(storage.clone()))
            .route("/api/scores", web::post().to(scores::submit_score)),
    )
    .await;

    for hole in [0, 19] {
        let req = test::TestRequest::post()
            .uri("/api/scores")
            .set_json(json!({"roundId": 1, "playerId": 1, "hole": hole, "score": 4}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn fourball_invariants_reject_bad_setups() {
    let storage = common::mem_storage();
    let trip = common::seed_trip(storage.as_ref()).await;
    let app = test::init_service(
        App::new()
            .app_data(Data::from(storage.clone()))
            .route("/api/matches", web::post().to(matches::create_match)),
    )
    .await;

    let pairing = |a: &[i64], b: &[i64]| {
        json!({
            "roundId": trip.round,
            "teamA": trip.team_a,
            "teamB": trip.team_b,
            "pairAPlayer1": a[0],
            "pairAPlayer2": a[1],
            "pairBPlayer1": b[0],
            "pairBPlayer2": b[1],
        })
    };

    // Two fourballs fill the round.
    let first = pairing(&trip.team_a_players[0..2], &trip.team_b_players[0..2]);
    let req = test::TestRequest::post().uri("/api/matches").set_json(&first).to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    // Re-using a player from the first fourball is rejected.
    let overlap = pairing(
        &[trip.team_a_players[0], trip.team_a_players[2]],
        &trip.team_b_players[2..4],
    );
    let req = test::TestRequest::post().uri("/api/matches").set_json(&overlap).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "PLAYER_ALREADY_ASSIGNED");

    let second = pairing(&trip.team_a_players[2..4], &trip.team_b_players[2..4]);
    let req = test::TestRequest::post().uri("/api/matches").set_json(&second).to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    // A third fourball busts the per-round limit.
    let third = pairing(&trip.team_a_players[0..2], &trip.team_b_players[0..2]);
    let req = test::TestRequest::post().uri("/api/matches").set_json(&third).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "FOURBALL_LIMIT_EXCEEDED");
}

#[actix_web::test]
async fn votes_increment_per_activity() {
    let storage = common::mem_storage();
    let app = test::init_service(
        App::new()
            .app_data(Data::from(storage.clone()))
            .route("/api/votes", web::get().to(votes::get_votes))
            .route("/api/votes", web::post().to(votes::cast_vote)),
    )
    .await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/votes")
            .set_json(json!({"activity": "Jeep Safari"}))
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
    }
    let req = test::TestRequest::post()
        .uri("/api/votes")
        .set_json(json!({"activity": "Go-kart Racing"}))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::get().uri("/api/votes").to_request();
    let listing: Value = test::call_and_read_body_json(&app, req).await;
    let votes = listing.as_array().unwrap();
    assert_eq!(votes.len(), 2);
    let jeep = votes
        .iter()
        .find(|v| v["activity"] == "Jeep Safari")
        .unwrap();
    assert_eq!(jeep["count"], 2);
}

#[actix_web::test]
async fn leaderboard_endpoint_serves_ranked_json() {
    let storage = common::mem_storage();
    let trip = common::seed_trip(storage.as_ref()).await;

    // David (scratch) pars the first three holes; Sarah never plays.
    let david = trip.team_b_players[1];
    for (hole, gross) in [(1, 4), (2, 3), (3, 4)] {
        storage
            .upsert_score(golf_trip::model::types::InsertScore {
                round_id: trip.round,
                player_id: david,
                hole,
                score: gross,
                three_putt: false,
                picked_up: false,
                in_water: false,
                in_bunker: false,
            })
            .await
            .unwrap();
    }

    let app = test::init_service(
        App::new()
            .app_data(Data::from(storage.clone()))
            .app_data(Data::new(cache::new_cache()))
            .route("/leaderboard", web::get().to(leaderboard::leaderboard)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/leaderboard?mode=stableford&json=1&cache=0")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let players = body["players"].as_array().unwrap();
    assert_eq!(players.len(), 1, "only players with scores are ranked");
    assert_eq!(players[0]["playerId"].as_i64(), Some(david));
    // Three gross pars off scratch: two points each.
    assert_eq!(players[0]["total"], 6);
    assert!(players[0]["toPar"].is_null());

    let req = test::TestRequest::get()
        .uri("/leaderboard?mode=sideways&json=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}
