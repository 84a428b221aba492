mod common;

use actix_web::web::{self, Data};
use actix_web::{test, App};
use serde_json::Value;

use golf_trip::controller::matches;
use golf_trip::model::types::{InsertMatch, InsertScore};

#[actix_web::test]
async fn standing_is_derived_from_raw_scores() {
    let storage = common::mem_storage();
    let trip = common::seed_trip(storage.as_ref()).await;

    let m = storage
        .create_match(InsertMatch {
            round_id: trip.round,
            team_a: trip.team_a,
            team_b: trip.team_b,
            pair_a_player1: trip.team_a_players[0],
            pair_a_player2: trip.team_a_players[1],
            pair_b_player1: trip.team_b_players[0],
            pair_b_player2: trip.team_b_players[1],
        })
        .await
        .unwrap();

    // Hole 1 at Amendoeira is par 4: a gross birdie from pair A against
    // pars from pair B takes the hole regardless of strokes.
    let entries = [
        (trip.team_a_players[0], 3),
        (trip.team_a_players[1], 5),
        (trip.team_b_players[0], 5),
        (trip.team_b_players[1], 5),
    ];
    for (player_id, gross) in entries {
        storage
            .upsert_score(InsertScore {
                round_id: trip.round,
                player_id,
                hole: 1,
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
            .route(
                "/api/matches/{id}/standing",
                web::get().to(matches::get_match_standing),
            ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/matches/{}/standing", m.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["holesPlayed"], 1);
    assert_eq!(body["holesRemaining"], 17);
    assert_eq!(body["holesWonA"], 1);
    assert_eq!(body["holesWonB"], 0);
    assert_eq!(body["status"], "1UP");
    assert_eq!(body["leader"], "teamA");
    assert_eq!(body["holeResults"].as_array().unwrap().len(), 1);
    assert_eq!(body["holeResults"][0]["winner"], "teamA");

    let req = test::TestRequest::get()
        .uri("/api/matches/9999/standing")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn bulk_repairing_replaces_a_rounds_matches() {
    let storage = common::mem_storage();
    let trip = common::seed_trip(storage.as_ref()).await;

    for (a, b) in [(0, 0), (2, 2)] {
        storage
            .create_match(InsertMatch {
                round_id: trip.round,
                team_a: trip.team_a,
                team_b: trip.team_b,
                pair_a_player1: trip.team_a_players[a],
                pair_a_player2: trip.team_a_players[a + 1],
                pair_b_player1: trip.team_b_players[b],
                pair_b_player2: trip.team_b_players[b + 1],
            })
            .await
            .unwrap();
    }
    assert_eq!(storage.get_matches(trip.round).await.unwrap().len(), 2);

    // Editing pairings wipes and recreates from scratch.
    storage.delete_matches_for_round(trip.round).await.unwrap();
    assert!(storage.get_matches(trip.round).await.unwrap().is_empty());

    let recreated = storage
        .create_match(InsertMatch {
            round_id: trip.round,
            team_a: trip.team_a,
            team_b: trip.team_b,
            pair_a_player1: trip.team_a_players[0],
            pair_a_player2: trip.team_a_players[2],
            pair_b_player1: trip.team_b_players[0],
            pair_b_player2: trip.team_b_players[2],
        })
        .await
        .unwrap();
    let matches = storage.get_matches(trip.round).await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, recreated.id);
}
