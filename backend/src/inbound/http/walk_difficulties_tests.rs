//! Tests for walk difficulty HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::ports::{
    MockRegionRepository, MockWalkDifficultyRepository, MockWalkRepository, RepositoryError,
};
use crate::domain::{WalkDifficulty, WalkDifficultyId};
use crate::inbound::http::test_utils::{in_memory_state, mock_state, test_app};

const KNOWN_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

fn error_fields(body: &Value) -> Vec<&str> {
    body["details"]["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|error| error["field"].as_str())
        .collect()
}

#[rstest]
#[actix_web::test]
async fn create_then_get_round_trips() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/WalkDifficulty")
            .set_json(json!({ "Code": "Easy" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = actix_test::read_body_json(res).await;
    let uri = format!("/WalkDifficulty/{}", created["Id"].as_str().expect("id"));

    let fetched: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(fetched, created);
    assert_eq!(fetched["Code"], "Easy");
}

#[rstest]
#[case(json!({ "Code": "" }))]
#[case(json!({ "Code": "  " }))]
#[case(json!({ "Code": "\t\n" }))]
#[actix_web::test]
async fn blank_code_is_rejected(#[case] payload: Value) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/WalkDifficulty")
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(error_fields(&body), ["Code"]);
    assert_eq!(
        body["details"]["errors"][0]["message"],
        "Code cannot be null, empty or whitespace"
    );
}

#[rstest]
#[actix_web::test]
async fn missing_code_is_invalid_json() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/WalkDifficulty")
            .set_json(json!({}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], "invalid_json");
}

#[rstest]
#[actix_web::test]
async fn invalid_update_never_reaches_the_store() {
    // No expectations: any repository call panics.
    let state = mock_state(
        MockRegionRepository::new(),
        MockWalkDifficultyRepository::new(),
        MockWalkRepository::new(),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/WalkDifficulty/{KNOWN_ID}"))
            .set_json(json!({ "Code": " " }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn update_replaces_code() {
    let mut difficulties = MockWalkDifficultyRepository::new();
    difficulties
        .expect_update()
        .withf(|id, draft| id.to_string() == KNOWN_ID && draft.code == "Hard")
        .times(1)
        .returning(|id, draft| {
            Ok(Some(WalkDifficulty {
                id: *id,
                code: draft.code,
            }))
        });
    let state = mock_state(
        MockRegionRepository::new(),
        difficulties,
        MockWalkRepository::new(),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let body: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/WalkDifficulty/{KNOWN_ID}"))
            .set_json(json!({ "Code": "Hard" }))
            .to_request(),
    )
    .await;

    assert_eq!(body["Id"], KNOWN_ID);
    assert_eq!(body["Code"], "Hard");
}

#[rstest]
#[case::update(actix_test::TestRequest::put().set_json(json!({ "Code": "Hard" })))]
#[case::delete(actix_test::TestRequest::delete())]
#[case::get(actix_test::TestRequest::get())]
#[actix_web::test]
async fn unknown_id_is_not_found(#[case] request: actix_test::TestRequest) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let id = WalkDifficultyId::random();

    let res = actix_test::call_service(
        &app,
        request.uri(&format!("/WalkDifficulty/{id}")).to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = actix_test::read_body(res).await;
    assert!(body.is_empty());
}

#[rstest]
#[actix_web::test]
async fn store_outage_maps_to_service_unavailable() {
    let mut difficulties = MockWalkDifficultyRepository::new();
    difficulties
        .expect_delete()
        .times(1)
        .returning(|_| Err(RepositoryError::connection("pool timed out")));
    let state = mock_state(
        MockRegionRepository::new(),
        difficulties,
        MockWalkRepository::new(),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/WalkDifficulty/{KNOWN_ID}"))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}
