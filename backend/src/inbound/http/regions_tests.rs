//! Tests for region HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::ports::{
    MockRegionRepository, MockWalkDifficultyRepository, MockWalkRepository, RepositoryError,
};
use crate::inbound::http::test_utils::{in_memory_state, mock_state, test_app};

fn wellington() -> Value {
    json!({
        "Code": "WGN",
        "Name": "Wellington",
        "Area": 100,
        "Lat": -41.3,
        "Long": 174.8,
        "Population": 200000
    })
}

#[rstest]
#[actix_web::test]
async fn create_returns_location_and_body() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/Regions")
            .set_json(wellington())
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("location header");
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(location, format!("/Regions/{}", body["Id"].as_str().expect("id")));
    assert_eq!(body["Name"], "Wellington");
}

#[rstest]
#[actix_web::test]
async fn invalid_payload_reports_every_field() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let payload = json!({
        "Code": "",
        "Name": "  ",
        "Area": 0,
        "Lat": 0,
        "Long": 0,
        "Population": -1
    });

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/Regions")
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let trace_id = res
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["traceId"].as_str().map(str::to_owned), trace_id);
    let fields: Vec<&str> = body["details"]["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|error| error["field"].as_str())
        .collect();
    assert_eq!(fields, ["Code", "Name", "Area", "Population"]);
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_a_structured_bad_request() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/Regions")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"Code\": \"WGN\"")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], "invalid_json");
}

#[rstest]
#[case("/Regions/not-a-uuid")]
#[case("/Regions/1234")]
#[actix_web::test]
async fn malformed_id_is_rejected(#[case] uri: &str) {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let res =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], "invalid_uuid");
}

#[rstest]
#[actix_web::test]
async fn store_outage_maps_to_service_unavailable() {
    let mut regions = MockRegionRepository::new();
    regions
        .expect_list()
        .times(1)
        .returning(|| Err(RepositoryError::connection("pool timed out")));
    let state = mock_state(
        regions,
        MockWalkDifficultyRepository::new(),
        MockWalkRepository::new(),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/Regions").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "service_unavailable");
}

#[rstest]
#[actix_web::test]
async fn query_failure_is_redacted() {
    let mut regions = MockRegionRepository::new();
    regions
        .expect_add()
        .times(1)
        .returning(|_| Err(RepositoryError::query("relation \"regions\" does not exist")));
    let state = mock_state(
        regions,
        MockWalkDifficultyRepository::new(),
        MockWalkRepository::new(),
    );
    let app = actix_test::init_service(test_app(state)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/Regions")
            .set_json(wellington())
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "Internal server error");
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
    let mut payload = wellington();
    payload["Area"] = json!(-3);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/Regions/3fa85f64-5717-4562-b3fc-2c963f66afa6")
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
