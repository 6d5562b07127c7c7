use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use recipe_master_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use recipe_master_core::domain::recipe::{images::DESSERT_IMAGES, services::DEGRADED_NOTICE};
use serde_json::{Value, json};

// Nothing listens on port 9, so every LLM call fails fast and the
// service answers with a degraded result.
fn server() -> TestServer {
    let args = Args::parse_from([
        "recipe-master-api",
        "--llm-base-url",
        "http://127.0.0.1:9",
        "--openai-api-key",
        "test",
        "--pexels-api-key=",
        "--metrics-enabled=false",
        "--random-seed",
        "7",
    ]);
    let state = state(Arc::new(args)).unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

#[tokio::test]
async fn enrich_returns_degraded_result_when_llm_is_down() {
    let server = server();

    let response = server
        .post("/recipes/enrich")
        .json(&json!({
            "name": "Maya",
            "gender": "female",
            "is_diabetic": true,
            "dish_name": "Chocolate Cake",
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let data = &body["data"];
    assert_eq!(data["ingredients"], json!(["Error loading ingredients"]));
    assert_eq!(data["notice"], json!(DEGRADED_NOTICE));

    let main_image = data["main_image"].as_str().unwrap();
    assert!(DESSERT_IMAGES.contains(&main_image));
}

#[tokio::test]
async fn enrich_rejects_empty_name() {
    let server = server();

    let response = server
        .post("/recipes/enrich")
        .json(&json!({
            "name": "",
            "gender": "male",
            "dish_name": "Pizza",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn enrich_rejects_missing_gender() {
    let server = server();

    let response = server
        .post("/recipes/enrich")
        .json(&json!({
            "name": "Sam",
            "dish_name": "Pizza",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], json!(400));
}

#[tokio::test]
async fn health_profile_drops_female_conditions_for_male() {
    let server = server();

    let response = server
        .post("/health-profiles")
        .json(&json!({
            "name": "  Sam  ",
            "gender": "male",
            "is_pregnant": true,
            "has_allergies": false,
            "allergies": "shellfish",
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let profile = &body["data"];
    assert_eq!(profile["name"], json!("Sam"));
    assert!(profile.get("female_conditions").is_none());
    assert!(profile.get("allergies").is_none());
}

#[tokio::test]
async fn health_endpoint_is_up() {
    let server = server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], json!("ok"));
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let server = server();

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/recipes/enrich"));
    assert!(paths.contains_key("/health-profiles"));
}
