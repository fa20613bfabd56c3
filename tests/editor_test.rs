mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::spawn_app;

#[tokio::test]
async fn calendar_grid_starts_on_monday() {
    let app = spawn_app().await;

    let (status, body) = app.get("/api/editor/calendar?date=2024-02-14").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["month_start"], "2024-02-01");
    assert_eq!(body["month_end"], "2024-02-29");
    assert_eq!(body["weeks"].as_array().unwrap().len(), 6);
    assert_eq!(body["weeks"][0][0], "2024-01-29");
    assert_eq!(body["next_month"], "2024-03-01");
}

#[tokio::test]
async fn second_click_before_start_swaps_and_keeps_open() {
    let app = spawn_app().await;

    let (status, body) = app
        .json(
            "POST",
            "/api/editor/range/click",
            json!({ "start": "2024-05-10", "end": "", "day": "2024-05-03" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["start"], "2024-05-03");
    assert_eq!(body["end"], "2024-05-10");
    assert_eq!(body["action"], "keepOpen");
}

#[tokio::test]
async fn click_after_start_completes_and_closes() {
    let app = spawn_app().await;

    let (_, body) = app
        .json(
            "POST",
            "/api/editor/range/click",
            json!({ "start": "2024-05-10", "day": "2024-05-12" }),
        )
        .await;

    assert_eq!(body["action"], "close");
    assert_eq!(body["display"], "2024-05-10 — 2024-05-12");
}

#[tokio::test]
async fn bad_date_is_a_validation_error() {
    let app = spawn_app().await;

    let (status, body) = app.get("/api/editor/calendar?date=14.02.2024").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid date: 14.02.2024");
}

#[tokio::test]
async fn admin_language_is_persisted() {
    let app = spawn_app().await;

    let (_, before) = app.get("/api/settings").await;
    assert_eq!(before, json!({ "lang": "ru" }));

    let (status, _) = app.json("PUT", "/api/settings", json!({ "lang": "uz" })).await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = app.get("/api/settings").await;
    assert_eq!(after, json!({ "lang": "uz" }));
    assert!(app.data.path().join("admin-settings.json").exists());
}

#[tokio::test]
async fn calendar_at_the_end_of_time_is_rejected() {
    let app = spawn_app().await;

    let (status, body) = app.get("/api/editor/calendar?date=%2B262142-12-31").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
