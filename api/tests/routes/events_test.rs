use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::helpers::app::{
    create_event, get, make_test_app, post_json, qr_payload, read_json, register_student,
};

#[tokio::test]
async fn events_are_listed_oldest_first() {
    let app = make_test_app().await;

    let first = create_event(&app, "Orientation").await;
    let second = create_event(&app, "Sports Fest").await;

    let response = app.oneshot(get("/api/events")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;

    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
async fn event_creation_rejects_blank_names() {
    let app = make_test_app().await;

    let response = app
        .oneshot(post_json("/api/events", &json!({ "name": "  " })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn attendance_for_unknown_event_is_not_found() {
    let app = make_test_app().await;

    let response = app.oneshot(get("/api/events/99/attendance")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = read_json(response).await;
    assert_eq!(json["message"], "Event not found.");
}

#[tokio::test]
async fn attendance_report_is_sorted_by_lastname() {
    let app = make_test_app().await;

    let zabala = register_student(&app, "Zabala", "Rico", "BSCS", "1A").await;
    let abad = register_student(&app, "Abad", "Lea", "BSIT", "2B").await;
    let event_id = create_event(&app, "Orientation").await;

    for id in [&zabala, &abad] {
        let payload = qr_payload(&app, id).await;
        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/events/{event_id}/scan"),
                &json!({ "payload": payload }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(get(&format!("/api/events/{event_id}/attendance")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["student"]["lastname"], "Abad");
    assert_eq!(rows[1]["student"]["lastname"], "Zabala");
    assert!(rows[0]["recorded_at"].as_str().is_some());
}
