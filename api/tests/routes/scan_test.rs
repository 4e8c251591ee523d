use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::helpers::app::{
    create_event, make_test_app, post_json, qr_payload, read_json, register_student,
};

#[tokio::test]
async fn first_scan_records_and_second_scan_conflicts() {
    let app = make_test_app().await;

    let student = register_student(&app, "Dela Cruz", "Ana", "BSIT", "2B").await;
    let event_id = create_event(&app, "Orientation").await;
    let payload = qr_payload(&app, &student).await;
    let body = json!({ "payload": payload });

    let response = app
        .clone()
        .oneshot(post_json(&format!("/api/events/{event_id}/scan"), &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let first = read_json(response).await;
    assert_eq!(first["success"], true);
    assert_eq!(first["data"]["severity"], "success");
    assert_eq!(first["message"], "Attendance successfully recorded.");
    assert_eq!(first["data"]["student"]["lastname"], "Dela Cruz");

    let response = app
        .oneshot(post_json(&format!("/api/events/{event_id}/scan"), &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let second = read_json(response).await;
    assert_eq!(second["success"], false);
    assert_eq!(second["data"]["severity"], "warning");
    assert_eq!(second["message"], "Student already attended this event.");
}

#[tokio::test]
async fn same_student_may_be_recorded_for_different_events() {
    let app = make_test_app().await;

    let student = register_student(&app, "Reyes", "Jose", "BSCS", "3A").await;
    let orientation = create_event(&app, "Orientation").await;
    let sports_fest = create_event(&app, "Sports Fest").await;
    let payload = qr_payload(&app, &student).await;

    for event_id in [orientation, sports_fest] {
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
}

#[tokio::test]
async fn malformed_payload_is_a_bad_request() {
    let app = make_test_app().await;
    let event_id = create_event(&app, "Orientation").await;

    let response = app
        .oneshot(post_json(
            &format!("/api/events/{event_id}/scan"),
            &json!({ "payload": "not even json" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["data"]["severity"], "error");
    assert_eq!(json["message"], "Invalid QR code format.");
}

#[tokio::test]
async fn payload_for_unregistered_student_is_not_found() {
    let app = make_test_app().await;
    let event_id = create_event(&app, "Orientation").await;

    let payload = json!({ "id": "no-such-id" }).to_string();
    let response = app
        .oneshot(post_json(
            &format!("/api/events/{event_id}/scan"),
            &json!({ "payload": payload }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = read_json(response).await;
    assert_eq!(json["message"], "Student not found.");
}

#[tokio::test]
async fn scanning_against_an_unknown_event_is_not_found() {
    let app = make_test_app().await;

    let student = register_student(&app, "Santos", "Maria", "BSIT", "1A").await;
    let payload = qr_payload(&app, &student).await;

    let response = app
        .oneshot(post_json(
            "/api/events/424242/scan",
            &json!({ "payload": payload }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = read_json(response).await;
    assert_eq!(json["message"], "Event not found.");
}
