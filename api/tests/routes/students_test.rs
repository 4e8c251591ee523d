use axum::http::StatusCode;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::helpers::app::{
    create_event, delete, get, make_test_app, post_json, qr_payload, read_json, register_student,
};

#[tokio::test]
async fn registering_twice_returns_the_same_student() {
    let app = make_test_app().await;

    let first = register_student(&app, "Dela Cruz", "Ana", "BSIT", "2B").await;

    // Same identity with different casing logs in rather than duplicating.
    let body = json!({
        "lastname": "DELA CRUZ",
        "firstname": "ana",
        "course": "BSIT",
        "year_section": "2B",
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/students", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["id"], Value::String(first));
}

#[tokio::test]
async fn registration_rejects_blank_names() {
    let app = make_test_app().await;

    let body = json!({
        "lastname": "   ",
        "firstname": "Ana",
        "course": "BSIT",
        "year_section": "2B",
    });
    let response = app
        .oneshot(post_json("/api/students", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn registration_rejects_unknown_course_codes() {
    let app = make_test_app().await;

    let body = json!({
        "lastname": "Dela Cruz",
        "firstname": "Ana",
        "course": "BSXX",
        "year_section": "2B",
    });
    let response = app
        .oneshot(post_json("/api/students", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn qr_payload_carries_the_stored_identity() {
    let app = make_test_app().await;

    let id = register_student(&app, "Reyes", "Jose", "BET-MET-AUTO", "3C").await;
    let payload = qr_payload(&app, &id).await;

    let decoded: Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(decoded["id"], Value::String(id));
    assert_eq!(decoded["lastname"], "Reyes");
    assert_eq!(decoded["course"], "BET-MET-AUTO");
    assert_eq!(decoded["year_section"], "3C");
}

#[tokio::test]
async fn qr_payload_for_missing_student_is_not_found() {
    let app = make_test_app().await;

    let response = app
        .oneshot(get("/api/students/no-such-id/code"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = read_json(response).await;
    assert_eq!(json["message"], "Student not found.");
}

#[tokio::test]
async fn purge_removes_only_students_who_never_attended() {
    let app = make_test_app().await;

    let attendee = register_student(&app, "Santos", "Maria", "BSIT", "1A").await;
    let ghost = register_student(&app, "Cruz", "Juan", "BAT", "1B").await;
    let event_id = create_event(&app, "Orientation").await;

    let payload = qr_payload(&app, &attendee).await;
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/events/{event_id}/scan"),
            &json!({ "payload": payload }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(delete("/api/students/unattended"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["data"]["removed"], 1);

    // The attendee survives; the ghost is gone.
    let kept = app
        .clone()
        .oneshot(get(&format!("/api/students/{attendee}/code")))
        .await
        .unwrap();
    assert_eq!(kept.status(), StatusCode::OK);

    let gone = app
        .oneshot(get(&format!("/api/students/{ghost}/code")))
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}
