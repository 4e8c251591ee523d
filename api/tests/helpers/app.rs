use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use api::routes::routes;
use api::state::AppState;

/// Builds a fresh app over a private in-memory database, fully migrated.
/// Each test gets its own; no shared state between tests.
pub async fn make_test_app() -> Router {
    let db = db::test_utils::setup_test_db().await;
    let state = AppState::new(db);
    Router::new().nest("/api", routes(state))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<axum::body::Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Registers a student through the API and returns its id.
pub async fn register_student(
    app: &Router,
    lastname: &str,
    firstname: &str,
    course: &str,
    year_section: &str,
) -> String {
    let body = serde_json::json!({
        "lastname": lastname,
        "firstname": firstname,
        "course": course,
        "year_section": year_section,
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/students", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    json["data"]["id"].as_str().unwrap().to_owned()
}

/// Creates an event through the API and returns its id.
pub async fn create_event(app: &Router, name: &str) -> i64 {
    let body = serde_json::json!({ "name": name });
    let response = app
        .clone()
        .oneshot(post_json("/api/events", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}

/// Fetches the canonical QR payload for a student through the API.
pub async fn qr_payload(app: &Router, student_id: &str) -> String {
    let response = app
        .clone()
        .oneshot(get(&format!("/api/students/{student_id}/code")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    json["data"]["payload"].as_str().unwrap().to_owned()
}
