use axum::http::StatusCode;
use tower::ServiceExt;

use crate::helpers::app::{get, make_test_app, read_json};

#[tokio::test]
async fn health_check_returns_ok_json() {
    let app = make_test_app().await;

    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Service is up");
}
