//! Routes for events: creation, listing, attendance reports, and the scan
//! endpoint that records attendance from a decoded QR payload.

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::{list_event_attendance, list_events};
use post::{create_event, scan_event};

pub fn events_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/{event_id}/attendance", get(list_event_attendance))
        .route("/{event_id}/scan", post(scan_event))
}
