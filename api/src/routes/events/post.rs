//! POST handlers for the event routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

use db::ledger::SqlLedger;
use db::models::event::Model as EventModel;
use scan::feedback::{self, Feedback, Severity};
use scan::session::{ScanOutcome, submit_scan};

use crate::response::ApiResponse;
use crate::state::AppState;

use super::common::{CreateEventRequest, EventResponse, ScanRequest};

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> impl IntoResponse {
    if req.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<EventResponse>>::error(
                "Event name is required",
            )),
        );
    }

    match EventModel::create(state.db(), req.name.trim()).await {
        Ok(event) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(EventResponse::from(event)),
                "Event created",
            )),
        ),
        Err(err) => {
            error!("Failed to create event: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to create event")),
            )
        }
    }
}

/// POST /api/events/{event_id}/scan
///
/// Submits one decoded QR payload against the event's ledger. The scan
/// pipeline decides the outcome; this handler only translates it into an
/// HTTP status plus the feedback the scanning host should display.
pub async fn scan_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(req): Json<ScanRequest>,
) -> impl IntoResponse {
    match EventModel::find_by_id(state.db(), event_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            let fb = Feedback {
                severity: Severity::Error,
                message: "Event not found.".into(),
                student: None,
            };
            return (StatusCode::NOT_FOUND, feedback_json(fb, false));
        }
        Err(err) => {
            error!("Failed to load event {event_id}: {err}");
            let fb = feedback::present(&ScanOutcome::StoreError);
            return (StatusCode::INTERNAL_SERVER_ERROR, feedback_json(fb, false));
        }
    }

    let ledger = SqlLedger::new(state.db_clone());
    let outcome = submit_scan(&ledger, Some(event_id), &req.payload).await;
    let fb = feedback::present(&outcome);

    let status = match outcome {
        ScanOutcome::Recorded(_) => StatusCode::OK,
        ScanOutcome::AlreadyRecorded(_) => StatusCode::CONFLICT,
        ScanOutcome::InvalidPayload | ScanOutcome::NeedsEvent => StatusCode::BAD_REQUEST,
        ScanOutcome::UnknownStudent => StatusCode::NOT_FOUND,
        ScanOutcome::StoreError => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let success = status == StatusCode::OK;

    (status, feedback_json(fb, success))
}

fn feedback_json(fb: Feedback, success: bool) -> Json<ApiResponse<Feedback>> {
    let message = fb.message.clone();
    if success {
        Json(ApiResponse::success(fb, message))
    } else {
        Json(ApiResponse::failure(fb, message))
    }
}
