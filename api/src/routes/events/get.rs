//! GET handlers for the event routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

use db::models::attendance_record;
use db::models::event::Model as EventModel;

use crate::response::ApiResponse;
use crate::routes::students::common::StudentResponse;
use crate::state::AppState;

use super::common::{AttendanceRow, EventResponse};

/// GET /api/events
///
/// All events, oldest first.
pub async fn list_events(State(state): State<AppState>) -> impl IntoResponse {
    match EventModel::list_all(state.db()).await {
        Ok(events) => {
            let events: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(Some(events), "Events retrieved")),
            )
        }
        Err(err) => {
            error!("Failed to list events: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Option<Vec<EventResponse>>>::error(
                    "Failed to list events",
                )),
            )
        }
    }
}

/// GET /api/events/{event_id}/attendance
///
/// The event's attendance report: every recorded student with their mark
/// time, sorted lastname then course then year/section.
pub async fn list_event_attendance(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> impl IntoResponse {
    match EventModel::find_by_id(state.db(), event_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Option<Vec<AttendanceRow>>>::error(
                    "Event not found.",
                )),
            );
        }
        Err(err) => {
            error!("Failed to load event {event_id}: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to load event")),
            );
        }
    }

    match attendance_record::Model::for_event(state.db(), event_id).await {
        Ok(rows) => {
            let rows: Vec<AttendanceRow> = rows
                .into_iter()
                .filter_map(|(record, student)| {
                    student.map(|s| AttendanceRow {
                        student: StudentResponse::from(s),
                        recorded_at: record.recorded_at.to_rfc3339(),
                    })
                })
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(Some(rows), "Attendance retrieved")),
            )
        }
        Err(err) => {
            error!("Failed to load attendance for event {event_id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to load attendance")),
            )
        }
    }
}
