//! DELETE handlers for the student routes.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::{error, info};

use db::models::student::Model as StudentModel;

use crate::response::ApiResponse;
use crate::state::AppState;

use super::common::PurgeResponse;

/// DELETE /api/students/unattended
///
/// Administrative cleanup: removes every student with no attendance record
/// for any event. Students who attended at least one event are retained.
pub async fn purge_unattended(State(state): State<AppState>) -> impl IntoResponse {
    match StudentModel::purge_never_attended(state.db()).await {
        Ok(removed) => {
            info!("Purged {removed} students without attendance");
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    PurgeResponse { removed },
                    "Unattended students removed",
                )),
            )
        }
        Err(err) => {
            error!("Failed to purge unattended students: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<PurgeResponse>::error(
                    "Failed to purge unattended students",
                )),
            )
        }
    }
}
