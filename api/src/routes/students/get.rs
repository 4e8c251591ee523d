//! GET handlers for the student routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

use db::models::student::Model as StudentModel;

use crate::response::ApiResponse;
use crate::state::AppState;

use super::common::{QrCodeResponse, StudentResponse};

/// GET /api/students/{student_id}/code
///
/// Returns the canonical QR payload for a student. The payload is derived
/// from the stored row on every request, so it always reflects the current
/// identity fields.
pub async fn get_student_code(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> impl IntoResponse {
    match StudentModel::find_by_id(state.db(), &student_id).await {
        Ok(Some(student)) => {
            let payload = scan::codec::encode(&student.to_identity());
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    Some(QrCodeResponse {
                        payload,
                        student: StudentResponse::from(student),
                    }),
                    "QR payload generated",
                )),
            )
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<QrCodeResponse>>::error(
                "Student not found.",
            )),
        ),
        Err(err) => {
            error!("Failed to load student {student_id}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to load student")),
            )
        }
    }
}
