//! POST handlers for student registration.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use db::models::student::Model as StudentModel;

use crate::response::ApiResponse;
use crate::state::AppState;

use super::common::{RegisterStudentRequest, StudentResponse};

/// POST /api/students
///
/// Register-or-login. Returns the existing student when the submitted
/// identity (names case-insensitive, course and section exact) already
/// exists, otherwise creates one with a fresh id.
///
/// An unknown course or year/section fails JSON deserialization and is
/// rejected by the extractor before this handler runs.
pub async fn register_student(
    State(state): State<AppState>,
    Json(req): Json<RegisterStudentRequest>,
) -> impl IntoResponse {
    if req.lastname.trim().is_empty() || req.firstname.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<StudentResponse>>::error(
                "Lastname and firstname are required",
            )),
        );
    }

    match StudentModel::upsert_by_identity(
        state.db(),
        &req.lastname,
        &req.firstname,
        req.course,
        req.year_section,
    )
    .await
    {
        Ok(student) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(StudentResponse::from(student)),
                "Student registered",
            )),
        ),
        Err(err) => {
            error!("Failed to register student: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to register student")),
            )
        }
    }
}
