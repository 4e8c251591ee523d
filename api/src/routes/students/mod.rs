//! Routes for student registration, QR payload retrieval, and cleanup.

use axum::{
    Router, routing,
    routing::{get, post},
};

use crate::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;

use delete::purge_unattended;
use get::get_student_code;
use post::register_student;

pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register_student))
        .route("/{student_id}/code", get(get_student_code))
        .route("/unattended", routing::delete(purge_unattended))
}
