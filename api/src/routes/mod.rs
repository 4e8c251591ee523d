//! Root router. Nests each resource module under its path prefix and
//! attaches the shared application state.

use axum::Router;

use crate::state::AppState;

pub mod events;
pub mod health;
pub mod students;

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .nest("/students", students::students_routes())
        .nest("/events", events::events_routes())
        .with_state(app_state)
}
