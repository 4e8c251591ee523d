//! Request and response bodies shared by the event routes.

use serde::{Deserialize, Serialize};

use db::models::event::Model as EventModel;

use crate::routes::students::common::StudentResponse;

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

impl From<EventModel> for EventResponse {
    fn from(event: EventModel) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            created_at: event.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub payload: String,
}

/// One row of an event's attendance report.
#[derive(Debug, Serialize)]
pub struct AttendanceRow {
    pub student: StudentResponse,
    pub recorded_at: String,
}
