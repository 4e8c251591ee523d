//! Request and response bodies shared by the student routes.

use serde::{Deserialize, Serialize};

use db::models::student::{Course, Model as StudentModel, YearSection};

#[derive(Debug, Deserialize)]
pub struct RegisterStudentRequest {
    pub lastname: String,
    pub firstname: String,
    pub course: Course,
    pub year_section: YearSection,
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: String,
    pub lastname: String,
    pub firstname: String,
    pub course: String,
    pub year_section: String,
    pub created_at: String,
}

impl From<StudentModel> for StudentResponse {
    fn from(student: StudentModel) -> Self {
        Self {
            id: student.id.clone(),
            lastname: student.lastname.clone(),
            firstname: student.firstname.clone(),
            course: student.course.to_string(),
            year_section: student.year_section.to_string(),
            created_at: student.created_at.to_rfc3339(),
        }
    }
}

/// A student's QR payload together with the identity it encodes.
#[derive(Debug, Serialize)]
pub struct QrCodeResponse {
    pub payload: String,
    pub student: StudentResponse,
}

#[derive(Debug, Default, Serialize)]
pub struct PurgeResponse {
    pub removed: u64,
}
