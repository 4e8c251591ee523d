//! Maps pipeline outcomes to user-visible feedback.

use serde::Serialize;

use crate::codec::StudentIdentity;
use crate::session::ScanOutcome;

/// How a feedback popup should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// What the scanning host sees after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub severity: Severity,
    pub message: String,
    /// Present when the scanned student resolved, so the host can confirm
    /// the person in front of them.
    pub student: Option<StudentIdentity>,
}

/// Pure, total mapping from outcome to presentation. No side effects.
pub fn present(outcome: &ScanOutcome) -> Feedback {
    match outcome {
        ScanOutcome::Recorded(student) => Feedback {
            severity: Severity::Success,
            message: "Attendance successfully recorded.".into(),
            student: Some(student.clone()),
        },
        ScanOutcome::AlreadyRecorded(student) => Feedback {
            severity: Severity::Warning,
            message: "Student already attended this event.".into(),
            student: Some(student.clone()),
        },
        ScanOutcome::UnknownStudent => Feedback {
            severity: Severity::Error,
            message: "Student not found.".into(),
            student: None,
        },
        ScanOutcome::InvalidPayload => Feedback {
            severity: Severity::Error,
            message: "Invalid QR code format.".into(),
            student: None,
        },
        ScanOutcome::NeedsEvent => Feedback {
            severity: Severity::Error,
            message: "Please select an event first.".into(),
            student: None,
        },
        ScanOutcome::StoreError => Feedback {
            severity: Severity::Error,
            message: "Failed to record attendance.".into(),
            student: None,
        },
    }
}
