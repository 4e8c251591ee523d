//! Attendance ledger contract.
//!
//! The scan session controller never touches the store directly; it records
//! through this trait. The SQL-backed implementation lives in the `db` crate,
//! tests inject an in-memory fake.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::codec::StudentIdentity;

/// Ledger failure taxonomy. All variants are recovered at the pipeline
/// boundary into scan feedback; none are fatal to the decode loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The scanned student id does not resolve to a registered student.
    #[error("student not found")]
    UnknownStudent,
    /// An attendance record already exists for this (student, event) pair.
    ///
    /// Raised either by the fast-path existence check or by the store's
    /// uniqueness constraint rejecting a losing concurrent insert.
    #[error("attendance already recorded")]
    Duplicate,
    /// Transport or store failure. The only variant worth operator logs.
    #[error("attendance store unavailable: {0}")]
    Unavailable(String),
}

/// Proof of a successful conditional insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedAttendance {
    pub student_id: String,
    pub event_id: i64,
    pub recorded_at: DateTime<Utc>,
}

/// Read/write access to student and attendance records.
///
/// `record_attendance` must be conditional at the store: a second insert for
/// the same (student, event) pair fails with [`LedgerError::Duplicate`]
/// rather than creating a second row, even across concurrent scanners.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Resolves a student id to its display snapshot.
    async fn find_student(
        &self,
        student_id: &str,
    ) -> Result<Option<StudentIdentity>, LedgerError>;

    /// Fast-path existence check. Inherently racy across devices; callers
    /// must still be prepared for `Duplicate` from `record_attendance`.
    async fn has_attended(&self, student_id: &str, event_id: i64) -> Result<bool, LedgerError>;

    /// Inserts the attendance record if and only if none exists for the pair.
    async fn record_attendance(
        &self,
        student_id: &str,
        event_id: i64,
    ) -> Result<RecordedAttendance, LedgerError>;
}
