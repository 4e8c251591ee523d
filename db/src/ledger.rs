//! SQL-backed implementation of the scan core's `Ledger` contract.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use scan::{Ledger, LedgerError, RecordedAttendance, StudentIdentity};

use crate::models::{attendance_record, student};

/// Attendance ledger over the shared relational store.
///
/// Owns all reads and writes of `attendance_records` on behalf of the scan
/// session controller. Duplicate detection is delegated to the composite
/// primary key; the pre-check in the pipeline is only a fast path.
#[derive(Clone)]
pub struct SqlLedger {
    db: DatabaseConnection,
}

impl SqlLedger {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

fn unavailable(err: DbErr) -> LedgerError {
    LedgerError::Unavailable(err.to_string())
}

#[async_trait]
impl Ledger for SqlLedger {
    async fn find_student(
        &self,
        student_id: &str,
    ) -> Result<Option<StudentIdentity>, LedgerError> {
        let found = student::Model::find_by_id(&self.db, student_id)
            .await
            .map_err(unavailable)?;
        Ok(found.map(|s| s.to_identity()))
    }

    async fn has_attended(&self, student_id: &str, event_id: i64) -> Result<bool, LedgerError> {
        attendance_record::Model::exists(&self.db, student_id, event_id)
            .await
            .map_err(unavailable)
    }

    async fn record_attendance(
        &self,
        student_id: &str,
        event_id: i64,
    ) -> Result<RecordedAttendance, LedgerError> {
        if student::Model::find_by_id(&self.db, student_id)
            .await
            .map_err(unavailable)?
            .is_none()
        {
            return Err(LedgerError::UnknownStudent);
        }

        match attendance_record::Model::mark(&self.db, student_id, event_id, Utc::now()).await {
            Ok(rec) => Ok(RecordedAttendance {
                student_id: rec.student_id,
                event_id: rec.event_id,
                recorded_at: rec.recorded_at,
            }),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(LedgerError::Duplicate),
                _ => Err(unavailable(err)),
            },
        }
    }
}
