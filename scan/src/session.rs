//! Scan session controller.
//!
//! One `ScanSession` per scanning device. The camera feeds a continuous
//! stream of decode attempts; the session runs each decoded payload through
//! the submission pipeline and enforces a short cooldown after a successful
//! record so the per-frame decode loop cannot double-submit the same code.

use std::sync::Arc;
use std::time::Duration;

use futures::{Stream, StreamExt};
use tokio::time::Instant;

use crate::codec::{self, StudentIdentity};
use crate::feedback::{self, Feedback};
use crate::ledger::{Ledger, LedgerError};

/// Cooldown applied after a successful scan.
pub const DEFAULT_LOCK_WINDOW: Duration = Duration::from_secs(2);

/// One frame callback from the camera decoder. `NothingFound` is the normal
/// case for frames without a readable code, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeAttempt {
    Found(String),
    NothingFound,
}

/// Result of one trip through the submission pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Attendance newly recorded for this (student, event) pair.
    Recorded(StudentIdentity),
    /// A record for the pair already existed.
    AlreadyRecorded(StudentIdentity),
    /// The payload's id did not resolve to a registered student.
    UnknownStudent,
    /// The payload was not a decodable identity.
    InvalidPayload,
    /// No event is selected on this session.
    NeedsEvent,
    /// The store was unreachable or rejected the operation.
    StoreError,
}

/// Observable session states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No event chosen yet; every submission yields `NeedsEvent`.
    AwaitingEventSelection,
    /// Camera live, decodes accepted.
    Idle,
    /// Cooling down after a success; decodes ignored until the deadline.
    Locked,
}

/// Runs one decoded payload through the submission pipeline.
///
/// Shared between [`ScanSession`] and the HTTP scan endpoint, which has no
/// per-device lock. The event selection is read at call time, so a selection
/// made between decode and submission is always honored.
pub async fn submit_scan<L>(ledger: &L, event_id: Option<i64>, raw: &str) -> ScanOutcome
where
    L: Ledger + ?Sized,
{
    let Some(event_id) = event_id else {
        return ScanOutcome::NeedsEvent;
    };

    let student_id = match codec::decode(raw) {
        Ok(id) => id,
        Err(_) => return ScanOutcome::InvalidPayload,
    };

    let student = match ledger.find_student(&student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => return ScanOutcome::UnknownStudent,
        Err(err) => return store_error(err),
    };

    // Fast-path duplicate check for immediate feedback; correctness is
    // carried by the conditional insert below.
    match ledger.has_attended(&student_id, event_id).await {
        Ok(true) => return ScanOutcome::AlreadyRecorded(student),
        Ok(false) => {}
        Err(err) => return store_error(err),
    }

    match ledger.record_attendance(&student_id, event_id).await {
        Ok(_) => ScanOutcome::Recorded(student),
        Err(LedgerError::Duplicate) => ScanOutcome::AlreadyRecorded(student),
        Err(LedgerError::UnknownStudent) => ScanOutcome::UnknownStudent,
        Err(err) => store_error(err),
    }
}

fn store_error(err: LedgerError) -> ScanOutcome {
    tracing::error!(error = %err, "attendance store unavailable during scan");
    ScanOutcome::StoreError
}

/// Single active scanning session for one device.
///
/// Holds the current event selection and the lock deadline explicitly, so
/// tests can drive it with an injected fake ledger and paused time.
pub struct ScanSession<L: Ledger + ?Sized> {
    ledger: Arc<L>,
    event_id: Option<i64>,
    lock_window: Duration,
    locked_until: Option<Instant>,
}

impl<L: Ledger + ?Sized> ScanSession<L> {
    pub fn new(ledger: Arc<L>) -> Self {
        Self::with_lock_window(ledger, DEFAULT_LOCK_WINDOW)
    }

    pub fn with_lock_window(ledger: Arc<L>, lock_window: Duration) -> Self {
        Self {
            ledger,
            event_id: None,
            lock_window,
            locked_until: None,
        }
    }

    /// Points the session at an event. Allowed in any state; the next
    /// submission reads the latest selection.
    pub fn select_event(&mut self, event_id: i64) {
        self.event_id = Some(event_id);
    }

    pub fn selected_event(&self) -> Option<i64> {
        self.event_id
    }

    /// Current state. The lock is a deadline, not a timer task: it expires
    /// by itself and rapid successes simply move the deadline, so unlock
    /// timers never stack.
    pub fn state(&self) -> SessionState {
        if let Some(deadline) = self.locked_until {
            if Instant::now() < deadline {
                return SessionState::Locked;
            }
        }
        if self.event_id.is_none() {
            return SessionState::AwaitingEventSelection;
        }
        SessionState::Idle
    }

    /// Feeds one camera frame result through the session.
    ///
    /// Returns `None` when nothing was submitted: empty frames, and decodes
    /// that arrive while the session is locked. Only a successful record
    /// locks the session; every failure leaves it ready for an immediate
    /// retry so one misread can never block the queue behind it.
    pub async fn handle_decode(&mut self, attempt: DecodeAttempt) -> Option<ScanOutcome> {
        let DecodeAttempt::Found(raw) = attempt else {
            return None;
        };
        if matches!(self.state(), SessionState::Locked) {
            return None;
        }

        let outcome = submit_scan(self.ledger.as_ref(), self.event_id, &raw).await;
        if matches!(outcome, ScanOutcome::Recorded(_)) {
            self.locked_until = Some(Instant::now() + self.lock_window);
        }
        Some(outcome)
    }

    /// Drives the session from a camera decode stream until the stream ends.
    ///
    /// The stream is infinite in production and not restartable; session
    /// teardown is simply dropping it, which releases the camera. Feedback
    /// for each submission is pushed through `on_feedback`; the loop never
    /// stops on a failed scan.
    pub async fn run<S, F>(&mut self, frames: S, mut on_feedback: F)
    where
        S: Stream<Item = DecodeAttempt>,
        F: FnMut(Feedback),
    {
        tokio::pin!(frames);
        while let Some(attempt) = frames.next().await {
            if let Some(outcome) = self.handle_decode(attempt).await {
                on_feedback(feedback::present(&outcome));
            }
        }
    }
}
