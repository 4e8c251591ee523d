//! Scan-and-dedupe attendance core.
//!
//! Everything the scanning flow needs that is not HTTP or SQL lives here:
//! the QR identity codec, the `Ledger` contract the controller records
//! through, the scan session state machine, and the feedback presenter.
//! The crate has no database dependency so the controller can be unit
//! tested against an in-memory fake ledger.

pub mod codec;
pub mod feedback;
pub mod ledger;
pub mod session;

pub use codec::{DecodeError, StudentIdentity};
pub use feedback::{Feedback, Severity};
pub use ledger::{Ledger, LedgerError, RecordedAttendance};
pub use session::{DecodeAttempt, ScanOutcome, ScanSession, SessionState, submit_scan};
