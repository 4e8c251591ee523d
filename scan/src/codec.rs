//! QR identity payload codec.
//!
//! A student's QR code carries a small JSON object with their id and display
//! fields. Only the `id` field matters for attendance; everything else is a
//! display hint for the host's screen. Encoding is deterministic so the same
//! student always renders the same code.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Why a scanned payload could not be turned into a student id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Not a JSON object, or the `id` field is not a string.
    #[error("payload is not a valid identity object")]
    Malformed,
    /// The `id` field is absent, null, or empty after trimming.
    #[error("payload has no student id")]
    MissingId,
}

/// Identity fields baked into a student's QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentIdentity {
    pub id: String,
    pub lastname: String,
    pub firstname: String,
    pub course: String,
    pub year_section: String,
}

/// Serializes an identity into the QR payload text.
pub fn encode(identity: &StudentIdentity) -> String {
    serde_json::json!({
        "id": identity.id,
        "lastname": identity.lastname,
        "firstname": identity.firstname,
        "course": identity.course,
        "year_section": identity.year_section,
    })
    .to_string()
}

/// Parses scanned text and extracts the student id.
///
/// Total over arbitrary input: camera misreads and foreign QR codes come
/// back as `DecodeError`, never a panic.
pub fn decode(raw: &str) -> Result<String, DecodeError> {
    let value: Value = serde_json::from_str(raw).map_err(|_| DecodeError::Malformed)?;
    let obj = value.as_object().ok_or(DecodeError::Malformed)?;

    match obj.get("id") {
        None | Some(Value::Null) => Err(DecodeError::MissingId),
        Some(Value::String(s)) => {
            let id = s.trim();
            if id.is_empty() {
                Err(DecodeError::MissingId)
            } else {
                Ok(id.to_owned())
            }
        }
        Some(_) => Err(DecodeError::Malformed),
    }
}
