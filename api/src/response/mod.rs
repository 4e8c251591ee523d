//! Standardized API response wrapper.
//!
//! Every route responds with the same envelope so clients can branch on
//! `success` before looking at `data`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Successful response carrying `data`.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Failed response that still carries a payload, e.g. scan feedback for
    /// a rejected scan.
    pub fn failure(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data,
            message: message.into(),
        }
    }
}

impl<T> ApiResponse<T>
where
    T: Serialize + Default,
{
    /// Failed response with an empty payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}
