//! The response envelope returned by every gateway call
//!
//! Every verb on the gateway client resolves to an [`ApiResponse`],
//! never an `Err`: transport failures, non-2xx statuses, and decode
//! failures are all normalized into the `error`/`status` fields. The
//! caller must check `error` before trusting `data`.

use crate::errors::ClientError;

/// Outcome of a single gateway call.
///
/// Exactly one of `data` / `error` is populated. The constructors are the
/// only way to build one, so the dual-populated state cannot occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// Decoded payload; present only on success.
    pub data: Option<T>,
    /// Human-readable failure message; present only on failure.
    pub error: Option<String>,
    /// Upstream HTTP status, or the fixed fallback code when no response
    /// was received.
    pub status: u16,
}

impl<T> ApiResponse<T> {
    /// Successful outcome carrying a decoded payload.
    pub fn success(data: T, status: u16) -> Self {
        Self { data: Some(data), error: None, status }
    }

    /// Failed outcome carrying a message and the best known status.
    pub fn failure(message: impl Into<String>, status: u16) -> Self {
        Self { data: None, error: Some(message.into()), status }
    }

    /// Whether the call succeeded (`data` populated, `error` absent).
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a `Result` for callers that prefer `?` over field
    /// inspection.
    pub fn into_result(self) -> Result<T, ClientError> {
        match (self.data, self.error) {
            (Some(data), None) => Ok(data),
            (_, Some(message)) => {
                Err(ClientError::Upstream { status: self.status, message })
            }
            (None, None) => Err(ClientError::Decode(
                "envelope carried neither data nor error".to_string(),
            )),
        }
    }
}

impl<T> From<ClientError> for ApiResponse<T> {
    fn from(err: ClientError) -> Self {
        Self::failure(err.message(), err.status())
    }
}
