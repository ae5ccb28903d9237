//! Error types used throughout the client suite

use thiserror::Error;

use crate::constants::FALLBACK_STATUS;

/// Main error type for Braingate client operations
///
/// The gateway folds every one of these into a failure envelope at its
/// boundary; constructors and data-source ports surface them directly.
#[derive(Error, Debug, Clone)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Best known transport status for this error.
    ///
    /// Upstream failures carry the real status; everything that never
    /// produced a response maps to the fixed fallback code.
    pub fn status(&self) -> u16 {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::Network(_) | Self::Timeout(_) | Self::Decode(_) | Self::Config(_) => {
                FALLBACK_STATUS
            }
        }
    }

    /// Message suitable for the envelope `error` field.
    ///
    /// Upstream errors yield the extracted backend message alone, so a
    /// `404` with body `{"detail": "not found"}` surfaces as `"not found"`.
    pub fn message(&self) -> String {
        match self {
            Self::Upstream { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for Braingate operations
pub type Result<T> = std::result::Result<T, ClientError>;
