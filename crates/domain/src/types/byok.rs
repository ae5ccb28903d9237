//! BYOK records: stored third-party credentials
//!
//! Secrets flow one way: they appear in requests, never in responses.
//! Stored credentials come back masked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored third-party credential, secret masked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub id: Uuid,
    /// Provider the key belongs to, e.g. "openai", "stripe".
    pub provider: String,
    pub label: String,
    /// Last characters of the secret for display, e.g. "...k3Jq".
    pub masked_hint: String,
    /// Backend-defined state, e.g. "active", "invalid", "revoked".
    pub status: String,
    pub last_tested_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub rotated_at: Option<DateTime<Utc>>,
}

/// Request body for storing a new credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCredential {
    pub provider: String,
    pub label: String,
    pub secret: String,
}

/// Request body for rotating a credential in place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotateRequest {
    pub secret: String,
}

/// Result of a connectivity test against the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialTest {
    pub credential_id: Uuid,
    pub ok: bool,
    pub message: Option<String>,
    pub tested_at: DateTime<Utc>,
}
