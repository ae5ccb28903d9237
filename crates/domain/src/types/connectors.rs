//! Connector records: third-party integration state and health

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An available third-party integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connector {
    /// Stable identifier used in paths, e.g. "stripe" or "hubspot".
    pub slug: String,
    pub name: String,
    pub category: Option<String>,
    pub connected: bool,
    pub connected_at: Option<DateTime<Utc>>,
    /// Display label of the connected external account, when known.
    pub account_label: Option<String>,
}

/// Request body for establishing a connection
///
/// Which field applies depends on the connector: OAuth-based ones send
/// the callback code, key-based ones the key. The backend validates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectRequest {
    pub auth_code: Option<String>,
    pub api_key: Option<String>,
    pub settings: Option<serde_json::Value>,
}

/// A sync run accepted by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncJob {
    pub id: Uuid,
    pub connector: String,
    /// Backend-defined state, e.g. "queued", "running", "done".
    pub state: String,
    pub started_at: Option<DateTime<Utc>>,
}

/// Point-in-time health summary for one connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorHealth {
    pub slug: String,
    pub healthy: bool,
    pub latency_ms: Option<u32>,
    pub error_rate: Option<f64>,
    pub last_checked: DateTime<Utc>,
    pub message: Option<String>,
}
