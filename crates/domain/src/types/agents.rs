//! Agent records: configured agents and dispatched tasks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A configured backend agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    pub name: String,
    /// Backend-defined kind, e.g. "content", "outreach".
    pub kind: String,
    pub enabled: bool,
    pub description: Option<String>,
}

/// Request body for dispatching work to an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRequest {
    pub agent_id: Uuid,
    /// Free-form task input; the agent's contract is backend-defined.
    pub input: serde_json::Value,
    pub priority: Option<String>,
}

/// A dispatched agent task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentTask {
    pub id: Uuid,
    pub agent_id: Uuid,
    /// Backend-defined state, e.g. "queued", "running", "succeeded",
    /// "failed", "cancelled".
    pub state: String,
    pub output: Option<serde_json::Value>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}
