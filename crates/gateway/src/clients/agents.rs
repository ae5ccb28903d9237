//! Agents client: configured agents and task dispatch

use braingate_domain::types::agents::{Agent, AgentTask, TaskRequest};
use braingate_domain::ApiResponse;
use uuid::Uuid;

use crate::client::GatewayClient;

const AGENTS_BASE: &str = "/api/brain/agents";

/// Typed client for the agents resource family
#[derive(Clone)]
pub struct AgentsClient {
    gateway: GatewayClient,
}

impl AgentsClient {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// List configured agents.
    pub async fn list_agents(&self) -> ApiResponse<Vec<Agent>> {
        self.gateway.get(AGENTS_BASE).await
    }

    /// Fetch one agent by id.
    pub async fn get_agent(&self, id: Uuid) -> ApiResponse<Agent> {
        self.gateway.get(&format!("{AGENTS_BASE}/{id}")).await
    }

    /// Dispatch work to an agent; returns the queued task.
    pub async fn dispatch_task(&self, request: &TaskRequest) -> ApiResponse<AgentTask> {
        self.gateway.post(&format!("{AGENTS_BASE}/tasks"), request).await
    }

    /// Fetch a dispatched task, including its current state and output.
    pub async fn get_task(&self, id: Uuid) -> ApiResponse<AgentTask> {
        self.gateway.get(&format!("{AGENTS_BASE}/tasks/{id}")).await
    }

    /// Ask the backend to cancel a task. Cancellation is best-effort;
    /// the returned task carries the state the backend settled on.
    pub async fn cancel_task(&self, id: Uuid) -> ApiResponse<AgentTask> {
        self.gateway.post_empty(&format!("{AGENTS_BASE}/tasks/{id}/cancel")).await
    }
}
