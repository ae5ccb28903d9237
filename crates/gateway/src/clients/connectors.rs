//! Connectors client: third-party integration lifecycle
//!
//! Connectors live under `/api/connectors/...` rather than the
//! `/api/brain/...` root the other families use.

use braingate_domain::types::connectors::{
    ConnectRequest, Connector, ConnectorHealth, SyncJob,
};
use braingate_domain::ApiResponse;

use crate::client::GatewayClient;

const CONNECTORS_BASE: &str = "/api/connectors";

/// Typed client for the connectors resource family
#[derive(Clone)]
pub struct ConnectorsClient {
    gateway: GatewayClient,
}

impl ConnectorsClient {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// List every available connector and its connection state.
    pub async fn list_connectors(&self) -> ApiResponse<Vec<Connector>> {
        self.gateway.get(CONNECTORS_BASE).await
    }

    /// Fetch one connector by slug.
    pub async fn get_connector(&self, slug: &str) -> ApiResponse<Connector> {
        self.gateway.get(&format!("{CONNECTORS_BASE}/{slug}")).await
    }

    /// Establish a connection with the given credentials.
    pub async fn connect(&self, slug: &str, request: &ConnectRequest) -> ApiResponse<Connector> {
        self.gateway.post(&format!("{CONNECTORS_BASE}/{slug}/connect"), request).await
    }

    /// Tear down an existing connection.
    pub async fn disconnect(&self, slug: &str) -> ApiResponse<Connector> {
        self.gateway.delete(&format!("{CONNECTORS_BASE}/{slug}/connection")).await
    }

    /// Kick off a sync run. The endpoint takes no payload but expects a
    /// JSON body, so an empty object is sent.
    pub async fn sync(&self, slug: &str) -> ApiResponse<SyncJob> {
        self.gateway.post_empty(&format!("{CONNECTORS_BASE}/{slug}/sync")).await
    }

    /// Point-in-time health summary for one connector.
    pub async fn health(&self, slug: &str) -> ApiResponse<ConnectorHealth> {
        self.gateway.get(&format!("{CONNECTORS_BASE}/{slug}/health")).await
    }

    /// Health summaries for every connector in one round trip.
    pub async fn health_summary(&self) -> ApiResponse<Vec<ConnectorHealth>> {
        self.gateway.get(&format!("{CONNECTORS_BASE}/health")).await
    }
}
