//! BYOK client: stored third-party credentials
//!
//! Secrets travel in request bodies only; responses always come back
//! masked. Storage, encryption, and provider-side validation are the
//! backend's concern.

use braingate_domain::types::byok::{
    Credential, CredentialTest, NewCredential, RotateRequest,
};
use braingate_domain::ApiResponse;
use uuid::Uuid;

use crate::client::GatewayClient;

const BYOK_BASE: &str = "/api/brain/byok/credentials";

/// Typed client for the credential-management resource family
#[derive(Clone)]
pub struct ByokClient {
    gateway: GatewayClient,
}

impl ByokClient {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// List stored credentials, secrets masked.
    pub async fn list_credentials(&self) -> ApiResponse<Vec<Credential>> {
        self.gateway.get(BYOK_BASE).await
    }

    /// Store a new credential.
    pub async fn store_credential(&self, credential: &NewCredential) -> ApiResponse<Credential> {
        self.gateway.post(BYOK_BASE, credential).await
    }

    /// Run a connectivity test against the provider.
    pub async fn test_credential(&self, id: Uuid) -> ApiResponse<CredentialTest> {
        self.gateway.post_empty(&format!("{BYOK_BASE}/{id}/test")).await
    }

    /// Replace the secret in place, keeping the id stable.
    pub async fn rotate_credential(
        &self,
        id: Uuid,
        rotation: &RotateRequest,
    ) -> ApiResponse<Credential> {
        self.gateway.post(&format!("{BYOK_BASE}/{id}/rotate"), rotation).await
    }

    /// Delete a credential.
    pub async fn delete_credential(&self, id: Uuid) -> ApiResponse<()> {
        self.gateway.delete(&format!("{BYOK_BASE}/{id}")).await
    }
}
