//! CRM client: contacts and deals

use braingate_domain::types::crm::{
    Contact, ContactFilter, ContactPatch, Deal, DealFilter, NewContact, NewDeal,
};
use braingate_domain::ApiResponse;
use uuid::Uuid;

use crate::client::GatewayClient;
use crate::query::to_query;

const CRM_BASE: &str = "/api/brain/crm";

/// Typed client for the CRM resource family
#[derive(Clone)]
pub struct CrmClient {
    gateway: GatewayClient,
}

impl CrmClient {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// List contacts matching the filter.
    pub async fn list_contacts(&self, filter: &ContactFilter) -> ApiResponse<Vec<Contact>> {
        let query = match to_query(filter) {
            Ok(query) => query,
            Err(err) => return err.into(),
        };
        self.gateway.get(&format!("{CRM_BASE}/contacts{query}")).await
    }

    /// Fetch one contact by id.
    pub async fn get_contact(&self, id: Uuid) -> ApiResponse<Contact> {
        self.gateway.get(&format!("{CRM_BASE}/contacts/{id}")).await
    }

    /// Create a contact.
    pub async fn create_contact(&self, contact: &NewContact) -> ApiResponse<Contact> {
        self.gateway.post(&format!("{CRM_BASE}/contacts"), contact).await
    }

    /// Apply a partial update; absent fields are left untouched.
    pub async fn update_contact(&self, id: Uuid, patch: &ContactPatch) -> ApiResponse<Contact> {
        self.gateway.patch(&format!("{CRM_BASE}/contacts/{id}"), patch).await
    }

    /// Delete a contact.
    pub async fn delete_contact(&self, id: Uuid) -> ApiResponse<()> {
        self.gateway.delete(&format!("{CRM_BASE}/contacts/{id}")).await
    }

    /// List deals matching the filter.
    pub async fn list_deals(&self, filter: &DealFilter) -> ApiResponse<Vec<Deal>> {
        let query = match to_query(filter) {
            Ok(query) => query,
            Err(err) => return err.into(),
        };
        self.gateway.get(&format!("{CRM_BASE}/deals{query}")).await
    }

    /// Create a deal.
    pub async fn create_deal(&self, deal: &NewDeal) -> ApiResponse<Deal> {
        self.gateway.post(&format!("{CRM_BASE}/deals"), deal).await
    }
}
