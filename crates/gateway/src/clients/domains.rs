//! Domains client: search, purchase, and DNS records

use braingate_domain::types::domains::{
    DnsRecord, DomainOffer, DomainPurchase, DomainSearch, RegisteredDomain,
};
use braingate_domain::ApiResponse;
use uuid::Uuid;

use crate::client::GatewayClient;
use crate::query::to_query;

const DOMAINS_BASE: &str = "/api/brain/domains";

/// Typed client for the domains resource family
#[derive(Clone)]
pub struct DomainsClient {
    gateway: GatewayClient,
}

impl DomainsClient {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// Search availability for a name across TLDs.
    pub async fn search(&self, search: &DomainSearch) -> ApiResponse<Vec<DomainOffer>> {
        let query = match to_query(search) {
            Ok(query) => query,
            Err(err) => return err.into(),
        };
        self.gateway.get(&format!("{DOMAINS_BASE}/search{query}")).await
    }

    /// Purchase a domain.
    pub async fn purchase(&self, purchase: &DomainPurchase) -> ApiResponse<RegisteredDomain> {
        self.gateway.post(&format!("{DOMAINS_BASE}/purchase"), purchase).await
    }

    /// List domains owned by the tenant.
    pub async fn list_domains(&self) -> ApiResponse<Vec<RegisteredDomain>> {
        self.gateway.get(DOMAINS_BASE).await
    }

    /// List DNS records for a domain.
    pub async fn list_dns_records(&self, domain: &str) -> ApiResponse<Vec<DnsRecord>> {
        self.gateway.get(&format!("{DOMAINS_BASE}/{domain}/dns")).await
    }

    /// Create or replace a DNS record. A record with no id is created;
    /// one with an id replaces that record.
    pub async fn upsert_dns_record(
        &self,
        domain: &str,
        record: &DnsRecord,
    ) -> ApiResponse<DnsRecord> {
        self.gateway.put(&format!("{DOMAINS_BASE}/{domain}/dns"), record).await
    }

    /// Delete a DNS record.
    pub async fn delete_dns_record(&self, domain: &str, record_id: Uuid) -> ApiResponse<()> {
        self.gateway.delete(&format!("{DOMAINS_BASE}/{domain}/dns/{record_id}")).await
    }
}
