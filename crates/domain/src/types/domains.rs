//! Domain-registration records: search, purchase, and DNS

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query filter for domain availability search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainSearch {
    pub query: Option<String>,
    /// Restrict results to these TLDs, e.g. `["com", "io"]`.
    pub tlds: Option<Vec<String>>,
    pub limit: Option<u32>,
}

/// One availability result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainOffer {
    pub name: String,
    pub available: bool,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    #[serde(default)]
    pub premium: bool,
}

/// Request body for purchasing a domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainPurchase {
    pub name: String,
    pub years: u32,
    pub auto_renew: bool,
    pub contact_id: Option<Uuid>,
}

/// A domain owned by the tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredDomain {
    pub id: Uuid,
    pub name: String,
    pub status: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub auto_renew: bool,
}

/// A DNS record on a registered domain
///
/// `id` is absent on create; the backend assigns one and returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: Option<Uuid>,
    /// Record type, e.g. "A", "CNAME", "TXT", "MX".
    pub record_type: String,
    pub name: String,
    pub value: String,
    pub ttl: Option<u32>,
    pub priority: Option<u16>,
}
