//! Typed clients, one per backend resource family
//!
//! Each method is a single round trip through the shared
//! [`GatewayClient`](crate::GatewayClient): build a path, serialize a
//! query or body, return the envelope unchanged. No validation, no
//! caching, no retries, no aggregation across calls - interpreting the
//! envelope is the caller's job.

pub mod agents;
pub mod billing;
pub mod byok;
pub mod cms;
pub mod connectors;
pub mod crm;
pub mod domains;
pub mod ecommerce;

pub use agents::AgentsClient;
pub use billing::BillingClient;
pub use byok::ByokClient;
pub use cms::CmsClient;
pub use connectors::ConnectorsClient;
pub use crm::CrmClient;
pub use domains::DomainsClient;
pub use ecommerce::EcommerceClient;
