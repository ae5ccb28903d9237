//! Port interfaces for dashboard data
//!
//! These traits define the boundary between UI-facing data needs and
//! whatever supplies them. Two implementations exist per port: a live
//! one backed by the gateway (in `braingate-gateway`) and a fixture one
//! (in [`crate::fixtures`]) for demo deployments. Which one a given
//! deployment gets is decided once, from [`DataMode`]; the two are never
//! mixed within a deployment.

use async_trait::async_trait;
use braingate_domain::types::connectors::ConnectorHealth;
use braingate_domain::types::ecommerce::{Product, ProductFilter};
use braingate_domain::Result;

pub use braingate_domain::config::DataMode;

/// Supplies per-connector health summaries for the integrations panel
#[async_trait]
pub trait ConnectorHealthSource: Send + Sync {
    /// Health summaries for every known connector.
    async fn connector_health(&self) -> Result<Vec<ConnectorHealth>>;

    /// Health summary for a single connector by slug.
    async fn health_for(&self, slug: &str) -> Result<ConnectorHealth>;
}

/// Supplies the product catalog for storefront dashboards
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Products matching the filter.
    async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>>;
}
