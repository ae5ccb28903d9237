//! Live implementations of the core data-source ports
//!
//! A deployment gets either these (backed by the gateway) or the
//! fixture sources from `braingate-core`, chosen once from
//! [`DataMode`]; the two are never mixed.

use std::sync::Arc;

use async_trait::async_trait;
use braingate_core::datasource::{CatalogSource, ConnectorHealthSource, DataMode};
use braingate_core::fixtures::{FixtureCatalogSource, FixtureHealthSource};
use braingate_domain::types::connectors::ConnectorHealth;
use braingate_domain::types::ecommerce::{Product, ProductFilter};
use braingate_domain::Result;

use crate::client::GatewayClient;
use crate::clients::{ConnectorsClient, EcommerceClient};

/// [`ConnectorHealthSource`] backed by the connectors client
///
/// This port is the one place an envelope is unwrapped: failures come
/// back through the port's `Result` instead of the `error` field.
pub struct LiveHealthSource {
    connectors: ConnectorsClient,
}

impl LiveHealthSource {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { connectors: ConnectorsClient::new(gateway) }
    }
}

#[async_trait]
impl ConnectorHealthSource for LiveHealthSource {
    async fn connector_health(&self) -> Result<Vec<ConnectorHealth>> {
        self.connectors.health_summary().await.into_result()
    }

    async fn health_for(&self, slug: &str) -> Result<ConnectorHealth> {
        self.connectors.health(slug).await.into_result()
    }
}

/// [`CatalogSource`] backed by the e-commerce client
pub struct LiveCatalogSource {
    ecommerce: EcommerceClient,
}

impl LiveCatalogSource {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { ecommerce: EcommerceClient::new(gateway) }
    }
}

#[async_trait]
impl CatalogSource for LiveCatalogSource {
    async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        self.ecommerce.list_products(filter).await.into_result()
    }
}

/// Pick the health source a deployment should use.
pub fn health_source(mode: DataMode, gateway: &GatewayClient) -> Arc<dyn ConnectorHealthSource> {
    match mode {
        DataMode::Live => Arc::new(LiveHealthSource::new(gateway.clone())),
        DataMode::Fixture => Arc::new(FixtureHealthSource),
    }
}

/// Pick the catalog source a deployment should use.
pub fn catalog_source(mode: DataMode, gateway: &GatewayClient) -> Arc<dyn CatalogSource> {
    match mode {
        DataMode::Live => Arc::new(LiveCatalogSource::new(gateway.clone())),
        DataMode::Fixture => Arc::new(FixtureCatalogSource),
    }
}
