//! Deterministic fixture data sources
//!
//! Demo deployments render real screens without a reachable backend.
//! Fixture data is static: every call returns the same records, so
//! screenshots and tests are reproducible. No randomness here.

use async_trait::async_trait;
use braingate_domain::types::connectors::ConnectorHealth;
use braingate_domain::types::ecommerce::{Product, ProductFilter};
use braingate_domain::{ClientError, Result};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::datasource::{CatalogSource, ConnectorHealthSource};

// All fixture timestamps share one frozen instant.
fn fixture_instant() -> DateTime<Utc> {
    DateTime::from_timestamp(1_750_000_000, 0).unwrap_or_default()
}

/// Fixture implementation of [`ConnectorHealthSource`]
#[derive(Debug, Default, Clone)]
pub struct FixtureHealthSource;

impl FixtureHealthSource {
    fn catalog() -> Vec<ConnectorHealth> {
        let checked = fixture_instant();
        vec![
            ConnectorHealth {
                slug: "stripe".to_string(),
                healthy: true,
                latency_ms: Some(84),
                error_rate: Some(0.0),
                last_checked: checked,
                message: None,
            },
            ConnectorHealth {
                slug: "facebook-ads".to_string(),
                healthy: true,
                latency_ms: Some(210),
                error_rate: Some(0.01),
                last_checked: checked,
                message: None,
            },
            ConnectorHealth {
                slug: "google-business".to_string(),
                healthy: false,
                latency_ms: None,
                error_rate: Some(1.0),
                last_checked: checked,
                message: Some("token expired".to_string()),
            },
            ConnectorHealth {
                slug: "hubspot".to_string(),
                healthy: true,
                latency_ms: Some(133),
                error_rate: Some(0.0),
                last_checked: checked,
                message: None,
            },
        ]
    }
}

#[async_trait]
impl ConnectorHealthSource for FixtureHealthSource {
    async fn connector_health(&self) -> Result<Vec<ConnectorHealth>> {
        Ok(Self::catalog())
    }

    async fn health_for(&self, slug: &str) -> Result<ConnectorHealth> {
        Self::catalog().into_iter().find(|h| h.slug == slug).ok_or_else(|| {
            ClientError::Upstream { status: 404, message: format!("unknown connector: {slug}") }
        })
    }
}

/// Fixture implementation of [`CatalogSource`]
#[derive(Debug, Default, Clone)]
pub struct FixtureCatalogSource;

impl FixtureCatalogSource {
    fn catalog() -> Vec<Product> {
        let created = fixture_instant();
        let demo = |id: u128, sku: &str, name: &str, price_cents: i64, active: bool| Product {
            id: Uuid::from_u128(id),
            sku: sku.to_string(),
            name: name.to_string(),
            description: None,
            price_cents,
            currency: "USD".to_string(),
            inventory: Some(25),
            active,
            created_at: created,
            updated_at: None,
        };
        vec![
            demo(0x1001, "TEE-CLASSIC", "Classic Tee", 2_400, true),
            demo(0x1002, "MUG-LOGO", "Logo Mug", 1_400, true),
            demo(0x1003, "HOODIE-ZIP", "Zip Hoodie", 5_900, true),
            demo(0x1004, "POSTER-A2", "A2 Poster", 1_900, false),
        ]
    }
}

#[async_trait]
impl CatalogSource for FixtureCatalogSource {
    async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let needle = filter.search.as_deref().map(str::to_lowercase);
        let limit =
            filter.limit.map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));

        Ok(Self::catalog()
            .into_iter()
            .filter(|p| filter.active.map_or(true, |want| p.active == want))
            .filter(|p| {
                needle.as_deref().map_or(true, |n| {
                    p.name.to_lowercase().contains(n) || p.sku.to_lowercase().contains(n)
                })
            })
            .take(limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_fixtures_are_identical_across_calls() {
        let source = FixtureHealthSource;
        let first = source.connector_health().await.unwrap();
        let second = source.connector_health().await.unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[tokio::test]
    async fn health_for_unknown_slug_is_a_404() {
        let source = FixtureHealthSource;
        let err = source.health_for("nonexistent").await.unwrap_err();
        match err {
            ClientError::Upstream { status, .. } => assert_eq!(status, 404),
            other => panic!("expected upstream 404, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn catalog_filter_applies_search_and_active() {
        let source = FixtureCatalogSource;

        let all = source.products(&ProductFilter::default()).await.unwrap();
        assert_eq!(all.len(), 4);

        let active_only = source
            .products(&ProductFilter { active: Some(true), ..ProductFilter::default() })
            .await
            .unwrap();
        assert!(active_only.iter().all(|p| p.active));

        let tees = source
            .products(&ProductFilter { search: Some("tee".to_string()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(tees.len(), 1);
        assert_eq!(tees[0].sku, "TEE-CLASSIC");
    }

    #[tokio::test]
    async fn catalog_limit_truncates() {
        let source = FixtureCatalogSource;
        let two = source
            .products(&ProductFilter { limit: Some(2), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(two.len(), 2);
    }
}
