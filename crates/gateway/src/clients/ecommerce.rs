//! E-commerce client: products and orders

use braingate_domain::types::ecommerce::{
    NewProduct, Order, OrderFilter, Product, ProductFilter, ProductPatch,
};
use braingate_domain::ApiResponse;
use uuid::Uuid;

use crate::client::GatewayClient;
use crate::query::to_query;

const ECOM_BASE: &str = "/api/brain/ecommerce";

/// Typed client for the e-commerce resource family
#[derive(Clone)]
pub struct EcommerceClient {
    gateway: GatewayClient,
}

impl EcommerceClient {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// List products matching the filter.
    pub async fn list_products(&self, filter: &ProductFilter) -> ApiResponse<Vec<Product>> {
        let query = match to_query(filter) {
            Ok(query) => query,
            Err(err) => return err.into(),
        };
        self.gateway.get(&format!("{ECOM_BASE}/products{query}")).await
    }

    /// Fetch one product by id.
    pub async fn get_product(&self, id: Uuid) -> ApiResponse<Product> {
        self.gateway.get(&format!("{ECOM_BASE}/products/{id}")).await
    }

    /// Create a product.
    pub async fn create_product(&self, product: &NewProduct) -> ApiResponse<Product> {
        self.gateway.post(&format!("{ECOM_BASE}/products"), product).await
    }

    /// Apply a partial update to a product.
    pub async fn update_product(&self, id: Uuid, patch: &ProductPatch) -> ApiResponse<Product> {
        self.gateway.patch(&format!("{ECOM_BASE}/products/{id}"), patch).await
    }

    /// Delete a product.
    pub async fn delete_product(&self, id: Uuid) -> ApiResponse<()> {
        self.gateway.delete(&format!("{ECOM_BASE}/products/{id}")).await
    }

    /// List orders matching the filter.
    pub async fn list_orders(&self, filter: &OrderFilter) -> ApiResponse<Vec<Order>> {
        let query = match to_query(filter) {
            Ok(query) => query,
            Err(err) => return err.into(),
        };
        self.gateway.get(&format!("{ECOM_BASE}/orders{query}")).await
    }

    /// Fetch one order by id.
    pub async fn get_order(&self, id: Uuid) -> ApiResponse<Order> {
        self.gateway.get(&format!("{ECOM_BASE}/orders/{id}")).await
    }
}
