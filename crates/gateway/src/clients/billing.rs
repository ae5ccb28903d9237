//! Billing client: plans, the subscription, and invoices

use braingate_domain::types::billing::{
    Invoice, InvoiceFilter, Plan, PlanChange, Subscription,
};
use braingate_domain::ApiResponse;
use uuid::Uuid;

use crate::client::GatewayClient;
use crate::query::to_query;

const BILLING_BASE: &str = "/api/brain/billing";

/// Typed client for the billing resource family
///
/// The subscription is a singleton per tenant, so its routes carry no
/// id.
#[derive(Clone)]
pub struct BillingClient {
    gateway: GatewayClient,
}

impl BillingClient {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// List the plans available to this tenant.
    pub async fn list_plans(&self) -> ApiResponse<Vec<Plan>> {
        self.gateway.get(&format!("{BILLING_BASE}/plans")).await
    }

    /// Fetch the tenant's current subscription.
    pub async fn get_subscription(&self) -> ApiResponse<Subscription> {
        self.gateway.get(&format!("{BILLING_BASE}/subscription")).await
    }

    /// Switch the subscription to another plan.
    pub async fn change_plan(&self, change: &PlanChange) -> ApiResponse<Subscription> {
        self.gateway.put(&format!("{BILLING_BASE}/subscription"), change).await
    }

    /// Cancel the subscription at period end.
    pub async fn cancel_subscription(&self) -> ApiResponse<Subscription> {
        self.gateway.delete(&format!("{BILLING_BASE}/subscription")).await
    }

    /// List invoices matching the filter.
    pub async fn list_invoices(&self, filter: &InvoiceFilter) -> ApiResponse<Vec<Invoice>> {
        let query = match to_query(filter) {
            Ok(query) => query,
            Err(err) => return err.into(),
        };
        self.gateway.get(&format!("{BILLING_BASE}/invoices{query}")).await
    }

    /// Fetch one invoice by id.
    pub async fn get_invoice(&self, id: Uuid) -> ApiResponse<Invoice> {
        self.gateway.get(&format!("{BILLING_BASE}/invoices/{id}")).await
    }
}
