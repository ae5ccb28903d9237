//! Billing records: plans, subscriptions, and invoices

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A subscription plan offered by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub price_cents: i64,
    pub currency: String,
    /// Billing interval, e.g. "month" or "year".
    pub interval: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// The tenant's current subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub plan_code: String,
    pub status: String,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
}

/// Request body for switching plans
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanChange {
    pub plan_code: String,
}

/// An issued invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub number: String,
    pub amount_cents: i64,
    pub currency: String,
    /// Backend-defined state, e.g. "open", "paid", "void".
    pub status: String,
    pub issued_at: DateTime<Utc>,
    pub due_at: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Query filter for invoice listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceFilter {
    pub status: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
