//! # Braingate Core
//!
//! Pure client-side logic - no transport dependencies.
//!
//! This crate contains:
//! - Data-source port interfaces (traits) for live vs fixture data
//! - Deterministic fixture implementations for demo deployments
//! - Wizard state documents and their pure reducers
//!
//! ## Architecture Principles
//! - Only depends on `braingate-domain`
//! - No HTTP or environment code
//! - All external capability via traits
//! - Reducers are pure: action in, new document out

pub mod datasource;
pub mod fixtures;
pub mod wizard;

// Re-export specific items to avoid ambiguity
pub use datasource::{CatalogSource, ConnectorHealthSource};
pub use fixtures::{FixtureCatalogSource, FixtureHealthSource};
pub use wizard::api_key::{ApiKeyAction, ApiKeyStep, ApiKeyWizardDoc};
pub use wizard::payment::{PaymentAction, PaymentStep, PaymentWizardDoc};
