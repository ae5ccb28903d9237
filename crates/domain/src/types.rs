//! Data transfer records for each Brain resource family
//!
//! These are shape hints for callers: plain serde records with no
//! behavior and no invariants beyond whatever the backend returns.
//! Partial fields are `Option`; ids are UUIDs and timestamps are UTC.

pub mod agents;
pub mod billing;
pub mod byok;
pub mod cms;
pub mod connectors;
pub mod crm;
pub mod domains;
pub mod ecommerce;
