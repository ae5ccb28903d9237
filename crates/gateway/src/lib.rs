//! # Braingate Gateway
//!
//! Transport layer of the client suite: everything that actually talks
//! to the Brain gateway over HTTP.
//!
//! This crate contains:
//! - The low-level HTTP wrapper (timeout, headers, single-shot send)
//! - The gateway client that normalizes every outcome into a response
//!   envelope
//! - Bearer-token sources (attach-if-present, proceed-if-absent)
//! - Query-string serialization for filter structs
//! - Environment and file configuration loading
//! - One typed client per backend resource family
//! - Live implementations of the core data-source ports
//!
//! ## Architecture
//! - Implements traits defined in `braingate-core`
//! - Depends on `braingate-domain` and `braingate-core`
//! - Contains all "impure" code (network, environment)

pub mod auth;
pub mod client;
pub mod clients;
pub mod config;
pub mod http;
pub mod live;
pub mod query;

// Re-export commonly used items
pub use auth::{EnvToken, StaticToken, TokenSource};
pub use client::{GatewayClient, GatewayClientBuilder};
pub use clients::{
    AgentsClient, BillingClient, ByokClient, CmsClient, ConnectorsClient, CrmClient,
    DomainsClient, EcommerceClient,
};
pub use http::HttpClient;
