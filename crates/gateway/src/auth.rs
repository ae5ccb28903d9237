//! Bearer-token sources
//!
//! The gateway asks its configured [`TokenSource`] before each dispatch.
//! A token that is present is attached as `Authorization: Bearer <token>`;
//! an absent one never blocks the request - it goes out unauthenticated
//! and the backend decides whether that is acceptable.

use std::sync::Arc;

use async_trait::async_trait;
use braingate_domain::config::AuthConfig;
use tracing::debug;

/// Trait for providing bearer tokens
///
/// Implementations must express "no token right now" as `None`, never as
/// an error: failure to obtain a session must not abort the request.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// The current bearer token, if one is available.
    async fn bearer_token(&self) -> Option<String>;
}

/// Fixed token, used by tests and service deployments
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn bearer_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Token read from an environment variable on every request
///
/// Re-reading per call means an ambient session refreshed by another
/// process is picked up without restarting.
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

#[async_trait]
impl TokenSource for EnvToken {
    async fn bearer_token(&self) -> Option<String> {
        match std::env::var(&self.var) {
            Ok(token) if !token.is_empty() => Some(token),
            _ => {
                debug!(var = %self.var, "no bearer token available, proceeding unauthenticated");
                None
            }
        }
    }
}

/// Build the token source described by an [`AuthConfig`], if any.
pub fn from_config(config: &AuthConfig) -> Option<Arc<dyn TokenSource>> {
    match config {
        AuthConfig::None => None,
        AuthConfig::Env { var } => Some(Arc::new(EnvToken::new(var.clone()))),
    }
}
