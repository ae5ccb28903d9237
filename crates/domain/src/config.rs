//! Configuration structures for the client suite
//!
//! Plain serde-derived data; resolution from environment variables and
//! files lives in the gateway crate's loader.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TOKEN_ENV};

/// Top-level configuration for the client suite
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BraingateConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub data: DataConfig,
}

/// Gateway client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL all request paths are joined onto. Must be non-empty;
    /// the previous same-origin relative mode is expressed by setting
    /// the origin explicitly.
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Bearer-token attachment strategy.
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            auth: AuthConfig::default(),
        }
    }
}

/// How the gateway obtains a bearer token, if at all
///
/// Attach-if-present: a configured source that yields no token does not
/// block the request; it goes out unauthenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum AuthConfig {
    /// Never attach an `Authorization` header.
    #[default]
    None,
    /// Read a bearer token from the named environment variable on each
    /// request.
    Env {
        #[serde(default = "default_token_var")]
        var: String,
    },
}

/// Data-source selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub mode: DataMode,
}

/// Live gateway data or deterministic fixtures, never intermixed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataMode {
    #[default]
    Live,
    Fixture,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_token_var() -> String {
    TOKEN_ENV.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_fallback_base_url() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.auth, AuthConfig::None);
    }

    #[test]
    fn auth_config_deserializes_from_tagged_form() {
        let parsed: AuthConfig =
            serde_json::from_str(r#"{"mode": "env", "var": "MY_TOKEN"}"#).unwrap();
        assert_eq!(parsed, AuthConfig::Env { var: "MY_TOKEN".to_string() });

        let default_var: AuthConfig = serde_json::from_str(r#"{"mode": "env"}"#).unwrap();
        assert_eq!(default_var, AuthConfig::Env { var: TOKEN_ENV.to_string() });
    }

    #[test]
    fn data_mode_defaults_to_live() {
        let config: BraingateConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.data.mode, DataMode::Live);
    }
}
