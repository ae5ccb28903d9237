//! Configuration loader
//!
//! Resolves the client suite configuration from environment variables
//! or a file.
//!
//! ## Loading Strategy
//! 1. If `BRAIN_API_URL` is set, the environment wins
//! 2. Otherwise, probes for a config file (TOML or JSON)
//! 3. Otherwise, environment defaults apply (hard-coded base URL,
//!    30 s timeout, ambient token attachment)
//!
//! ## Environment Variables
//! - `BRAIN_API_URL`: gateway base URL
//! - `BRAIN_API_TIMEOUT_SECS`: per-request timeout in seconds
//! - `BRAIN_API_TOKEN`: ambient bearer token, attached when present
//! - `BRAIN_DATA_MODE`: `live` (default) or `fixture`

use std::path::{Path, PathBuf};

use braingate_domain::config::{AuthConfig, BraingateConfig, DataMode};
use braingate_domain::constants::{BASE_URL_ENV, DATA_MODE_ENV, DEFAULT_BASE_URL, TOKEN_ENV};
use braingate_domain::{ClientError, Result};

/// Load configuration with automatic fallback strategy.
///
/// # Errors
/// Returns `ClientError::Config` if an environment value or config file
/// is present but invalid.
pub fn load() -> Result<BraingateConfig> {
    if std::env::var(BASE_URL_ENV).is_ok() {
        tracing::info!("configuration loaded from environment variables");
        return load_from_env();
    }
    if let Some(path) = probe_config_paths() {
        return load_from_file(Some(path));
    }
    tracing::debug!("no explicit configuration found, using environment defaults");
    load_from_env()
}

/// Load configuration from environment variables.
///
/// Every variable has a default, so this only fails on values that are
/// present but unparseable.
///
/// # Errors
/// Returns `ClientError::Config` on an invalid timeout or data mode.
pub fn load_from_env() -> Result<BraingateConfig> {
    let mut config = BraingateConfig::default();

    config.gateway.base_url =
        std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    if let Ok(raw) = std::env::var("BRAIN_API_TIMEOUT_SECS") {
        config.gateway.timeout_seconds = raw
            .parse::<u64>()
            .map_err(|e| ClientError::Config(format!("invalid timeout: {e}")))?;
    }

    // Ambient-session analogue: the token variable is consulted per
    // request, so attach-if-present semantics come for free.
    config.gateway.auth = AuthConfig::Env { var: TOKEN_ENV.to_string() };

    config.data.mode = match std::env::var(DATA_MODE_ENV) {
        Ok(raw) => match raw.to_ascii_lowercase().as_str() {
            "live" => DataMode::Live,
            "fixture" => DataMode::Fixture,
            other => {
                return Err(ClientError::Config(format!("invalid data mode: {other}")));
            }
        },
        Err(_) => DataMode::Live,
    };

    Ok(config)
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the standard locations. Format is
/// detected by extension (`.toml` or `.json`).
///
/// # Errors
/// Returns `ClientError::Config` if the file is missing, unreadable, or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<BraingateConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ClientError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ClientError::Config("no config file found in any standard location".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ClientError::Config(format!("failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<BraingateConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ClientError::Config(format!("invalid TOML config: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ClientError::Config(format!("invalid JSON config: {e}"))),
        other => Err(ClientError::Config(format!("unsupported config format: {other}"))),
    }
}

/// Probe the standard locations for a config file.
///
/// Checked in order: `./braingate.{toml,json}`, `./config.{toml,json}`,
/// then the same names one directory up.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let names = ["braingate.toml", "braingate.json", "config.toml", "config.json"];

    names
        .iter()
        .map(|name| cwd.join(name))
        .chain(names.iter().map(|name| cwd.join("..").join(name)))
        .find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        std::env::remove_var(BASE_URL_ENV);
        std::env::remove_var("BRAIN_API_TIMEOUT_SECS");
        std::env::remove_var(DATA_MODE_ENV);
    }

    #[test]
    fn env_defaults_apply_when_nothing_is_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let config = load_from_env().expect("config");
        assert_eq!(config.gateway.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.gateway.timeout_seconds, 30);
        assert_eq!(config.gateway.auth, AuthConfig::Env { var: TOKEN_ENV.to_string() });
        assert_eq!(config.data.mode, DataMode::Live);
    }

    #[test]
    fn env_overrides_are_picked_up() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(BASE_URL_ENV, "https://brain.staging.example.com");
        std::env::set_var("BRAIN_API_TIMEOUT_SECS", "5");
        std::env::set_var(DATA_MODE_ENV, "fixture");

        let config = load_from_env().expect("config");
        assert_eq!(config.gateway.base_url, "https://brain.staging.example.com");
        assert_eq!(config.gateway.timeout_seconds, 5);
        assert_eq!(config.data.mode, DataMode::Fixture);

        clear_env();
    }

    #[test]
    fn invalid_timeout_is_a_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("BRAIN_API_TIMEOUT_SECS", "soon");
        let result = load_from_env();
        assert!(matches!(result, Err(ClientError::Config(_))));

        clear_env();
    }

    #[test]
    fn invalid_data_mode_is_a_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(DATA_MODE_ENV, "demo");
        let result = load_from_env();
        assert!(matches!(result, Err(ClientError::Config(_))));

        clear_env();
    }

    #[test]
    fn toml_files_load() {
        let toml_content = r#"
[gateway]
base_url = "https://brain.internal.example.com"
timeout_seconds = 10

[gateway.auth]
mode = "env"
var = "MY_TOKEN"

[data]
mode = "fixture"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).expect("config");
        assert_eq!(config.gateway.base_url, "https://brain.internal.example.com");
        assert_eq!(config.gateway.timeout_seconds, 10);
        assert_eq!(config.gateway.auth, AuthConfig::Env { var: "MY_TOKEN".to_string() });
        assert_eq!(config.data.mode, DataMode::Fixture);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn json_files_load() {
        let json_content = r#"{
            "gateway": {
                "base_url": "https://brain.example.net",
                "auth": {"mode": "none"}
            }
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).expect("config");
        assert_eq!(config.gateway.base_url, "https://brain.example.net");
        // Unspecified fields take their serde defaults.
        assert_eq!(config.gateway.timeout_seconds, 30);
        assert_eq!(config.gateway.auth, AuthConfig::None);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/braingate.toml")));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[gateway\nbase_url = ").unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(matches!(result, Err(ClientError::Config(_))));

        std::fs::remove_file(path).ok();
    }
}
