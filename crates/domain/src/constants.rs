//! Constants shared across the client suite

/// Base URL used when no explicit value and no environment override is set.
pub const DEFAULT_BASE_URL: &str = "https://brain.example.com";

/// Environment variable supplying the gateway base URL.
pub const BASE_URL_ENV: &str = "BRAIN_API_URL";

/// Environment variable read by the default bearer-token source.
pub const TOKEN_ENV: &str = "BRAIN_API_TOKEN";

/// Environment variable selecting live vs fixture data sources.
pub const DATA_MODE_ENV: &str = "BRAIN_DATA_MODE";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Status recorded on the envelope when no response was received at all
/// (connection failure, timeout, undecodable body).
pub const FALLBACK_STATUS: u16 = 500;
