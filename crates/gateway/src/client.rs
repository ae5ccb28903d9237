//! Gateway client: the single choke point for outbound calls
//!
//! Every domain client dispatches through [`GatewayClient`]. The verb
//! methods never return `Err`: network failures, non-2xx statuses, and
//! decode failures are all folded into the `error`/`status` fields of
//! the returned [`ApiResponse`]. The caller inspects the envelope and
//! decides what to do; nothing is retried here.

use std::sync::Arc;
use std::time::Duration;

use braingate_domain::config::GatewayConfig;
use braingate_domain::{ApiResponse, ClientError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::auth::{self, TokenSource};
use crate::http::HttpClient;

/// Shared HTTP wrapper through which all backend calls flow.
///
/// Cheap to clone; holds no per-call mutable state, so one instance can
/// serve unlimited concurrent calls.
#[derive(Clone)]
pub struct GatewayClient {
    http: HttpClient,
    base_url: String,
    token_source: Option<Arc<dyn TokenSource>>,
}

impl GatewayClient {
    /// Create a builder for fluent configuration.
    pub fn builder() -> GatewayClientBuilder {
        GatewayClientBuilder::default()
    }

    /// Create a client from configuration alone.
    ///
    /// The token source, if any, is derived from `config.auth`. Use the
    /// builder to inject a custom [`TokenSource`] instead.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` on an empty or unparseable base URL.
    pub fn new(config: GatewayConfig) -> Result<Self, ClientError> {
        Self::builder().config(config).build()
    }

    /// Execute a GET request.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.execute(Method::GET, path, None, HeaderMap::new()).await
    }

    /// Execute a POST request with a JSON body.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        match to_body(body) {
            Ok(value) => self.execute(Method::POST, path, Some(value), HeaderMap::new()).await,
            Err(err) => err.into(),
        }
    }

    /// Execute a POST request with an empty JSON object body.
    ///
    /// Action endpoints (connector sync, credential test) take no
    /// payload but still expect a JSON body.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.execute(
            Method::POST,
            path,
            Some(Value::Object(serde_json::Map::new())),
            HeaderMap::new(),
        )
        .await
    }

    /// Execute a PUT request with a JSON body.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        match to_body(body) {
            Ok(value) => self.execute(Method::PUT, path, Some(value), HeaderMap::new()).await,
            Err(err) => err.into(),
        }
    }

    /// Execute a PATCH request with a JSON body.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        match to_body(body) {
            Ok(value) => self.execute(Method::PATCH, path, Some(value), HeaderMap::new()).await,
            Err(err) => err.into(),
        }
    }

    /// Execute a DELETE request.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.execute(Method::DELETE, path, None, HeaderMap::new()).await
    }

    /// Execute an arbitrary request with per-call headers merged in.
    ///
    /// Escape hatch for callers that need more than the default JSON
    /// headers; the envelope contract is identical to the verb methods.
    #[instrument(skip(self, body, headers), fields(path = %path))]
    pub async fn request_with<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> ApiResponse<T> {
        self.execute(method, path, body, headers).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> ApiResponse<T> {
        match self.dispatch(method.clone(), path, body, headers).await {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(%method, path, error = %err, "gateway call failed before a response");
                err.into()
            }
        }
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> Result<ApiResponse<T>, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .headers(headers);

        // Attach-if-present: an unavailable token never blocks dispatch.
        if let Some(source) = &self.token_source {
            match source.bearer_token().await {
                Some(token) => {
                    request = request.header(AUTHORIZATION, format!("Bearer {token}"));
                }
                None => debug!(%method, path, "dispatching without bearer token"),
            }
        }

        if let Some(value) = body {
            request = request.json(&value);
        }

        let response = self.http.send(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body_text, &method, path, status);
            warn!(%method, path, %status, "gateway call failed upstream");
            return Ok(ApiResponse::failure(message, status.as_u16()));
        }

        // 204/205 carry no body per RFC; decode the target type from null.
        let data: T = if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            serde_json::from_value(Value::Null).map_err(|_| {
                ClientError::Decode(format!(
                    "no-content response ({}) but the target type expects a body",
                    status.as_u16()
                ))
            })?
        } else {
            let bytes = response
                .bytes()
                .await
                .map_err(|err| ClientError::Network(format!("failed to read body: {err}")))?;
            serde_json::from_slice(&bytes)
                .map_err(|err| ClientError::Decode(format!("failed to parse response: {err}")))?
        };

        debug!(%method, path, %status, "gateway call succeeded");
        Ok(ApiResponse::success(data, status.as_u16()))
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ClientError> {
    serde_json::to_value(body)
        .map_err(|err| ClientError::Config(format!("unserializable request body: {err}")))
}

/// Pull a human-readable message out of an upstream failure body.
///
/// Backend error payloads are JSON objects with one of `detail`,
/// `error`, or `message`; anything else falls back to the raw body,
/// then to a generic line.
fn extract_error_message(body: &str, method: &Method, path: &str, status: StatusCode) -> String {
    if !body.is_empty() {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
            for key in ["detail", "error", "message"] {
                if let Some(Value::String(text)) = map.get(key) {
                    if !text.is_empty() {
                        return text.clone();
                    }
                }
            }
        }
        return body.to_string();
    }
    format!("{} {} returned status {}", method, path, status.as_u16())
}

/// Builder for [`GatewayClient`]
#[derive(Default)]
pub struct GatewayClientBuilder {
    config: Option<GatewayConfig>,
    token_source: Option<Arc<dyn TokenSource>>,
}

impl GatewayClientBuilder {
    /// Set the gateway configuration.
    pub fn config(mut self, config: GatewayConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Inject a token source, overriding whatever `config.auth` says.
    pub fn token_source(mut self, source: Arc<dyn TokenSource>) -> Self {
        self.token_source = Some(source);
        self
    }

    /// Build the gateway client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the base URL is empty or does
    /// not parse, or if the underlying HTTP client cannot be built.
    pub fn build(self) -> Result<GatewayClient, ClientError> {
        let config = self.config.unwrap_or_default();

        let trimmed = config.base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ClientError::Config(
                "base URL must not be empty; configure the gateway origin explicitly".to_string(),
            ));
        }
        url::Url::parse(trimmed)
            .map_err(|err| ClientError::Config(format!("invalid base URL `{trimmed}`: {err}")))?;

        let token_source = self.token_source.or_else(|| auth::from_config(&config.auth));

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("braingate/", env!("CARGO_PKG_VERSION")))
            .default_headers(default_headers)
            .build()?;

        Ok(GatewayClient { http, base_url: trimmed.to_string(), token_source })
    }
}
