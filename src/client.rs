use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;

const DEFAULT_BASE_URL: &str = "https://api.logsnag.com";
const API_VERSION: &str = "v1";
/// Narrow, domain-qualified marker for "this URL is already versioned".
const VERSION_MARKER: &str = "logsnag.com/v";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Configuration for [`ApiClient`]
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL override; unset means the hosted LogSnag API
    pub base_url: Option<String>,
    /// Request timeout; unset means 20 seconds
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Override the base URL (a missing version segment is appended at
    /// client construction)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a custom request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Authenticated HTTP client for the LogSnag REST API
///
/// Immutable after construction. Safe to share across tasks; the underlying
/// `reqwest::Client` pools connections internally.
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
    token: String,
}

impl ApiClient {
    /// Create a client from a bearer token and configuration
    pub fn new(token: impl Into<String>, config: ClientConfig) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            base_url: resolve_base_url(config.base_url.as_deref()),
            http_client,
            token: token.into(),
        })
    }

    /// The effective (versioned) base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON payload to an endpoint under the base URL
    ///
    /// Sets `Content-Type: application/json` and `Authorization: Bearer
    /// <token>`, reads the full response body, and classifies the outcome:
    /// transport failure, status >= 300 (raw body text kept as error
    /// detail), malformed JSON in a successful response, or the decoded
    /// value. Single attempt; the caller owns retry policy.
    pub async fn post<T: Serialize>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<Value, ClientError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, "sending request");

        let resp = self
            .http_client
            .post(&url)
            .header(
                http::header::AUTHORIZATION,
                format!("Bearer {}", self.token),
            )
            .json(payload)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(ClientError::Transport)?;

        if status.as_u16() >= 300 {
            return Err(ClientError::Api {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let value = serde_json::from_slice(&body)?;
        Ok(value)
    }
}

/// Resolve the effective base URL
///
/// Unset means the hosted API root. A URL already carrying the LogSnag
/// version marker is used unmodified; anything else gets the default
/// version segment appended. The marker check is deliberately the literal
/// `logsnag.com/v` substring, matching the service contract.
fn resolve_base_url(base_url: Option<&str>) -> String {
    match base_url {
        None => format!("{}/{}", DEFAULT_BASE_URL, API_VERSION),
        Some(url) if url.contains(VERSION_MARKER) => url.to_string(),
        Some(url) => format!("{}/{}", url, API_VERSION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default_base_url() {
        assert_eq!(resolve_base_url(None), "https://api.logsnag.com/v1");
    }

    #[test]
    fn test_resolve_versioned_url_unmodified() {
        assert_eq!(
            resolve_base_url(Some("https://custom.api.logsnag.com/v1")),
            "https://custom.api.logsnag.com/v1"
        );
    }

    #[test]
    fn test_resolve_appends_version() {
        assert_eq!(
            resolve_base_url(Some("http://localhost:8080")),
            "http://localhost:8080/v1"
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let once = resolve_base_url(Some("https://api.logsnag.com"));
        let twice = resolve_base_url(Some(&once));
        assert_eq!(once, twice);
        assert_eq!(twice, "https://api.logsnag.com/v1");
    }

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new("test-token", ClientConfig::default());
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "https://api.logsnag.com/v1");
    }

    #[test]
    fn test_config_with_timeout() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(60));
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_config_with_base_url() {
        let config = ClientConfig::default().with_base_url("http://localhost:8080");
        let client = ApiClient::new("test-token", config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
    }
}
