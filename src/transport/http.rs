//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};

use super::{CoverTransport, TransportError, TransportResponse};
use crate::config::HttpConfig;

/// HTTP transport over a shared `reqwest::Client`.
///
/// Every request carries the configured `User-Agent`; the CDN rejects
/// requests without one.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: reqwest::Client,
    user_agent: String,
}

impl HttpTransport {
    /// Create a transport with default timeout and user agent.
    pub fn new() -> Self {
        Self::from_config(&HttpConfig::default())
    }

    /// Create a transport from HTTP settings.
    pub fn from_config(config: &HttpConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client ({}), using defaults", e);
                reqwest::Client::new()
            });

        Self {
            http_client,
            user_agent: config.user_agent.clone(),
        }
    }

    /// The `User-Agent` sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn headers(&self) -> Result<HeaderMap, TransportError> {
        let value = HeaderValue::from_str(&self.user_agent)
            .map_err(|e| TransportError::InvalidRequest(format!("user agent: {}", e)))?;
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, value);
        Ok(headers)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_url(url: &str) -> Result<Url, TransportError> {
    Url::parse(url).map_err(|e| TransportError::InvalidRequest(format!("{}: {}", url, e)))
}

fn classify(e: reqwest::Error) -> TransportError {
    if e.is_builder() {
        TransportError::InvalidRequest(e.to_string())
    } else {
        TransportError::Network(e.to_string())
    }
}

/// An unread `reqwest` response.
#[derive(Debug)]
pub struct HttpResponse {
    inner: reqwest::Response,
}

#[async_trait]
impl TransportResponse for HttpResponse {
    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    fn content_type(&self) -> Option<String> {
        self.inner
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    async fn bytes(self) -> Result<Vec<u8>, TransportError> {
        self.inner
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}

#[async_trait]
impl CoverTransport for HttpTransport {
    type Response = HttpResponse;

    async fn head(&self, url: &str) -> Result<u16, TransportError> {
        let url = parse_url(url)?;
        let response = self
            .http_client
            .head(url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(classify)?;

        Ok(response.status().as_u16())
    }

    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let url = parse_url(url)?;
        let inner = self
            .http_client
            .get(url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(classify)?;

        Ok(HttpResponse { inner })
    }
}
