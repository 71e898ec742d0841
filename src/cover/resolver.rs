//! Cover resolver - picks the best available tier and downloads it.
//!
//! Two failure policies apply:
//! - Resolution is best-effort. A failed max-tier probe falls back to the
//!   medium URL and is never reported as an error.
//! - Downloads are strict. Every failure is returned as a [`CoverError`]
//!   and nothing is retried.

use crate::transport::{CoverTransport, HttpTransport, TransportError, TransportResponse};

use super::tier::CoverTier;
use super::url::{max_candidate, upgrade_to_medium};
use super::CoverArt;

/// Status the probe must see before a max-tier URL is trusted.
const PROBE_OK: u16 = 200;

/// Cover download failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoverError {
    #[error("no URL provided")]
    NoUrl,

    #[error("failed to create request: {0}")]
    Request(#[source] TransportError),

    #[error("failed to download: {0}")]
    Download(#[source] TransportError),

    #[error("download failed: HTTP {0}")]
    Status(u16),

    #[error("failed to read data: {0}")]
    Read(#[source] TransportError),
}

impl CoverError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            CoverError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// Resolves cover URLs and fetches cover bytes through a transport.
pub struct CoverResolver<T = HttpTransport> {
    transport: T,
}

impl CoverResolver<HttpTransport> {
    /// Create a resolver over the default HTTP transport.
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl Default for CoverResolver<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CoverTransport> CoverResolver<T> {
    /// Create a resolver over a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Check whether `url` is served, using a header-only request.
    ///
    /// Any failure counts as unavailable.
    pub async fn probe_availability(&self, url: &str) -> bool {
        match self.transport.head(url).await {
            Ok(PROBE_OK) => true,
            Ok(status) => {
                tracing::debug!("Probe for {} returned HTTP {}", url, status);
                false
            }
            Err(e) => {
                tracing::debug!("Probe for {} failed: {}", url, e);
                false
            }
        }
    }

    /// Upgrade a medium-tier URL to the max tier if the CDN has it.
    ///
    /// URLs without the medium code are returned unchanged and nothing is
    /// probed. Probe failures fall back to the input URL.
    pub async fn upgrade_to_max(&self, url: &str) -> String {
        let Some(candidate) = max_candidate(url) else {
            return url.to_string();
        };

        if self.probe_availability(&candidate).await {
            tracing::debug!("Upgraded to max quality: {}", candidate);
            candidate
        } else {
            tracing::warn!("Max quality cover unavailable, keeping {}", url);
            url.to_string()
        }
    }

    /// Best known URL for the requested quality.
    ///
    /// Small covers are always upgraded to medium. With `want_max`, the max
    /// tier is probed and used when available. Never fails.
    pub async fn resolve(&self, url: &str, want_max: bool) -> String {
        if url.is_empty() {
            return String::new();
        }

        let medium = upgrade_to_medium(url);
        if medium != url {
            tracing::debug!("Upgraded 300x300 to 640x640: {}", medium);
        }

        if want_max {
            self.upgrade_to_max(&medium).await
        } else {
            medium
        }
    }

    /// Resolve and download a cover into memory.
    pub async fn fetch(&self, url: &str, want_max: bool) -> Result<CoverArt, CoverError> {
        if url.is_empty() {
            return Err(CoverError::NoUrl);
        }

        let download_url = self.resolve(url, want_max).await;
        tracing::debug!("Downloading cover from {}", download_url);

        let response = self
            .transport
            .get(&download_url)
            .await
            .map_err(|e| match e {
                TransportError::InvalidRequest(_) => CoverError::Request(e),
                _ => CoverError::Download(e),
            })?;

        let status = response.status();
        if status != 200 {
            return Err(CoverError::Status(status));
        }

        let mime_type = response
            .content_type()
            .unwrap_or_else(|| "image/jpeg".to_string());
        let data = response.bytes().await.map_err(CoverError::Read)?;

        tracing::info!("Downloaded {} bytes from {}", data.len(), download_url);

        Ok(CoverArt {
            tier: CoverTier::detect(&download_url),
            data,
            mime_type,
            url: download_url,
        })
    }

    /// Resolve and download a cover, returning only the bytes.
    pub async fn download(&self, url: &str, want_max: bool) -> Result<Vec<u8>, CoverError> {
        self.fetch(url, want_max).await.map(|cover| cover.data)
    }
}
