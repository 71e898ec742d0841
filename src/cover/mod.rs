//! Cover art resolution for CDN-hosted album artwork.
//!
//! The CDN encodes resolution as a fixed code inside the image identifier,
//! so switching tiers is a string rewrite:
//!
//! 1. **Small to medium** - always done, pure string rewrite
//! 2. **Medium to max** - only when requested, and only after a `HEAD`
//!    probe confirms the max asset exists
//!
//! Downloads land in memory; nothing is written to disk.

mod resolver;
mod tier;
pub mod url;

pub use resolver::{CoverError, CoverResolver};
pub use tier::CoverTier;

/// Downloaded cover art
#[derive(Debug, Clone)]
pub struct CoverArt {
    /// Raw image data
    pub data: Vec<u8>,
    /// MIME type reported by the server (image/jpeg if missing)
    pub mime_type: String,
    /// URL the bytes were fetched from
    pub url: String,
    /// Tier of the fetched URL, if it carries a known code
    pub tier: Option<CoverTier>,
}

/// Best known URL for a cover at the requested quality.
///
/// Uses the default HTTP transport for the max-tier probe. Never fails;
/// falls back to the best URL known to be good.
pub async fn resolve_cover_url(url: &str, want_max: bool) -> String {
    CoverResolver::new().resolve(url, want_max).await
}

/// Download a cover into memory using the default HTTP transport.
pub async fn download_cover(url: &str, want_max: bool) -> Result<Vec<u8>, CoverError> {
    CoverResolver::new().download(url, want_max).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_cover_url_without_max_needs_no_network() {
        assert_eq!(
            resolve_cover_url("https://i.scdn.co/image/ab67616d00001e02abc", false).await,
            "https://i.scdn.co/image/ab67616d0000b273abc"
        );
        assert_eq!(resolve_cover_url("", true).await, "");
    }

    #[tokio::test]
    async fn test_download_cover_empty_url() {
        assert_eq!(download_cover("", true).await, Err(CoverError::NoUrl));
    }
}
