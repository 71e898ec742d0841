//! Pure cover URL rewriting.
//!
//! Nothing here touches the network. Deciding whether a rewritten URL
//! actually exists on the CDN is the resolver's job.

use super::tier::CoverTier;

/// Swap the first occurrence of `from`'s code for `to`'s code.
///
/// Returns `None` when the URL does not carry `from`'s code. Everything
/// else in the URL is left untouched.
pub fn retier(url: &str, from: CoverTier, to: CoverTier) -> Option<String> {
    url.contains(from.code())
        .then(|| url.replacen(from.code(), to.code(), 1))
}

/// Upgrade a small (300px) cover URL to the medium (640px) tier.
///
/// URLs without the small code are returned unchanged.
pub fn upgrade_to_medium(url: &str) -> String {
    retier(url, CoverTier::Small, CoverTier::Medium).unwrap_or_else(|| url.to_string())
}

/// Candidate max-resolution URL for a medium-tier URL.
///
/// The candidate is unverified; not every release has a max asset.
pub fn max_candidate(url: &str) -> Option<String> {
    retier(url, CoverTier::Medium, CoverTier::Max)
}
