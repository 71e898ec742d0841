//! Cover Fetch - resolve and download CDN album artwork at the best
//! available resolution.
//!
//! # Usage
//!
//! ```ignore
//! use cover_fetch::cover::CoverResolver;
//!
//! let resolver = CoverResolver::new();
//! let url = resolver.resolve("https://i.scdn.co/image/ab67616d00001e02...", true).await;
//! let bytes = resolver.download(&url, false).await?;
//! ```

pub mod cli;
pub mod config;
pub mod cover;
pub mod error;
pub mod transport;

pub use cover::{CoverArt, CoverError, CoverResolver, CoverTier, download_cover, resolve_cover_url};
pub use transport::{CoverTransport, HttpTransport, TransportError, TransportResponse};
