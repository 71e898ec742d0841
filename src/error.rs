//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`CoverError`], [`ConfigError`]), while the CLI uses `anyhow`
//! for convenient error propagation.
//!
//! # Example
//!
//! ```ignore
//! use cover_fetch::error::{Result, ResultExt};
//!
//! fn save(path: &Path, data: &[u8]) -> Result<()> {
//!     std::fs::write(path, data).with_context(format!("writing {}", path.display()))
//! }
//! ```

use crate::config::ConfigError;
use crate::cover::CoverError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cover resolution/download error
    #[error("Cover error: {0}")]
    Cover(#[from] CoverError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, CoverError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Cover(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_error_converts() {
        let err: Error = CoverError::Status(404).into();
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[test]
    fn test_error_with_context() {
        let result: std::result::Result<(), CoverError> = Err(CoverError::NoUrl);
        let msg = result.with_context("fetching album art").unwrap_err().to_string();
        assert!(msg.contains("fetching album art"));
        assert!(msg.contains("no URL provided"));
    }

    #[test]
    fn test_io_error_with_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_context("writing cover.jpg").unwrap_err();
        assert!(matches!(err, Error::WithContext { .. }));
        assert!(err.to_string().contains("writing cover.jpg"));
    }

    #[test]
    fn test_result_ext_chains() {
        let result: Result<()> = Err(Error::Cover(CoverError::NoUrl));
        let with_ctx = result.with_context("outer");
        assert!(with_ctx.unwrap_err().to_string().starts_with("outer"));
    }
}
