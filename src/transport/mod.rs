//! HTTP transport capability used by the cover resolver.
//!
//! The resolver never builds HTTP clients itself. It talks to a
//! [`CoverTransport`], which owns timeouts and the identifying
//! `User-Agent` header the CDN insists on.
//!
//! Production code uses [`HttpTransport`]; tests substitute
//! [`mocks::MockTransport`].

mod http;

use async_trait::async_trait;

pub use http::HttpTransport;

/// Transport-level failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be built (usually a malformed URL)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Connection, TLS or timeout failure
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be read to the end
    #[error("body read error: {0}")]
    Body(String),
}

/// An open response whose body has not been read yet.
#[async_trait]
pub trait TransportResponse: Send {
    /// HTTP status code.
    fn status(&self) -> u16;

    /// `Content-Type` header, if the server sent one.
    fn content_type(&self) -> Option<String>;

    /// Drain the body into memory.
    ///
    /// Consumes the response so the connection is released whether or not
    /// the read succeeds.
    async fn bytes(self) -> Result<Vec<u8>, TransportError>;
}

/// Minimal HTTP capability: a header-only probe and a full GET.
#[async_trait]
pub trait CoverTransport: Send + Sync {
    /// Response type returned by [`CoverTransport::get`].
    type Response: TransportResponse;

    /// Issue a `HEAD` request and return the status code.
    async fn head(&self, url: &str) -> Result<u16, TransportError>;

    /// Issue a `GET` request. The body is left unread.
    async fn get(&self, url: &str) -> Result<Self::Response, TransportError>;
}

/// Scripted transport for tests.
#[cfg(test)]
pub mod mocks {
    use std::collections::HashMap;

    use parking_lot::Mutex;

    use super::*;

    /// Kind of request seen by the mock.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Method {
        Head,
        Get,
    }

    /// What the mock answers for a URL.
    #[derive(Debug, Clone)]
    pub enum MockReply {
        /// Respond with a status and body
        Status(u16, Vec<u8>),
        /// Fail before any response arrives
        Error(TransportError),
        /// Respond with a status, then fail while reading the body
        TruncatedBody(u16),
    }

    /// Transport that answers from a fixed table and records every call.
    ///
    /// Unknown URLs get a 404.
    #[derive(Default)]
    pub struct MockTransport {
        replies: HashMap<String, MockReply>,
        calls: Mutex<Vec<(Method, String)>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer `url` with `status` and `body`.
        pub fn with_status(mut self, url: &str, status: u16, body: &[u8]) -> Self {
            self.replies
                .insert(url.to_string(), MockReply::Status(status, body.to_vec()));
            self
        }

        /// Fail requests for `url` with `error`.
        pub fn with_error(mut self, url: &str, error: TransportError) -> Self {
            self.replies.insert(url.to_string(), MockReply::Error(error));
            self
        }

        /// Answer `url` with `status` but break the body stream.
        pub fn with_truncated_body(mut self, url: &str, status: u16) -> Self {
            self.replies
                .insert(url.to_string(), MockReply::TruncatedBody(status));
            self
        }

        /// Every request made so far, in order.
        pub fn calls(&self) -> Vec<(Method, String)> {
            self.calls.lock().clone()
        }

        /// Number of requests made with `method`.
        pub fn count(&self, method: Method) -> usize {
            self.calls.lock().iter().filter(|(m, _)| *m == method).count()
        }

        fn reply(&self, method: Method, url: &str) -> MockReply {
            self.calls.lock().push((method, url.to_string()));
            self.replies
                .get(url)
                .cloned()
                .unwrap_or(MockReply::Status(404, Vec::new()))
        }
    }

    /// Response handed out by [`MockTransport`].
    pub struct MockResponse {
        status: u16,
        body: Result<Vec<u8>, TransportError>,
    }

    #[async_trait]
    impl TransportResponse for MockResponse {
        fn status(&self) -> u16 {
            self.status
        }

        fn content_type(&self) -> Option<String> {
            Some("image/jpeg".to_string())
        }

        async fn bytes(self) -> Result<Vec<u8>, TransportError> {
            self.body
        }
    }

    #[async_trait]
    impl CoverTransport for MockTransport {
        type Response = MockResponse;

        async fn head(&self, url: &str) -> Result<u16, TransportError> {
            match self.reply(Method::Head, url) {
                MockReply::Status(status, _) | MockReply::TruncatedBody(status) => Ok(status),
                MockReply::Error(err) => Err(err),
            }
        }

        async fn get(&self, url: &str) -> Result<MockResponse, TransportError> {
            match self.reply(Method::Get, url) {
                MockReply::Status(status, body) => Ok(MockResponse {
                    status,
                    body: Ok(body),
                }),
                MockReply::TruncatedBody(status) => Ok(MockResponse {
                    status,
                    body: Err(TransportError::Body("connection reset".to_string())),
                }),
                MockReply::Error(err) => Err(err),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_unknown_url_is_404() {
            let mock = MockTransport::new();
            assert_eq!(mock.head("https://example.com/x").await, Ok(404));
            assert_eq!(mock.count(Method::Head), 1);
        }

        #[tokio::test]
        async fn test_mock_records_calls_in_order() {
            let mock = MockTransport::new().with_status("https://a", 200, b"img");
            mock.head("https://a").await.unwrap();
            let response = mock.get("https://a").await.unwrap();
            assert_eq!(response.bytes().await.unwrap(), b"img");
            assert_eq!(
                mock.calls(),
                vec![
                    (Method::Head, "https://a".to_string()),
                    (Method::Get, "https://a".to_string()),
                ]
            );
        }

        #[tokio::test]
        async fn test_mock_truncated_body() {
            let mock = MockTransport::new().with_truncated_body("https://a", 200);
            let response = mock.get("https://a").await.unwrap();
            assert_eq!(response.status(), 200);
            assert!(matches!(response.bytes().await, Err(TransportError::Body(_))));
        }
    }
}
