//! Mock session for testing.

use crate::error::{SessionError, StorageError};
use crate::session::{StorageSession, AUTH_TOKEN_HEADER};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Storage URL used by [`MockSession`].
pub const MOCK_STORAGE_URL: &str = "https://storage.test/v1/AUTH_test";

/// Token used by [`MockSession`].
pub const MOCK_TOKEN: &str = "mock-token";

/// Mock session with fixed headers and unencoded URLs.
#[derive(Debug)]
pub struct MockSession {
    base_url: String,
    headers: HashMap<String, String>,
    fail: bool,
    header_calls: AtomicUsize,
}

impl MockSession {
    /// Session returning `X-Auth-Token: mock-token` under [`MOCK_STORAGE_URL`].
    pub fn new() -> Self {
        let mut headers = HashMap::new();
        headers.insert(AUTH_TOKEN_HEADER.to_string(), MOCK_TOKEN.to_string());
        Self {
            base_url: MOCK_STORAGE_URL.to_string(),
            headers,
            fail: false,
            header_calls: AtomicUsize::new(0),
        }
    }

    /// Session whose header acquisition always fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Use a different storage URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Add a default header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Number of times headers were requested.
    pub fn header_calls(&self) -> usize {
        self.header_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageSession for MockSession {
    async fn headers(&self) -> Result<HashMap<String, String>, StorageError> {
        self.header_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SessionError::HeadersUnavailable {
                message: "mock session failure".to_string(),
            }
            .into());
        }
        Ok(self.headers.clone())
    }

    fn container_url(&self, container: &str) -> String {
        format!("{}/{}", self.base_url, container)
    }

    fn object_url(&self, container: &str, object: &str) -> String {
        format!("{}/{}/{}", self.base_url, container, object)
    }
}
