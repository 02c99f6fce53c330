//! Session handles for object storage requests.
//!
//! A session supplies what every request needs from the account: the base
//! headers (authentication) and the container and object URLs. Sessions are
//! passed explicitly to the operations and are not mutated by them.

use crate::config::StorageConfig;
use crate::encoding::{encode_container, encode_object};
use crate::error::{SessionError, StorageError};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::fmt;

/// Header carrying the auth token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Source of base headers and resource URLs.
#[async_trait]
pub trait StorageSession: Send + Sync {
    /// Produce the base headers for one request.
    async fn headers(&self) -> Result<HashMap<String, String>, StorageError>;

    /// URL addressing a container.
    fn container_url(&self, container: &str) -> String;

    /// URL addressing an object within a container.
    fn object_url(&self, container: &str, object: &str) -> String;
}

/// Session backed by a storage URL and a pre-issued auth token.
#[derive(Clone)]
pub struct TokenSession {
    base_url: String,
    token: Option<SecretString>,
}

impl TokenSession {
    /// Create a session for `storage_url` authenticated with `token`.
    pub fn new(storage_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: storage_url.into().trim_end_matches('/').to_string(),
            token: Some(SecretString::new(token.into())),
        }
    }

    /// Create a session from client configuration.
    ///
    /// A configuration without a token yields a session whose
    /// [`headers`](StorageSession::headers) call fails.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            token: config.auth_token.clone(),
        }
    }

    /// The storage URL requests are addressed under.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl StorageSession for TokenSession {
    async fn headers(&self) -> Result<HashMap<String, String>, StorageError> {
        let token = self.token.as_ref().ok_or(SessionError::MissingToken)?;

        let mut headers = HashMap::new();
        headers.insert(
            AUTH_TOKEN_HEADER.to_string(),
            token.expose_secret().clone(),
        );
        Ok(headers)
    }

    fn container_url(&self, container: &str) -> String {
        format!("{}/{}", self.base_url, encode_container(container))
    }

    fn object_url(&self, container: &str, object: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            encode_container(container),
            encode_object(object)
        )
    }
}

impl fmt::Debug for TokenSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSession")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
