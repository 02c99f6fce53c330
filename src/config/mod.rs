//! Configuration types for the object storage client.
//!
//! This module provides the `StorageConfig` type: the storage URL of the
//! account, the pre-issued auth token, and HTTP transport settings.

use crate::error::{ConfigurationError, StorageError};
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

/// Configuration for the object storage client.
#[derive(Clone)]
pub struct StorageConfig {
    /// Account storage URL (e.g., `https://swift.example.com/v1/AUTH_acct`).
    pub storage_url: Url,

    /// Auth token sent as `X-Auth-Token`.
    pub auth_token: Option<SecretString>,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Read timeout for individual requests.
    pub read_timeout: Duration,

    /// Maximum idle connections kept per host.
    pub max_connections: u32,

    /// Idle connection timeout.
    pub idle_timeout: Duration,

    /// Verify SSL certificates.
    pub verify_ssl: bool,

    /// User-Agent header value.
    pub user_agent: String,
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("storage_url", &self.storage_url.as_str())
            .field(
                "auth_token",
                &self.auth_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("max_connections", &self.max_connections)
            .field("idle_timeout", &self.idle_timeout)
            .field("verify_ssl", &self.verify_ssl)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl StorageConfig {
    /// Create a new configuration builder.
    pub fn builder() -> StorageConfigBuilder {
        StorageConfigBuilder::default()
    }

    /// Storage URL without a trailing slash, ready for path joining.
    pub fn base_url(&self) -> &str {
        self.storage_url.as_str().trim_end_matches('/')
    }
}

/// Builder for storage configuration.
#[derive(Default)]
pub struct StorageConfigBuilder {
    storage_url: Option<String>,
    auth_token: Option<SecretString>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    max_connections: Option<u32>,
    idle_timeout: Option<Duration>,
    verify_ssl: Option<bool>,
    user_agent: Option<String>,
}

impl StorageConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the account storage URL.
    pub fn storage_url(mut self, url: impl Into<String>) -> Self {
        self.storage_url = Some(url.into());
        self
    }

    /// Set the auth token.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    pub fn max_connections(mut self, connections: u32) -> Self {
        self.max_connections = Some(connections);
        self
    }

    /// Set the idle connection timeout.
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }

    /// Enable or disable SSL verification.
    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = Some(verify);
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `OS_STORAGE_URL` and `OS_AUTH_TOKEN`, plus the
    /// `SWIFT_INTEGRATION_*` transport settings. Values already set on the
    /// builder are overwritten only when the variable is present.
    pub fn from_env(mut self) -> Self {
        if let Ok(url) = std::env::var("OS_STORAGE_URL") {
            self.storage_url = Some(url);
        }
        if let Ok(token) = std::env::var("OS_AUTH_TOKEN") {
            self.auth_token = Some(SecretString::new(token));
        }

        if let Ok(val) = std::env::var("SWIFT_INTEGRATION_CONNECT_TIMEOUT_MS") {
            if let Ok(ms) = val.parse() {
                self.connect_timeout = Some(Duration::from_millis(ms));
            }
        }
        if let Ok(val) = std::env::var("SWIFT_INTEGRATION_TIMEOUT_MS") {
            if let Ok(ms) = val.parse() {
                self.read_timeout = Some(Duration::from_millis(ms));
            }
        }
        if let Ok(val) = std::env::var("SWIFT_INTEGRATION_VERIFY_SSL") {
            self.verify_ssl = Some(val.to_lowercase() != "false");
        }

        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<StorageConfig, StorageError> {
        let raw_url = self
            .storage_url
            .ok_or(ConfigurationError::MissingStorageUrl)?;

        let storage_url = Url::parse(&raw_url).map_err(|e| {
            ConfigurationError::InvalidStorageUrl {
                url: raw_url.clone(),
                details: e.to_string(),
            }
        })?;

        if !matches!(storage_url.scheme(), "http" | "https") {
            return Err(ConfigurationError::InvalidStorageUrl {
                url: raw_url,
                details: format!("unsupported scheme '{}'", storage_url.scheme()),
            }
            .into());
        }

        if storage_url.query().is_some() {
            return Err(ConfigurationError::InvalidStorageUrl {
                url: raw_url,
                details: "storage URL must not carry a query string".to_string(),
            }
            .into());
        }

        let connect_timeout = self.connect_timeout.unwrap_or(Duration::from_secs(5));
        let read_timeout = self.read_timeout.unwrap_or(Duration::from_secs(30));

        for (field, value) in [("connect_timeout", connect_timeout), ("read_timeout", read_timeout)] {
            if value.is_zero() {
                return Err(ConfigurationError::InvalidConfiguration {
                    field: field.to_string(),
                    message: "Timeout must be greater than zero".to_string(),
                }
                .into());
            }
        }

        Ok(StorageConfig {
            storage_url,
            auth_token: self.auth_token,
            connect_timeout,
            read_timeout,
            max_connections: self.max_connections.unwrap_or(100),
            idle_timeout: self.idle_timeout.unwrap_or(Duration::from_secs(90)),
            verify_ssl: self.verify_ssl.unwrap_or(true),
            user_agent: self.user_agent.unwrap_or_else(|| {
                format!("swift-storage-integration/{}", env!("CARGO_PKG_VERSION"))
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_builder_defaults() {
        let config = StorageConfig::builder()
            .storage_url("https://swift.example.com/v1/AUTH_test")
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "https://swift.example.com/v1/AUTH_test");
        assert!(config.auth_token.is_none());
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.read_timeout, Duration::from_secs(30));
        assert_eq!(config.max_connections, 100);
        assert!(config.verify_ssl);
    }

    #[test]
    fn test_builder_with_token() {
        let config = StorageConfig::builder()
            .storage_url("http://localhost:8080/v1/AUTH_test/")
            .auth_token("tk-secret")
            .read_timeout(Duration::from_secs(60))
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "http://localhost:8080/v1/AUTH_test");
        assert_eq!(
            config.auth_token.as_ref().map(|t| t.expose_secret().as_str()),
            Some("tk-secret")
        );
        assert_eq!(config.read_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_missing_storage_url() {
        let result = StorageConfig::builder().build();
        assert!(matches!(
            result,
            Err(StorageError::Configuration(ConfigurationError::MissingStorageUrl))
        ));
    }

    #[test]
    fn test_invalid_storage_url() {
        assert!(StorageConfig::builder().storage_url("not a url").build().is_err());
        assert!(StorageConfig::builder()
            .storage_url("ftp://swift.example.com/v1")
            .build()
            .is_err());
        assert!(StorageConfig::builder()
            .storage_url("https://swift.example.com/v1?x=1")
            .build()
            .is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = StorageConfig::builder()
            .storage_url("https://swift.example.com/v1/AUTH_test")
            .connect_timeout(Duration::ZERO)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = StorageConfig::builder()
            .storage_url("https://swift.example.com/v1/AUTH_test")
            .auth_token("tk-secret")
            .build()
            .unwrap();

        let debug = format!("{:?}", config);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("tk-secret"));
    }
}
