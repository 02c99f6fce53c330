//! Object storage client implementation.
//!
//! This module provides the main client interface and builder.

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::services::ObjectsService;
use crate::session::{StorageSession, TokenSession};
use crate::transport::{HttpTransport, ReqwestTransport};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Object storage client trait.
pub trait StorageClient: Send + Sync {
    /// Get the objects service.
    fn objects(&self) -> &ObjectsService;

    /// Get the client configuration.
    fn config(&self) -> &StorageConfig;
}

/// Object storage client implementation.
pub struct StorageClientImpl {
    config: Arc<StorageConfig>,
    session: Arc<dyn StorageSession>,
    transport: Arc<dyn HttpTransport>,

    objects: OnceCell<ObjectsService>,
}

impl StorageClientImpl {
    /// Create a new client from its parts.
    pub fn new(
        config: StorageConfig,
        session: Arc<dyn StorageSession>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            session,
            transport,
            objects: OnceCell::new(),
        }
    }
}

impl StorageClient for StorageClientImpl {
    fn objects(&self) -> &ObjectsService {
        self.objects
            .get_or_init(|| ObjectsService::new(self.session.clone(), self.transport.clone()))
    }

    fn config(&self) -> &StorageConfig {
        &self.config
    }
}

impl std::fmt::Debug for StorageClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageClientImpl")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for the object storage client.
pub struct StorageClientBuilder {
    config: Option<StorageConfig>,
    from_env: bool,
    session: Option<Arc<dyn StorageSession>>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl StorageClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            from_env: false,
            session: None,
            transport: None,
        }
    }

    /// Use the provided configuration.
    pub fn config(mut self, config: StorageConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env(mut self) -> Self {
        self.from_env = true;
        self
    }

    /// Use a custom session instead of the configured token.
    pub fn session(mut self, session: Arc<dyn StorageSession>) -> Self {
        self.session = Some(session);
        self
    }

    /// Use a custom HTTP transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<StorageClientImpl, StorageError> {
        let config = match self.config {
            Some(config) => config,
            None if self.from_env => StorageConfig::builder().from_env().build()?,
            None => StorageConfig::builder().build()?,
        };

        let session = match self.session {
            Some(session) => session,
            None => Arc::new(TokenSession::from_config(&config)),
        };

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let builder = ReqwestTransport::builder()
                    .connect_timeout(config.connect_timeout)
                    .read_timeout(config.read_timeout)
                    .pool_max_idle_per_host(config.max_connections as usize)
                    .pool_idle_timeout(Some(config.idle_timeout))
                    .verify_ssl(config.verify_ssl)
                    .user_agent(config.user_agent.clone());

                Arc::new(builder.build()?)
            }
        };

        Ok(StorageClientImpl::new(config, session, transport))
    }
}

impl Default for StorageClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockResponse, MockTransport};
    use crate::types::GetOpts;

    fn config() -> StorageConfig {
        StorageConfig::builder()
            .storage_url("https://swift.example.com/v1/AUTH_test")
            .auth_token("tk")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_storage_url() {
        let result = StorageClientBuilder::new().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_with_config() {
        let client = StorageClientBuilder::new().config(config()).build().unwrap();
        assert_eq!(client.config().base_url(), "https://swift.example.com/v1/AUTH_test");
    }

    #[tokio::test]
    async fn test_objects_use_configured_token() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
        let client = StorageClientBuilder::new()
            .config(config())
            .transport(transport.clone())
            .build()
            .unwrap();

        client.objects().get(GetOpts::new("c1", "o1")).await.unwrap();

        let recorded = transport.last_request().unwrap();
        assert_eq!(recorded.method, "HEAD");
        assert_eq!(recorded.url, "https://swift.example.com/v1/AUTH_test/c1/o1");
        assert_eq!(recorded.get_header("X-Auth-Token"), Some("tk"));
    }
}
