//! OpenStack Swift Object Operations
//!
//! Type-safe request construction for the object API of Swift-compatible
//! object storage.
//!
//! # Features
//!
//! - **Object Operations**: List, Download, Create, Copy, Delete, Get, Update
//! - **Metadata**: Custom metadata sent as `X-Object-Meta-*` headers
//! - **Pass-through Responses**: Status, headers and body returned as received
//! - **Pluggable Collaborators**: Session and transport are traits
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use swift_storage::{CreateOpts, StorageClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), swift_storage::StorageError> {
//!     // Reads OS_STORAGE_URL and OS_AUTH_TOKEN
//!     let client = swift_storage::create_client_from_env()?;
//!
//!     client
//!         .objects()
//!         .create(
//!             CreateOpts::new("photos", "hello.txt")
//!                 .with_metadata("owner", "ops")
//!                 .with_content("Hello, Swift!"),
//!         )
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod encoding;
pub mod error;
pub mod headers;
pub mod mocks;
pub mod services;
pub mod session;
pub mod transport;
pub mod types;

// Re-export main types at crate root
pub use client::{StorageClient, StorageClientBuilder, StorageClientImpl};
pub use config::{StorageConfig, StorageConfigBuilder};
pub use encoding::{build_query, METADATA_PREFIX};
pub use error::{
    ConfigurationError, NetworkError, RequestError, ResponseError, SessionError, StorageError,
    TransferError,
};
pub use headers::HeaderSet;
pub use services::ObjectsService;
pub use session::{StorageSession, TokenSession};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{
    CopyOpts, CreateOpts, DeleteOpts, DownloadOpts, GetOpts, ListOpts, ObjectContent,
    ObjectResponse, UpdateOpts,
};

/// Create a new client from environment variables.
///
/// This will read:
/// - `OS_STORAGE_URL` for the account storage URL
/// - `OS_AUTH_TOKEN` for the auth token
/// - `SWIFT_INTEGRATION_*` for transport settings
pub fn create_client_from_env() -> Result<StorageClientImpl> {
    StorageClientBuilder::new().from_env().build()
}

/// Create a new client with explicit configuration.
///
/// # Example
///
/// ```rust,no_run
/// use swift_storage::StorageConfig;
///
/// let config = StorageConfig::builder()
///     .storage_url("https://swift.example.com/v1/AUTH_acct")
///     .auth_token("gAAAAAB...")
///     .build()?;
///
/// let client = swift_storage::create_client(config)?;
/// # Ok::<(), swift_storage::StorageError>(())
/// ```
pub fn create_client(config: StorageConfig) -> Result<StorageClientImpl> {
    StorageClientBuilder::new().config(config).build()
}

/// Result type alias for object storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        let config = StorageConfig::builder()
            .storage_url("https://swift.example.com/v1/AUTH_acct")
            .auth_token("tk")
            .build()
            .unwrap();

        let client = create_client(config).unwrap();
        assert_eq!(client.config().base_url(), "https://swift.example.com/v1/AUTH_acct");
    }
}
