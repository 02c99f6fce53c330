//! Error types for the object storage integration.
//!
//! Errors are categorized by their source so callers can tell a failure to
//! obtain session headers apart from a failed request.

use std::time::Duration;
use thiserror::Error;

/// Top-level error type for the object storage integration.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Session header acquisition errors.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Request construction errors.
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Network and transport errors.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Unsuccessful or unreadable responses.
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Request body transfer errors.
    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),
}

impl StorageError {
    /// Returns the HTTP status code if the service answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            StorageError::Response(ResponseError::UnexpectedStatus { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the service reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Returns the `X-Trans-Id` of the failed request, if known.
    pub fn trans_id(&self) -> Option<&str> {
        match self {
            StorageError::Response(ResponseError::UnexpectedStatus { trans_id, .. }) => {
                trans_id.as_deref()
            }
            _ => None,
        }
    }
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No storage URL was configured.
    #[error("Missing storage URL: storage URL must be specified via config or environment")]
    MissingStorageUrl,

    /// Invalid storage URL.
    #[error("Invalid storage URL: {url} - {details}")]
    InvalidStorageUrl {
        /// The invalid URL.
        url: String,
        /// Details about the validation error.
        details: String,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {field} - {message}")]
    InvalidConfiguration {
        /// The configuration field name.
        field: String,
        /// Error message.
        message: String,
    },
}

/// Errors raised while obtaining the per-request session headers.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No auth token is available.
    #[error("Missing auth token: no token is configured for this session")]
    MissingToken,

    /// The session could not produce headers.
    #[error("Header acquisition failed: {message}")]
    HeadersUnavailable {
        /// Details about the failure.
        message: String,
    },
}

/// Request construction errors.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Invalid HTTP method.
    #[error("Invalid HTTP method '{method}'")]
    InvalidMethod {
        /// The rejected method.
        method: String,
    },

    /// Invalid request URL.
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Parser message.
        message: String,
    },

    /// The HTTP client rejected a header name or value.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Details about the problem.
        message: String,
    },
}

/// Network and transport errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection failed.
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Details about the connection failure.
        message: String,
    },

    /// Request timed out.
    #[error("Request timed out after {duration:?}")]
    Timeout {
        /// The timeout that elapsed.
        duration: Duration,
    },

    /// TLS or HTTP client setup failure.
    #[error("TLS error: {message}")]
    TlsError {
        /// Details about the TLS error.
        message: String,
    },
}

/// Response errors.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The service answered with a non-successful status.
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Leading part of the response body.
        message: String,
        /// Transaction ID reported by the service.
        trans_id: Option<String>,
    },

    /// The response body could not be read.
    #[error("Failed to read response body: {message}")]
    BodyUnreadable {
        /// Details about the failure.
        message: String,
    },
}

/// Request body transfer errors.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The content source yielded fewer bytes than declared, or failed.
    #[error("Failed to read {expected} bytes of object content: {source}")]
    ContentRead {
        /// Declared content length.
        expected: u64,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Declared content length does not fit in memory.
    #[error("Content too large: {length} bytes cannot be buffered")]
    ContentTooLarge {
        /// Declared content length.
        length: u64,
    },
}
