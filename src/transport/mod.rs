//! HTTP transport layer for object storage requests.
//!
//! This module provides the HTTP transport abstraction the object operations
//! send their requests through. It handles connection pooling, timeouts, TLS
//! configuration and the status policy.

use crate::error::{NetworkError, RequestError, ResponseError, StorageError};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Accept value used when a request does not negotiate one itself.
pub const DEFAULT_ACCEPT: &str = "application/json";

/// HTTP request to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: String,
    /// Request URL.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Accept override; wins over any `Accept` entry in `headers`.
    pub accept: Option<String>,
    /// Request body.
    pub body: Option<Bytes>,
}

impl HttpRequest {
    /// Create a new HTTP request.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HashMap::new(),
            accept: None,
            body: None,
        }
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add multiple headers.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Override the Accept header.
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Headers as they go on the wire, with Accept negotiation applied.
    ///
    /// An explicit override replaces any `Accept` header. Without one, a
    /// caller-supplied `Accept` is kept, otherwise [`DEFAULT_ACCEPT`] is used.
    pub fn wire_headers(&self) -> HashMap<String, String> {
        let mut headers = self.headers.clone();
        match &self.accept {
            Some(accept) => {
                headers.retain(|name, _| !name.eq_ignore_ascii_case("accept"));
                headers.insert("Accept".to_string(), accept.clone());
            }
            None => {
                if !headers.keys().any(|name| name.eq_ignore_ascii_case("accept")) {
                    headers.insert("Accept".to_string(), DEFAULT_ACCEPT.to_string());
                }
            }
        }
        headers
    }

    /// Get a header value by name (case-insensitive).
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP response received.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value by name (case-insensitive).
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get the transaction ID the service assigned to the request.
    pub fn trans_id(&self) -> Option<&str> {
        self.get_header("x-trans-id")
            .or_else(|| self.get_header("x-openstack-request-id"))
    }
}

/// HTTP transport trait for making requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send an HTTP request and return the response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, StorageError>;
}

/// Default HTTP transport using reqwest.
pub struct ReqwestTransport {
    client: reqwest::Client,
    read_timeout: Duration,
    error_for_status: bool,
}

impl ReqwestTransport {
    /// Create a new transport with default settings.
    pub fn new() -> Result<Self, StorageError> {
        Self::builder().build()
    }

    /// Create a transport builder.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::new()
    }

    fn status_error(response: &HttpResponse) -> StorageError {
        let body = String::from_utf8_lossy(&response.body);
        StorageError::Response(ResponseError::UnexpectedStatus {
            status: response.status,
            message: body.chars().take(200).collect(),
            trans_id: response.trans_id().map(String::from),
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, StorageError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes()).map_err(|_| {
            StorageError::Request(RequestError::InvalidMethod {
                method: request.method.clone(),
            })
        })?;

        let url = reqwest::Url::parse(&request.url).map_err(|e| {
            StorageError::Request(RequestError::InvalidUrl {
                url: request.url.clone(),
                message: e.to_string(),
            })
        })?;

        let mut req_builder = self.client.request(method, url);

        for (name, value) in request.wire_headers() {
            req_builder = req_builder.header(name, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                StorageError::Network(NetworkError::Timeout {
                    duration: self.read_timeout,
                })
            } else if e.is_builder() {
                StorageError::Request(RequestError::InvalidHeader {
                    message: e.to_string(),
                })
            } else {
                StorageError::Network(NetworkError::ConnectionFailed {
                    message: e.to_string(),
                })
            }
        })?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());

        let body = response.bytes().await.map_err(|e| {
            StorageError::Response(ResponseError::BodyUnreadable {
                message: e.to_string(),
            })
        })?;

        debug!(status, body_len = body.len(), "Received response");

        let response = HttpResponse {
            status,
            headers,
            body,
        };

        if self.error_for_status && !response.is_success() {
            return Err(Self::status_error(&response));
        }

        Ok(response)
    }
}

/// Flatten response headers into a map.
///
/// Values are decoded as UTF-8 (lossily for other bytes) and repeated
/// names are joined with `", "`.
fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        match collected.entry(name.as_str().to_string()) {
            Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                existing.push_str(", ");
                existing.push_str(&value);
            }
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
        }
    }
    collected
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("error_for_status", &self.error_for_status)
            .finish_non_exhaustive()
    }
}

/// Builder for reqwest transport.
pub struct ReqwestTransportBuilder {
    connect_timeout: Duration,
    read_timeout: Duration,
    pool_max_idle_per_host: usize,
    pool_idle_timeout: Option<Duration>,
    verify_ssl: bool,
    user_agent: String,
    error_for_status: bool,
}

impl ReqwestTransportBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 100,
            pool_idle_timeout: Some(Duration::from_secs(90)),
            verify_ssl: true,
            user_agent: format!("swift-storage-integration/{}", env!("CARGO_PKG_VERSION")),
            error_for_status: true,
        }
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set the maximum idle connections per host.
    pub fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Set the idle connection timeout.
    pub fn pool_idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set whether to verify SSL certificates.
    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = verify;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Turn non-2xx responses into errors (the default) or hand them back.
    pub fn error_for_status(mut self, enabled: bool) -> Self {
        self.error_for_status = enabled;
        self
    }

    /// Build the transport.
    pub fn build(self) -> Result<ReqwestTransport, StorageError> {
        let client = reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.read_timeout)
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .pool_idle_timeout(self.pool_idle_timeout)
            .danger_accept_invalid_certs(!self.verify_ssl)
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| {
                StorageError::Network(NetworkError::TlsError {
                    message: e.to_string(),
                })
            })?;

        Ok(ReqwestTransport {
            client,
            read_timeout: self.read_timeout,
            error_for_status: self.error_for_status,
        })
    }
}

impl Default for ReqwestTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
