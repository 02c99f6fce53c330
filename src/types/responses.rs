//! Response wrapper for object operations.

use crate::encoding::extract_metadata;
use crate::transport::HttpResponse;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;

/// Raw service response, passed back unmodified.
///
/// The accessors give extraction code a stable contract over status, headers
/// and body without depending on the HTTP client in use.
#[derive(Debug, Clone)]
pub struct ObjectResponse {
    inner: HttpResponse,
}

impl ObjectResponse {
    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.inner.is_success()
    }

    /// Look up a header (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.get_header(name)
    }

    /// All response headers.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.inner.headers
    }

    /// Response body.
    pub fn body(&self) -> &Bytes {
        &self.inner.body
    }

    /// Consume the response, returning the body.
    pub fn into_body(self) -> Bytes {
        self.inner.body
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.inner.body).into_owned()
    }

    /// `Content-Length` header.
    pub fn content_length(&self) -> Option<u64> {
        self.header("content-length").and_then(|v| v.parse().ok())
    }

    /// `Content-Type` header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// `ETag` header.
    pub fn etag(&self) -> Option<&str> {
        self.header("etag")
    }

    /// `Last-Modified` header parsed as an HTTP date.
    pub fn last_modified(&self) -> Option<DateTime<FixedOffset>> {
        self.header("last-modified")
            .and_then(|v| DateTime::parse_from_rfc2822(v).ok())
    }

    /// Transaction ID assigned by the service.
    pub fn trans_id(&self) -> Option<&str> {
        self.inner.trans_id()
    }

    /// Custom metadata carried in `X-Object-Meta-*` headers, prefix stripped.
    pub fn metadata(&self) -> HashMap<String, String> {
        extract_metadata(&self.inner.headers)
    }
}

impl From<HttpResponse> for ObjectResponse {
    fn from(inner: HttpResponse) -> Self {
        Self { inner }
    }
}

impl From<ObjectResponse> for HttpResponse {
    fn from(response: ObjectResponse) -> Self {
        response.inner
    }
}
