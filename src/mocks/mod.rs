//! Mock implementations for testing.
//!
//! This module provides mock sessions and transports plus shared fixtures.

mod session;
mod transport;

pub use session::{MockSession, MOCK_STORAGE_URL, MOCK_TOKEN};
pub use transport::{MockResponse, MockTransport};

use crate::types::*;
use std::collections::HashMap;

/// Test fixtures for object operations.
pub struct TestFixtures;

impl TestFixtures {
    /// Create a sample create request: `c1/o1`, `color=red`, content `hello`.
    pub fn sample_create() -> CreateOpts {
        CreateOpts::new("c1", "o1")
            .with_metadata("color", "red")
            .with_content("hello")
    }

    /// Create a sample copy request: `c1/o1` to `c2/o2`.
    pub fn sample_copy() -> CopyOpts {
        CopyOpts::new("c1", "o1", "c2", "o2")
    }

    /// Plain-text listing body, one name per line.
    pub fn plain_listing() -> &'static str {
        "file1.txt\nfile2.txt\nphotos/cat.jpg\n"
    }

    /// Structured JSON listing body.
    pub fn json_listing() -> &'static str {
        r#"[
    {"hash": "5d41402abc4b2a76b9719d911017c592", "last_modified": "2024-01-15T10:30:00.000000", "bytes": 5, "name": "file1.txt", "content_type": "text/plain"},
    {"hash": "7d793037a0760186574b0282f2f435e7", "last_modified": "2024-01-16T11:30:00.000000", "bytes": 5, "name": "file2.txt", "content_type": "text/plain"}
]"#
    }

    /// Headers of a successful HEAD/GET on an object.
    pub fn object_headers() -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "text/plain".to_string());
        headers.insert("Content-Length".to_string(), "5".to_string());
        headers.insert("Etag".to_string(), "5d41402abc4b2a76b9719d911017c592".to_string());
        headers.insert(
            "Last-Modified".to_string(),
            "Mon, 15 Jan 2024 10:30:00 GMT".to_string(),
        );
        headers.insert("X-Object-Meta-Color".to_string(), "red".to_string());
        headers.insert("X-Trans-Id".to_string(), "tx-test-0001".to_string());
        headers
    }
}
