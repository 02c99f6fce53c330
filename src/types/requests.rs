//! Option bundles for object operations.
//!
//! Each bundle is consumed by exactly one call. `params` become the query
//! string, `headers` are merged verbatim, and `metadata` entries are sent as
//! `X-Object-Meta-<key>` headers.

use super::common::ObjectContent;
use std::collections::{BTreeMap, HashMap};

/// Options for listing the objects in a container.
#[derive(Debug, Clone, Default)]
pub struct ListOpts {
    /// Container to list.
    pub container: String,
    /// Request the structured listing instead of plain names.
    ///
    /// When false the service is asked for `text/plain`, one name per line.
    pub full: bool,
    /// Query parameters (`prefix`, `limit`, `marker`, ...).
    pub params: BTreeMap<String, String>,
    /// Additional request headers.
    pub headers: HashMap<String, String>,
}

impl ListOpts {
    /// Create options listing `container` by name only.
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            ..Default::default()
        }
    }

    /// Request the structured listing.
    pub fn with_full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }

    /// Add a query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for downloading an object's content and metadata.
#[derive(Debug, Clone, Default)]
pub struct DownloadOpts {
    /// Container holding the object.
    pub container: String,
    /// Object name.
    pub name: String,
    /// Query parameters.
    pub params: BTreeMap<String, String>,
    /// Additional request headers (`Range`, `If-Match`, ...).
    pub headers: HashMap<String, String>,
}

impl DownloadOpts {
    /// Create options for downloading `container/name`.
    pub fn new(container: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for creating or replacing an object.
#[derive(Debug, Default)]
pub struct CreateOpts {
    /// Container to store the object in.
    pub container: String,
    /// Object name.
    pub name: String,
    /// Object content; `None` creates an empty object.
    pub content: Option<ObjectContent>,
    /// Query parameters.
    pub params: BTreeMap<String, String>,
    /// Additional request headers (`Content-Type`, `X-Delete-After`, ...).
    pub headers: HashMap<String, String>,
    /// Custom object metadata.
    pub metadata: HashMap<String, String>,
}

impl CreateOpts {
    /// Create options for writing `container/name`.
    pub fn new(container: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the object content.
    pub fn with_content(mut self, content: impl Into<ObjectContent>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Add a query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add metadata.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Options for copying an object server-side.
#[derive(Debug, Clone, Default)]
pub struct CopyOpts {
    /// Source container.
    pub container: String,
    /// Source object name.
    pub name: String,
    /// Destination container.
    pub new_container: String,
    /// Destination object name.
    pub new_name: String,
    /// Additional request headers. A `Destination` entry is always replaced.
    pub headers: HashMap<String, String>,
    /// Metadata to set on the copy.
    pub metadata: HashMap<String, String>,
}

impl CopyOpts {
    /// Create options copying `container/name` to `new_container/new_name`.
    pub fn new(
        container: impl Into<String>,
        name: impl Into<String>,
        new_container: impl Into<String>,
        new_name: impl Into<String>,
    ) -> Self {
        Self {
            container: container.into(),
            name: name.into(),
            new_container: new_container.into(),
            new_name: new_name.into(),
            ..Default::default()
        }
    }

    /// The `Destination` header value for this copy.
    pub fn destination(&self) -> String {
        format!("/{}/{}", self.new_container, self.new_name)
    }

    /// Add a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add metadata.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Options for deleting an object.
#[derive(Debug, Clone, Default)]
pub struct DeleteOpts {
    /// Container holding the object.
    pub container: String,
    /// Object name.
    pub name: String,
    /// Query parameters (`multipart-manifest`, ...).
    pub params: BTreeMap<String, String>,
    /// Additional request headers.
    pub headers: HashMap<String, String>,
}

impl DeleteOpts {
    /// Create options deleting `container/name`.
    pub fn new(container: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for fetching an object's metadata (HEAD).
#[derive(Debug, Clone, Default)]
pub struct GetOpts {
    /// Container holding the object.
    pub container: String,
    /// Object name.
    pub name: String,
    /// Additional request headers.
    pub headers: HashMap<String, String>,
}

impl GetOpts {
    /// Create options for `container/name`.
    pub fn new(container: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for setting, replacing or clearing an object's metadata.
#[derive(Debug, Clone, Default)]
pub struct UpdateOpts {
    /// Container holding the object.
    pub container: String,
    /// Object name.
    pub name: String,
    /// Additional request headers.
    pub headers: HashMap<String, String>,
    /// Metadata to set. The service replaces all existing custom metadata.
    pub metadata: HashMap<String, String>,
}

impl UpdateOpts {
    /// Create options updating `container/name`.
    pub fn new(container: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add metadata.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
