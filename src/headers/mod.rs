//! Per-request header assembly.
//!
//! Every operation builds a fresh [`HeaderSet`] from the session defaults,
//! then layers custom headers and metadata on top. Names compare
//! case-insensitively, so a later `content-type` replaces an earlier
//! `Content-Type` instead of producing two entries.
//!
//! Within one layer, entries are applied in byte order of their names. When
//! two caller keys differ only by case (`Color` and `color`), the one that
//! sorts last wins.

use crate::encoding::metadata_header;
use std::collections::{BTreeMap, HashMap};

/// Header collection for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: HashMap<String, String>,
}

impl HeaderSet {
    /// Create an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the session's default headers.
    pub fn from_defaults(defaults: HashMap<String, String>) -> Self {
        let mut set = Self::new();
        set.extend(defaults);
        set
    }

    /// Insert a header, replacing any existing entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.entries.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.entries.insert(name, value.into());
    }

    /// Insert every header from `headers`.
    pub fn extend<I, K, V>(&mut self, headers: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.insert(name, value);
        }
    }

    /// Layer custom headers over the current entries.
    pub fn with_custom(mut self, headers: &HashMap<String, String>) -> Self {
        self.extend(sorted(headers));
        self
    }

    /// Layer metadata over the current entries as `X-Object-Meta-*` headers.
    pub fn with_metadata(mut self, metadata: &HashMap<String, String>) -> Self {
        for (key, value) in sorted(metadata) {
            self.insert(metadata_header(key), value);
        }
        self
    }

    /// Set a single header, overriding anything layered before it.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a header by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the set into a plain map.
    pub fn into_map(self) -> HashMap<String, String> {
        self.entries
    }
}

fn sorted(map: &HashMap<String, String>) -> BTreeMap<&str, &str> {
    map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}
