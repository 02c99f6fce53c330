//! Query string, path and header encoding helpers.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::{BTreeMap, HashMap};
use url::form_urlencoded;

/// Prefix the service expects on custom object metadata headers.
pub const METADATA_PREFIX: &str = "X-Object-Meta-";

/// Characters percent-encoded in a single path segment.
const PATH_SEGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/');

/// Characters percent-encoded in an object path; `/` separates pseudo-directories.
const OBJECT_PATH_SET: &AsciiSet = &PATH_SEGMENT_SET.remove(b'/');

/// Build a `?`-prefixed, form-encoded query string.
///
/// Keys are emitted in sorted order. An empty mapping yields an empty string.
pub fn build_query(params: &BTreeMap<String, String>) -> String {
    if params.is_empty() {
        return String::new();
    }

    let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Percent-encode a container name for use as one path segment.
pub fn encode_container(container: &str) -> String {
    utf8_percent_encode(container, PATH_SEGMENT_SET).to_string()
}

/// Percent-encode an object name, keeping `/` separators intact.
pub fn encode_object(object: &str) -> String {
    utf8_percent_encode(object, OBJECT_PATH_SET).to_string()
}

/// Header name carrying the metadata entry `key`.
pub fn metadata_header(key: &str) -> String {
    format!("{}{}", METADATA_PREFIX, key)
}

/// Collect custom metadata from response headers, stripping the prefix.
pub fn extract_metadata(headers: &HashMap<String, String>) -> HashMap<String, String> {
    let prefix_len = METADATA_PREFIX.len();
    headers
        .iter()
        .filter(|(name, _)| {
            name.len() > prefix_len
                && name.is_char_boundary(prefix_len)
                && name[..prefix_len].eq_ignore_ascii_case(METADATA_PREFIX)
        })
        .map(|(name, value)| (name[prefix_len..].to_string(), value.clone()))
        .collect()
}
