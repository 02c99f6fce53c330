//! Property tests for query and metadata header construction.

use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};
use swift_storage::encoding::build_query;
use swift_storage::{HeaderSet, METADATA_PREFIX};
use url::form_urlencoded;

proptest! {
    #[test]
    fn query_round_trips(params in prop::collection::btree_map(".{1,12}", ".{0,12}", 1..8)) {
        let query = build_query(&params);

        prop_assert!(query.starts_with('?'));
        let encoded = &query[1..];
        prop_assert_eq!(encoded.split('&').count(), params.len());

        let decoded: BTreeMap<String, String> = form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();
        prop_assert_eq!(decoded, params);
    }

    #[test]
    fn query_has_no_raw_delimiters_in_pairs(
        params in prop::collection::btree_map("[a-z&=?# ]{1,8}", "[a-z&=?# ]{0,8}", 1..5)
    ) {
        let query = build_query(&params);
        for pair in query[1..].split('&') {
            prop_assert_eq!(pair.matches('=').count(), 1);
            prop_assert!(!pair.contains('?'));
            prop_assert!(!pair.contains('#'));
            prop_assert!(!pair.contains(' '));
        }
    }

    #[test]
    fn metadata_entry_becomes_one_prefixed_header(
        metadata in prop::collection::hash_map("[A-Za-z0-9-]{1,10}", "[ -~]{0,16}", 0..6)
    ) {
        // Keys differing only by case collapse; the byte-order last key wins.
        let mut winners: BTreeMap<String, (&String, &String)> = BTreeMap::new();
        for (key, value) in &metadata {
            let slot = winners.entry(key.to_ascii_lowercase()).or_insert((key, value));
            if key > slot.0 {
                *slot = (key, value);
            }
        }

        let headers = HeaderSet::new().with_metadata(&metadata).into_map();

        prop_assert_eq!(headers.len(), winners.len());
        for (key, value) in winners.values() {
            let name = format!("{}{}", METADATA_PREFIX, key);
            prop_assert_eq!(headers.get(&name), Some(*value));
        }
    }
}

#[test]
fn empty_params_yield_empty_query() {
    assert_eq!(build_query(&BTreeMap::new()), "");
}

#[test]
fn metadata_prefix_matches_service_convention() {
    let mut metadata = HashMap::new();
    metadata.insert("color".to_string(), "red".to_string());
    let headers = HeaderSet::new().with_metadata(&metadata).into_map();
    assert_eq!(headers.get("X-Object-Meta-color"), Some(&"red".to_string()));
}
