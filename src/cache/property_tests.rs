//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the response cache against a simple model.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::thread::sleep;
use std::time::Duration;

use crate::cache::{CachedResponse, ResponseCache};

// == Test Configuration ==
const TEST_DEFAULT_TTL: u64 = 300;

// == Strategies ==
/// Generates URL-like cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "/api/[a-z]{1,12}".prop_map(|s| s),
        "/api/[a-z]{1,8}\\?[a-z]{1,4}=[a-z0-9]{1,4}".prop_map(|s| s),
        "view:/[a-z]{0,8}".prop_map(|s| s),
    ]
}

/// Generates response bodies
fn body_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 {}:\"]{1,128}".prop_map(|s| s)
}

fn cached(body: &str) -> CachedResponse {
    CachedResponse::new(None, body.to_string())
}

/// Cache operations for model-based testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, body: String },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), body_strategy()).prop_map(|(key, body)| CacheOp::Set { key, body }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // The cache behaves like a map with one entry per key, and hit/miss
    // counters match the lookups that found or missed a key.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = ResponseCache::new(TEST_DEFAULT_TTL);
        let mut model: HashMap<String, String> = HashMap::new();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            match op {
                CacheOp::Set { key, body } => {
                    store.set(key.clone(), cached(&body), None).unwrap();
                    model.insert(key, body);
                }
                CacheOp::Get { key } => {
                    let got = store.get(&key);
                    match model.get(&key) {
                        Some(body) => {
                            expected_hits += 1;
                            prop_assert_eq!(got, Some(cached(body)));
                        }
                        None => {
                            expected_misses += 1;
                            prop_assert!(got.is_none());
                        }
                    }
                }
                CacheOp::Delete { key } => {
                    prop_assert_eq!(store.delete(&key), model.remove(&key).is_some());
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.keys, model.len());
        prop_assert_eq!(store.len(), model.len());
    }

    // Clearing with a pattern removes exactly the keys containing it.
    #[test]
    fn prop_clear_pattern_removes_only_matches(
        entries in prop::collection::vec((key_strategy(), body_strategy()), 0..40),
        pattern in prop_oneof![
            Just("menu".to_string()),
            Just("view:".to_string()),
            Just("?".to_string()),
            "[a-z]{1,3}".prop_map(|s| s),
        ]
    ) {
        let mut store = ResponseCache::new(TEST_DEFAULT_TTL);
        let mut keys = HashSet::new();
        for (key, body) in entries {
            store.set(key.clone(), cached(&body), None).unwrap();
            keys.insert(key);
        }

        let expected_removed = keys.iter().filter(|k| k.contains(pattern.as_str())).count();
        let removed = store.clear(Some(pattern.as_str()));

        prop_assert_eq!(removed, expected_removed);
        for key in store.keys() {
            prop_assert!(!key.contains(pattern.as_str()), "key {} should have been cleared", key);
        }
        let survivors: HashSet<String> = store.keys().into_iter().collect();
        let expected: HashSet<String> = keys
            .into_iter()
            .filter(|k| !k.contains(pattern.as_str()))
            .collect();
        prop_assert_eq!(survivors, expected);
    }

    // Clearing without a pattern flushes everything.
    #[test]
    fn prop_clear_all_flushes(
        entries in prop::collection::vec((key_strategy(), body_strategy()), 0..40)
    ) {
        let mut store = ResponseCache::new(TEST_DEFAULT_TTL);
        for (key, body) in entries {
            store.set(key, cached(&body), None).unwrap();
        }

        let count = store.len();
        prop_assert_eq!(store.clear(None), count);
        prop_assert!(store.is_empty());
        prop_assert_eq!(store.stats().value_size, 0);
    }
}

// Fewer cases for the time-sensitive TTL property
proptest! {
    #![proptest_config(ProptestConfig::with_cases(3))]

    // After the TTL has elapsed a lookup misses.
    #[test]
    fn prop_ttl_expiration(key in key_strategy(), body in body_strategy()) {
        let mut store = ResponseCache::new(TEST_DEFAULT_TTL);

        store.set(key.clone(), cached(&body), Some(1)).unwrap();
        prop_assert_eq!(store.get(&key), Some(cached(&body)));

        sleep(Duration::from_millis(1100));

        prop_assert!(store.get(&key).is_none());
    }
}
