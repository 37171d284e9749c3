//! Query Cache Policy
//!
//! Clock-injected bookkeeping behind the resource fetch layer: cache keys,
//! staleness and retention windows, retry backoff and prefix invalidation.
//! The async fetch glue lives in the UI crate; everything here is pure.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::pagination::Pagination;

/// Normalized query-parameter set. A `BTreeMap` keeps the pairs sorted so two
/// call sites building the same parameters hash identically.
pub type Params = BTreeMap<String, String>;

/// Cache key: endpoint path plus its normalized parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub path: String,
    pub params: Params,
}

impl QueryKey {
    /// Empty-valued parameters are dropped during normalization.
    pub fn new(path: impl Into<String>, params: &Params) -> Self {
        let params = params
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Self {
            path: path.into(),
            params,
        }
    }

    pub fn matches_prefix(&self, base_path: &str) -> bool {
        self.path.starts_with(base_path)
    }
}

/// Staleness and retention windows, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CachePolicy {
    pub stale_ms: f64,
    pub gc_ms: f64,
}

/// List-style resources: 2 minutes stale, 5 minutes retained.
pub const LIST_POLICY: CachePolicy = CachePolicy {
    stale_ms: 120_000.0,
    gc_ms: 300_000.0,
};

/// Single-resource fetches: 5 minutes stale, 10 minutes retained.
pub const DETAIL_POLICY: CachePolicy = CachePolicy {
    stale_ms: 300_000.0,
    gc_ms: 600_000.0,
};

/// Bounded retry attempts per fetch.
pub const MAX_ATTEMPTS: u32 = 3;

const BACKOFF_BASE_MS: u32 = 1_000;
const BACKOFF_CAP_MS: u32 = 30_000;

/// Exponential backoff delay before retry number `attempt` (0-based),
/// capped at [`BACKOFF_CAP_MS`].
pub fn backoff_delay(attempt: u32) -> u32 {
    BACKOFF_BASE_MS
        .saturating_mul(2u32.saturating_pow(attempt))
        .min(BACKOFF_CAP_MS)
}

/// Parameter sets for the pages adjacent to a fetched page, used to warm
/// the cache ahead of the next navigation. Out-of-range neighbors are
/// skipped.
pub fn adjacent_page_params(params: &Params, pagination: &Pagination) -> Vec<Params> {
    [pagination.prev_page(), pagination.next_page()]
        .into_iter()
        .flatten()
        .map(|page| {
            let mut warmed = params.clone();
            warmed.insert("page".to_string(), page.to_string());
            warmed
        })
        .collect()
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    updated_at: f64,
    policy: CachePolicy,
}

/// Outcome of a cache lookup at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Within the staleness window; serve without refetching.
    Fresh(Value),
    /// Past staleness but still retained; serve and revalidate.
    Stale(Value),
    Miss,
}

/// Keyed response cache. The caller supplies `now` (milliseconds since the
/// epoch) so the policy stays testable without a real clock.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, key: &QueryKey, now: f64) -> Lookup {
        match self.entries.get(key) {
            Some(entry) => {
                let age = now - entry.updated_at;
                if age <= entry.policy.stale_ms {
                    Lookup::Fresh(entry.value.clone())
                } else if age <= entry.policy.gc_ms {
                    Lookup::Stale(entry.value.clone())
                } else {
                    Lookup::Miss
                }
            }
            None => Lookup::Miss,
        }
    }

    pub fn insert(&mut self, key: QueryKey, value: Value, policy: CachePolicy, now: f64) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                updated_at: now,
                policy,
            },
        );
    }

    /// Drop every entry whose path shares the mutated resource's base path,
    /// forcing affected reads to refetch.
    pub fn invalidate_prefix(&mut self, base_path: &str) {
        self.entries.retain(|key, _| !key.matches_prefix(base_path));
    }

    /// Evict entries past their retention window.
    pub fn sweep(&mut self, now: f64) {
        self.entries
            .retain(|_, entry| now - entry.updated_at <= entry.policy.gc_ms);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn key_normalization_ignores_insertion_order_and_empty_values() {
        let a = QueryKey::new(
            "/exercises",
            &params(&[("page", "1"), ("limit", "10"), ("search", "")]),
        );
        let b = QueryKey::new("/exercises", &params(&[("limit", "10"), ("page", "1")]));
        assert_eq!(a, b);
    }

    #[test]
    fn lookup_transitions_fresh_stale_miss() {
        let mut cache = QueryCache::new();
        let key = QueryKey::new("/exercises", &params(&[("page", "1")]));
        cache.insert(key.clone(), json!({"total": 25}), LIST_POLICY, 0.0);

        assert_eq!(
            cache.lookup(&key, 60_000.0),
            Lookup::Fresh(json!({"total": 25}))
        );
        assert_eq!(
            cache.lookup(&key, 200_000.0),
            Lookup::Stale(json!({"total": 25}))
        );
        assert_eq!(cache.lookup(&key, 400_000.0), Lookup::Miss);
    }

    #[test]
    fn detail_policy_has_wider_windows() {
        let mut cache = QueryCache::new();
        let key = QueryKey::new("/exercises/5", &Params::new());
        cache.insert(key.clone(), json!({"id": 5}), DETAIL_POLICY, 0.0);

        assert!(matches!(cache.lookup(&key, 200_000.0), Lookup::Fresh(_)));
        assert!(matches!(cache.lookup(&key, 400_000.0), Lookup::Stale(_)));
    }

    #[test]
    fn invalidate_prefix_drops_list_and_detail_entries() {
        let mut cache = QueryCache::new();
        cache.insert(
            QueryKey::new("/exercises", &params(&[("page", "1")])),
            json!([]),
            LIST_POLICY,
            0.0,
        );
        cache.insert(
            QueryKey::new("/exercises/5", &Params::new()),
            json!({}),
            DETAIL_POLICY,
            0.0,
        );
        cache.insert(
            QueryKey::new("/employees", &Params::new()),
            json!([]),
            LIST_POLICY,
            0.0,
        );

        cache.invalidate_prefix("/exercises");
        assert_eq!(cache.len(), 1);
        assert!(matches!(
            cache.lookup(&QueryKey::new("/employees", &Params::new()), 0.0),
            Lookup::Fresh(_)
        ));
    }

    #[test]
    fn sweep_evicts_only_expired_entries() {
        let mut cache = QueryCache::new();
        cache.insert(
            QueryKey::new("/old", &Params::new()),
            json!(1),
            LIST_POLICY,
            0.0,
        );
        cache.insert(
            QueryKey::new("/new", &Params::new()),
            json!(2),
            LIST_POLICY,
            250_000.0,
        );

        cache.sweep(310_000.0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn adjacent_page_params_skip_out_of_range_neighbors() {
        let base = params(&[("page", "2"), ("limit", "10")]);

        let middle = adjacent_page_params(&base, &Pagination::new(2, 10, 25));
        assert_eq!(middle.len(), 2);
        assert_eq!(middle[0]["page"], "1");
        assert_eq!(middle[1]["page"], "3");
        assert_eq!(middle[0]["limit"], "10");

        let first = adjacent_page_params(&base, &Pagination::new(1, 10, 25));
        assert_eq!(first.len(), 1);
        assert_eq!(first[0]["page"], "2");

        let last = adjacent_page_params(&base, &Pagination::new(3, 10, 25));
        assert_eq!(last.len(), 1);
        assert_eq!(last[0]["page"], "2");
    }

    #[test]
    fn warmed_adjacent_page_serves_the_next_read_fresh() {
        let mut cache = QueryCache::new();
        let base = params(&[("page", "2"), ("limit", "10")]);
        for warmed in adjacent_page_params(&base, &Pagination::new(2, 10, 25)) {
            cache.insert(
                QueryKey::new("/exercises", &warmed),
                json!({ "page": warmed["page"] }),
                LIST_POLICY,
                0.0,
            );
        }

        let next = QueryKey::new("/exercises", &params(&[("page", "3"), ("limit", "10")]));
        assert!(matches!(cache.lookup(&next, 1_000.0), Lookup::Fresh(_)));
    }

    #[test]
    fn backoff_doubles_and_caps() {
        assert_eq!(backoff_delay(0), 1_000);
        assert_eq!(backoff_delay(1), 2_000);
        assert_eq!(backoff_delay(2), 4_000);
        assert_eq!(backoff_delay(10), 30_000);
    }
}
