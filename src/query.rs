//! Resource Fetch Layer
//!
//! Keyed, cached, retrying access to list and detail endpoints; the
//! alternate read path next to the hand-rolled stores. Cache bookkeeping
//! lives in `gymdesk_core::query`; this adapter adds the browser clock,
//! the network calls and the background tasks.

use std::sync::{Arc, Mutex};

use gloo_timers::future::TimeoutFuture;
use gymdesk_core::query::{
    adjacent_page_params, backoff_delay, CachePolicy, Lookup, QueryCache, QueryKey, MAX_ATTEMPTS,
};
use gymdesk_core::{Pagination, Params};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;

use crate::api::{self, ApiError};

#[derive(Clone)]
pub struct QueryClient {
    cache: Arc<Mutex<QueryCache>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(Mutex::new(QueryCache::new())),
        }
    }

    fn now() -> f64 {
        js_sys::Date::now()
    }

    fn lookup(&self, key: &QueryKey) -> Lookup {
        self.cache
            .lock()
            .expect("query cache lock poisoned")
            .lookup(key, Self::now())
    }

    /// Serve fresh hits without a network call, serve stale hits and
    /// revalidate in the background, fetch misses with bounded retries.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
        policy: CachePolicy,
    ) -> Result<T, ApiError> {
        let key = QueryKey::new(path, &params);
        match self.lookup(&key) {
            Lookup::Fresh(value) => decode_value(value),
            Lookup::Stale(value) => {
                self.spawn_refetch(key, params, policy);
                decode_value(value)
            }
            Lookup::Miss => {
                let value = self.fetch_remote(&key, &params, policy).await?;
                decode_value(value)
            }
        }
    }

    async fn fetch_remote(
        &self,
        key: &QueryKey,
        params: &Params,
        policy: CachePolicy,
    ) -> Result<Value, ApiError> {
        let mut attempt = 0;
        loop {
            match api::get_value(&key.path, params).await {
                Ok(value) => {
                    let mut cache = self.cache.lock().expect("query cache lock poisoned");
                    cache.insert(key.clone(), value.clone(), policy, Self::now());
                    cache.sweep(Self::now());
                    return Ok(value);
                }
                Err(err) => {
                    attempt += 1;
                    if attempt >= MAX_ATTEMPTS {
                        return Err(err);
                    }
                    TimeoutFuture::new(backoff_delay(attempt - 1)).await;
                }
            }
        }
    }

    fn spawn_refetch(&self, key: QueryKey, params: Params, policy: CachePolicy) {
        let client = self.clone();
        spawn_local(async move {
            let _ = client.fetch_remote(&key, &params, policy).await;
        });
    }

    /// Drop every cached entry sharing the mutated resource's base path.
    pub fn invalidate(&self, base_path: &str) {
        self.cache
            .lock()
            .expect("query cache lock poisoned")
            .invalidate_prefix(base_path);
    }

    /// Run a mutation, then invalidate its base path so affected reads
    /// refetch.
    pub async fn mutate<T, F>(&self, base_path: &str, op: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let out = op.await?;
        self.invalidate(base_path);
        Ok(out)
    }

    /// Warm the cache for the pages adjacent to a successful paginated
    /// fetch, without blocking the caller.
    pub fn prefetch_adjacent(
        &self,
        path: &str,
        params: &Params,
        pagination: Pagination,
        policy: CachePolicy,
    ) {
        for warmed in adjacent_page_params(params, &pagination) {
            let key = QueryKey::new(path, &warmed);
            if matches!(self.lookup(&key), Lookup::Miss) {
                let client = self.clone();
                spawn_local(async move {
                    let _ = client.fetch_remote(&key, &warmed, policy).await;
                });
            }
        }
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|_| ApiError::fallback())
}

/// Get the query client from context.
pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}
