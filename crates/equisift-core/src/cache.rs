//! In-memory caching of fetch results.
//!
//! Entries are keyed by the uppercased ticker and live until an explicit
//! `clear()`; there is no TTL. A single lock serializes access; fetches are
//! sequential, so per-key locking is not needed.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::data_source::FetchResult;
use crate::Ticker;

/// Storage contract for previously fetched results.
pub trait SnapshotCache: Send + Sync {
    /// Return the cached result for `ticker`, if any. Lookup only, never
    /// triggers a fetch.
    fn get(&self, ticker: &Ticker) -> Option<FetchResult>;

    /// Store `result` under its uppercased ticker, overwriting any prior
    /// entry.
    fn set(&self, result: &FetchResult);

    /// Remove all cached entries.
    fn clear(&self);

    /// Number of cached entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Thread-safe in-memory cache for fetch results.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    store: Mutex<HashMap<String, FetchResult>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotCache for InMemoryCache {
    fn get(&self, ticker: &Ticker) -> Option<FetchResult> {
        let store = self.store.lock().expect("cache lock should not be poisoned");
        store.get(ticker.as_str()).cloned()
    }

    fn set(&self, result: &FetchResult) {
        let mut store = self.store.lock().expect("cache lock should not be poisoned");
        store.insert(result.ticker().as_str().to_owned(), result.clone());
    }

    fn clear(&self) {
        let mut store = self.store.lock().expect("cache lock should not be poisoned");
        store.clear();
    }

    fn len(&self) -> usize {
        let store = self.store.lock().expect("cache lock should not be poisoned");
        store.len()
    }
}
