//! Repository coordinating data retrieval and caching.

use std::sync::Arc;

use crate::cache::SnapshotCache;
use crate::data_source::{DataSource, FetchResult};
use crate::Ticker;

/// Cache-aside mediator between a data source and an optional cache.
///
/// The repository is the sole entry point other components use to obtain
/// snapshots. Successful results are written back to the cache; error
/// results never are, so a transient failure is retried on the next call
/// instead of poisoning future lookups.
pub struct DataRepository {
    source: Arc<dyn DataSource>,
    cache: Option<Arc<dyn SnapshotCache>>,
}

impl DataRepository {
    pub fn new(source: Arc<dyn DataSource>, cache: Option<Arc<dyn SnapshotCache>>) -> Self {
        Self { source, cache }
    }

    /// Fetch a result for `ticker`, consulting the cache first when
    /// `use_cache` holds and a cache is configured.
    ///
    /// A cache hit is returned unmodified, with no source call and no cache
    /// write. On a miss the source is consulted and only a successful result
    /// is stored.
    pub async fn fetch(&self, ticker: &Ticker, use_cache: bool) -> FetchResult {
        if use_cache {
            if let Some(cache) = &self.cache {
                if let Some(cached) = cache.get(ticker) {
                    return cached;
                }
            }
        }

        let result = self.source.fetch(ticker).await;

        if result.is_success() {
            if let Some(cache) = &self.cache {
                cache.set(&result);
            }
        }

        result
    }

    /// Fetch a result for `ticker` with the cache enabled.
    pub async fn fetch_cached(&self, ticker: &Ticker) -> FetchResult {
        self.fetch(ticker, true).await
    }

    /// Fetch results for `tickers` sequentially, preserving input order.
    ///
    /// This is the aggregation point the screening engine relies on; each
    /// ticker goes through the same per-ticker cache-aside algorithm and
    /// carries its own success or failure.
    pub async fn fetch_many(&self, tickers: &[Ticker], use_cache: bool) -> Vec<FetchResult> {
        let mut results = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            results.push(self.fetch(ticker, use_cache).await);
        }
        results
    }
}
